//! # API Server Module
//!
//! ## Purpose
//! REST API server exposing the catalog over HTTP: paginated listing,
//! type and name lookups, neighbor lookup by id, validated inserts, and
//! static image serving.
//!
//! ## Input/Output Specification
//! - **Input**: HTTP requests with query filters or JSON insert bodies
//! - **Output**: JSON responses with catalog pages, counts, neighbor triples
//! - **Endpoints**: `/pokemons` (GET/POST), `/pokemons/type/{type}`,
//!   `/pokemons/name/{name}`, `/pokemons/{id}`, `/images/*`, `/health`
//!
//! ## Key Features
//! - CORS support for web frontends
//! - Structured error responses with stable client-facing messages
//! - Readiness reporting for the background dataset load

use crate::errors::CatalogError;
use crate::query::{self, ListFilter};
use crate::validation::NewPokemon;
use crate::Pokemon;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};

/// Application state wrapper for the API server
pub struct ApiServer {
    app_state: crate::AppState,
}

/// Query parameters accepted by the listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
}

/// Listing response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub data: Vec<Pokemon>,
    pub total_pokemons: usize,
    pub page: u32,
    pub limit: u32,
}

/// Envelope for the path-form type and name lookups
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResponse {
    pub data: Vec<Pokemon>,
    pub total_results: usize,
}

/// Envelope for a successful insert
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub data: Pokemon,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub dataset_loaded: bool,
    pub total_pokemons: usize,
}

impl ApiServer {
    /// Create new API server
    pub fn new(app_state: crate::AppState) -> Self {
        Self { app_state }
    }

    /// Run the API server
    pub async fn run(self) -> crate::Result<()> {
        let config = self.app_state.config.clone();
        let bind_addr = format!("{}:{}", config.server.host, config.server.port);

        tracing::info!("Starting API server on {}", bind_addr);

        let app_state = self.app_state;
        let server = HttpServer::new(move || {
            let cors = if app_state.config.server.enable_cors {
                Cors::permissive()
            } else {
                Cors::default()
            };

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(app_state.clone()))
                .configure(routes)
                .service(Files::new("/images", app_state.config.dataset.images_dir.clone()))
        })
        .bind(&bind_addr)
        .map_err(|e| CatalogError::Internal {
            message: format!("Failed to bind server to {}: {}", bind_addr, e),
        })?
        .run();

        server.await.map_err(|e| CatalogError::Internal {
            message: format!("Server error: {}", e),
        })?;

        Ok(())
    }
}

/// Register the JSON routes. The `/pokemons/{id}` route goes last so the
/// literal `type/` and `name/` segments win the match.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/pokemons", web::get().to(list_pokemons))
        .route("/pokemons", web::post().to(create_pokemon))
        .route("/pokemons/type/{type}", web::get().to(pokemons_by_type))
        .route("/pokemons/name/{name}", web::get().to(pokemons_by_name))
        .route("/pokemons/{id}", web::get().to(pokemon_by_id))
        .route("/health", web::get().to(health));
}

/// Listing endpoint: optional type/name filters plus pagination
async fn list_pokemons(
    app_state: web::Data<crate::AppState>,
    params: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    let params = params.into_inner();
    let filter = ListFilter {
        type_tag: params.type_tag,
        search: params.search,
        page: params.page,
        limit: params.limit,
    };

    let snapshot = app_state.store.snapshot();
    let page = query::list(&snapshot, &filter);

    Ok(HttpResponse::Ok().json(ListResponse {
        data: page.data,
        total_pokemons: page.total,
        page: page.page,
        limit: page.limit,
    }))
}

/// Insert endpoint: validates the candidate and appends it to the store
async fn create_pokemon(
    app_state: web::Data<crate::AppState>,
    body: web::Json<NewPokemon>,
) -> ActixResult<HttpResponse> {
    match app_state.store.insert(body.into_inner()) {
        Ok(pokemon) => Ok(HttpResponse::Created().json(CreatedResponse {
            message: "New Pokémon created successfully.".to_string(),
            data: pokemon,
        })),
        Err(e) if e.is_validation() => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })))
        }
        Err(e) => {
            tracing::error!("Insert error: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Internal server error" })))
        }
    }
}

/// Path-form type lookup, no pagination
async fn pokemons_by_type(
    app_state: web::Data<crate::AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let snapshot = app_state.store.snapshot();
    let data = query::filter_by_type(&snapshot, &path);
    let total_results = data.len();

    Ok(HttpResponse::Ok().json(FilterResponse { data, total_results }))
}

/// Path-form name substring lookup, no pagination
async fn pokemons_by_name(
    app_state: web::Data<crate::AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let snapshot = app_state.store.snapshot();
    let data = query::filter_by_name(&snapshot, &path);
    let total_results = data.len();

    Ok(HttpResponse::Ok().json(FilterResponse { data, total_results }))
}

/// Neighbor lookup by id. Non-numeric ids fall outside the store range and
/// report not-found like any other out-of-range id.
async fn pokemon_by_id(
    app_state: web::Data<crate::AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id: u32 = match path.parse() {
        Ok(id) => id,
        Err(_) => return Ok(not_found()),
    };

    let snapshot = app_state.store.snapshot();
    match query::neighbors(&snapshot, id) {
        Some(neighbors) => Ok(HttpResponse::Ok().json(neighbors)),
        None => Ok(not_found()),
    }
}

/// Health check endpoint handler
async fn health(app_state: web::Data<crate::AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        dataset_loaded: app_state.store.is_ready(),
        total_pokemons: app_state.store.len(),
    }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "message": "Not found" }))
}
