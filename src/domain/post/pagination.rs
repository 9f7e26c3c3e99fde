//! Paginated listing envelope

use serde::{Deserialize, Serialize};

use super::ListQuery;

/// Page metadata returned alongside listed items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u32,
    pub item_count: u64,
    pub items_per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl PaginationMeta {
    pub fn new(query: &ListQuery, item_count: usize, total_items: u64) -> Self {
        let page = query.page();
        let limit = query.limit();
        let total_pages = total_items.div_ceil(u64::from(limit));

        Self {
            current_page: page,
            item_count: item_count as u64,
            items_per_page: limit,
            total_items,
            total_pages,
            has_previous_page: page > 1,
            has_next_page: u64::from(page) < total_pages,
        }
    }
}

/// A page of items together with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationEnvelope<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> PaginationEnvelope<T> {
    pub fn new(query: &ListQuery, items: Vec<T>, total_items: u64) -> Self {
        let meta = PaginationMeta::new(query, items.len(), total_items);
        Self { items, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: u32, limit: u32) -> ListQuery {
        ListQuery::new(Some(page), Some(limit), None).unwrap()
    }

    #[test]
    fn test_last_partial_page() {
        let meta = PaginationMeta::new(&query(4, 2), 1, 7);

        assert_eq!(meta.total_pages, 4);
        assert_eq!(meta.item_count, 1);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_first_page() {
        let meta = PaginationMeta::new(&query(1, 2), 2, 7);

        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.items_per_page, 2);
        assert!(!meta.has_previous_page);
        assert!(meta.has_next_page);
    }

    #[test]
    fn test_empty_collection() {
        let meta = PaginationMeta::new(&query(1, 2), 0, 0);

        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_page_past_the_end() {
        let meta = PaginationMeta::new(&query(9, 2), 0, 7);

        assert_eq!(meta.item_count, 0);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_envelope_serializes_camel_case_meta() {
        let envelope: PaginationEnvelope<u32> = PaginationEnvelope::new(&query(1, 2), vec![1, 2], 3);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["meta"]["totalPages"], 2);
        assert_eq!(json["meta"]["hasNextPage"], true);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }
}
