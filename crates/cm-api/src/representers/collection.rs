//! Response envelopes
//!
//! Single resources and plain lists go under `data`. Paginated lists add
//! `links` and `meta` describing the page.

use cm_core::Page;
use serde::Serialize;

/// `{"data": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated list with navigation links and page metadata
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedCollection<T> {
    pub data: Vec<T>,
    pub links: PageLinks,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub from: Option<i64>,
    pub last_page: i64,
    pub path: String,
    pub per_page: i64,
    pub to: Option<i64>,
    pub total: i64,
}

impl<T: Serialize> PaginatedCollection<T> {
    /// Build the envelope for `page`, with links relative to `path`
    pub fn new<U, F>(page: Page<U>, path: &str, represent: F) -> Self
    where
        F: FnMut(U) -> T,
    {
        let link = |n: i64| format!("{}?size={}&page={}", path, page.size, n);

        let links = PageLinks {
            first: link(1),
            last: link(page.last_page()),
            prev: page.has_prev().then(|| link(page.page - 1)),
            next: page.has_next().then(|| link(page.page + 1)),
        };

        let meta = PageMeta {
            current_page: page.page,
            from: page.from(),
            last_page: page.last_page(),
            path: path.to_string(),
            per_page: page.size,
            to: page.to(),
            total: page.total,
        };

        Self {
            data: page.items.into_iter().map(represent).collect(),
            links,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cm_core::PageRequest;

    #[test]
    fn test_middle_page() {
        let page = Page::new(vec![6, 7, 8, 9, 10], 20, PageRequest::new(Some(2), Some(5), 10, 100));
        let collection = PaginatedCollection::new(page, "/api/contacts", |n| n * 2);

        assert_eq!(collection.data, vec![12, 14, 16, 18, 20]);
        assert_eq!(collection.links.first, "/api/contacts?size=5&page=1");
        assert_eq!(collection.links.last, "/api/contacts?size=5&page=4");
        assert_eq!(collection.links.prev.as_deref(), Some("/api/contacts?size=5&page=1"));
        assert_eq!(collection.links.next.as_deref(), Some("/api/contacts?size=5&page=3"));
        assert_eq!(collection.meta.current_page, 2);
        assert_eq!(collection.meta.from, Some(6));
        assert_eq!(collection.meta.to, Some(10));
        assert_eq!(collection.meta.total, 20);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<i32> = Page::new(vec![], 0, PageRequest::default());
        let collection = PaginatedCollection::new(page, "/api/contacts", |n| n);

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["links"]["prev"], serde_json::Value::Null);
        assert_eq!(json["links"]["next"], serde_json::Value::Null);
        assert_eq!(json["meta"]["from"], serde_json::Value::Null);
        assert_eq!(json["meta"]["last_page"], 1);
        assert_eq!(json["meta"]["total"], 0);
    }
}
