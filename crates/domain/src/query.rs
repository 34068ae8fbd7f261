//! The query processor: filter → sort → paginate.

use crate::filter::Filters;
use crate::page::{Page, PageRequest, paginate};
use crate::record::Record;
use crate::sort::SortSpec;

/// Query-string key for the page size.
pub const LIMIT_PARAM: &str = "_limit";
/// Query-string key for the page number.
pub const PAGE_PARAM: &str = "_page";
/// Query-string key for sort fields.
pub const SORT_PARAM: &str = "_sort";
/// Query-string key for sort directions.
pub const ORDER_PARAM: &str = "_order";

/// Everything needed to turn a collection into a [`Page`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionQuery {
    /// Page size and number.
    pub page: PageRequest,
    /// Exact-match field filters.
    pub filters: Filters,
    /// Optional ordering applied after filtering.
    pub sort: Option<SortSpec>,
}

impl CollectionQuery {
    /// Build a query from raw query-string pairs.
    ///
    /// Keys starting with `_` are control parameters and never become
    /// filters; unknown control keys are ignored. The last occurrence of a
    /// repeated control key wins.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut limit = None;
        let mut page = None;
        let mut sort = None;
        let mut order = None;
        let mut filters = Filters::new();

        for (key, value) in pairs {
            let value = value.as_ref().to_string();
            match key.as_ref() {
                LIMIT_PARAM => limit = Some(value),
                PAGE_PARAM => page = Some(value),
                SORT_PARAM => sort = Some(value),
                ORDER_PARAM => order = Some(value),
                control if control.starts_with('_') => {}
                field => filters.push(field, value),
            }
        }

        Self {
            page: PageRequest::parse(limit.as_deref(), page.as_deref()),
            filters,
            sort: sort.and_then(|sort| SortSpec::parse(&sort, order.as_deref())),
        }
    }

    /// Run the query over a collection's records.
    #[must_use]
    pub fn run(&self, records: Vec<Record>) -> Page<Record> {
        let mut matching = self.filters.apply(records);
        if let Some(sort) = &self.sort {
            sort.apply(&mut matching);
        }
        paginate(matching, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn courses(n: i64) -> Vec<Record> {
        (1..=n)
            .map(|id| {
                json!({"id": id, "title": format!("course {id}")})
                    .as_object()
                    .cloned()
                    .unwrap()
            })
            .collect()
    }

    fn users() -> Vec<Record> {
        (1..=12)
            .map(|id| {
                let role = if id % 3 == 0 { "admin" } else { "user" };
                json!({"id": id, "role": role}).as_object().cloned().unwrap()
            })
            .collect()
    }

    #[test]
    fn should_parse_control_parameters_and_filters() {
        let query = CollectionQuery::from_pairs([
            ("_limit", "5"),
            ("_page", "2"),
            ("role", "admin"),
            ("_embed", "posts"),
        ]);
        assert_eq!(query.page, PageRequest::new(5, 2));
        assert_eq!(query.filters, Filters::new().with("role", "admin"));
        assert!(query.sort.is_none());
    }

    #[test]
    fn should_default_when_no_parameters() {
        let query = CollectionQuery::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(query, CollectionQuery::default());
    }

    #[test]
    fn should_paginate_twenty_five_courses() {
        let query = CollectionQuery::from_pairs([("_limit", "10"), ("_page", "2")]);
        let page = query.run(courses(25));
        let ids: Vec<i64> = page.data.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.prev, Some(1));
        assert_eq!(page.next, Some(3));
        assert_eq!(page.pages, 3);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn should_count_pages_after_filtering() {
        let query = CollectionQuery::from_pairs([("_limit", "3"), ("role", "admin")]);
        let page = query.run(users());
        assert_eq!(page.total, 4);
        assert_eq!(page.pages, 2);
        assert_eq!(page.data.len(), 3);
        assert!(page.data.iter().all(|r| r["role"] == "admin"));
    }

    #[test]
    fn should_sort_before_paginating() {
        let query =
            CollectionQuery::from_pairs([("_sort", "id"), ("_order", "desc"), ("_limit", "2")]);
        let page = query.run(courses(5));
        let ids: Vec<i64> = page.data.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![5, 4]);
    }
}
