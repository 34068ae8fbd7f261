//! Sorting of records by one or more fields (`_sort` / `_order`).

use std::cmp::Ordering;

use serde_json::Value;

use crate::record::{Record, lookup};

/// Direction of a sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl Order {
    /// Parse `asc` / `desc` (case-insensitive). Anything else is ascending.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// One field to sort by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Field path (dotted paths reach into nested objects).
    pub field: String,
    /// Direction.
    pub order: Order,
}

/// Ordered list of sort keys; later keys break ties of earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Build a spec from comma-separated `_sort` and `_order` values.
    ///
    /// `_order` entries pair with `_sort` entries by position; missing ones
    /// default to ascending. Returns `None` when no field is named.
    #[must_use]
    pub fn parse(sort: &str, order: Option<&str>) -> Option<Self> {
        let mut orders = order.unwrap_or_default().split(',').map(Order::parse);
        let keys: Vec<SortKey> = sort
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| SortKey {
                field: field.to_string(),
                order: orders.next().unwrap_or_default(),
            })
            .collect();
        if keys.is_empty() { None } else { Some(Self { keys }) }
    }

    /// Sort keys in priority order.
    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Stable-sort records in place.
    pub fn apply(&self, records: &mut [Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.keys
            .iter()
            .map(|key| compare_field(lookup(a, &key.field), lookup(b, &key.field), key.order))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Missing values always sort after present ones, whatever the direction.
fn compare_field(a: Option<&Value>, b: Option<&Value>, order: Order) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare_values(a, b);
            match order {
                Order::Asc => ordering,
                Order::Desc => ordering.reverse(),
            }
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or_default();
            let b = b.as_f64().unwrap_or_default();
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        [
            json!({"id": 1, "title": "b", "price": 20}),
            json!({"id": 2, "title": "a", "price": 5}),
            json!({"id": 3, "title": "c"}),
            json!({"id": 4, "title": "a", "price": 100}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn should_return_none_without_fields() {
        assert!(SortSpec::parse("", Some("desc")).is_none());
        assert!(SortSpec::parse(" , ", None).is_none());
    }

    #[test]
    fn should_sort_numbers_numerically() {
        let mut r = records();
        SortSpec::parse("price", None).unwrap().apply(&mut r);
        assert_eq!(ids(&r), vec![2, 1, 4, 3]);
    }

    #[test]
    fn should_keep_missing_fields_last_when_descending() {
        let mut r = records();
        SortSpec::parse("price", Some("desc")).unwrap().apply(&mut r);
        assert_eq!(ids(&r), vec![4, 1, 2, 3]);
    }

    #[test]
    fn should_break_ties_with_secondary_key() {
        let mut r = records();
        SortSpec::parse("title,price", Some("asc,desc"))
            .unwrap()
            .apply(&mut r);
        assert_eq!(ids(&r), vec![4, 2, 1, 3]);
    }

    #[test]
    fn should_be_stable_for_equal_keys() {
        let mut r = records();
        SortSpec::parse("missing", None).unwrap().apply(&mut r);
        assert_eq!(ids(&r), vec![1, 2, 3, 4]);
    }

    #[test]
    fn should_parse_order_case_insensitively() {
        assert_eq!(Order::parse("DESC"), Order::Desc);
        assert_eq!(Order::parse("up"), Order::Asc);
    }
}
