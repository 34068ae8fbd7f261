//! Exact-match filters over record fields.
//!
//! Query strings only carry text, so a stored value matches when its
//! textual form equals the expected text: `age=30` matches `30` and `"30"`,
//! `active=true` matches `true`. Arrays and objects never match.

use serde_json::Value;

use crate::record::{Record, lookup};

/// Accepted values for one field. Matches when any value matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    field: String,
    accepted: Vec<String>,
}

impl FieldFilter {
    /// Field path this filter applies to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Values accepted for the field.
    #[must_use]
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    fn matches(&self, record: &Record) -> bool {
        lookup(record, &self.field).is_some_and(|value| {
            self.accepted
                .iter()
                .any(|expected| value_matches(value, expected))
        })
    }
}

/// Conjunction of [`FieldFilter`]s, in the order fields were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    fields: Vec<FieldFilter>,
}

impl Filters {
    /// Create an empty filter set that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an accepted value for a field.
    ///
    /// Repeating a field widens it (`role=admin&role=editor`), distinct
    /// fields narrow the result.
    pub fn push(&mut self, field: impl Into<String>, expected: impl Into<String>) {
        let field = field.into();
        let expected = expected.into();
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.accepted.push(expected),
            None => self.fields.push(FieldFilter {
                field,
                accepted: vec![expected],
            }),
        }
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, expected: impl Into<String>) -> Self {
        self.push(field, expected);
        self
    }

    /// Whether no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate the per-field filters.
    pub fn iter(&self) -> impl Iterator<Item = &FieldFilter> {
        self.fields.iter()
    }

    /// Whether a record satisfies every field filter.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.fields.iter().all(|filter| filter.matches(record))
    }

    /// Keep the matching records, preserving their relative order.
    #[must_use]
    pub fn apply(&self, mut records: Vec<Record>) -> Vec<Record> {
        if !self.is_empty() {
            records.retain(|record| self.matches(record));
        }
        records
    }
}

fn value_matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(text) => text == expected,
        Value::Number(number) => number.to_string() == expected,
        Value::Bool(flag) => flag.to_string() == expected,
        Value::Null => expected == "null",
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> Vec<Record> {
        [
            json!({"id": 1, "name": "ada", "role": "admin", "age": 36}),
            json!({"id": 2, "name": "bob", "role": "user", "age": 25}),
            json!({"id": 3, "name": "cy", "role": "admin", "age": 25}),
            json!({"id": 4, "name": "dee", "role": "editor", "active": true}),
            json!({"id": 5, "name": "eve"}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn should_keep_everything_when_empty() {
        let filtered = Filters::new().apply(users());
        assert_eq!(filtered.len(), 5);
    }

    #[test]
    fn should_keep_only_admins_in_original_order() {
        let filtered = Filters::new().with("role", "admin").apply(users());
        assert_eq!(ids(&filtered), vec![1, 3]);
        assert!(filtered.iter().all(|r| r["role"] == "admin"));
    }

    #[test]
    fn should_and_distinct_fields() {
        let filtered = Filters::new()
            .with("role", "admin")
            .with("age", "25")
            .apply(users());
        assert_eq!(ids(&filtered), vec![3]);
    }

    #[test]
    fn should_or_repeated_field() {
        let filters = Filters::new().with("role", "admin").with("role", "editor");
        assert_eq!(filters.iter().count(), 1);
        assert_eq!(ids(&filters.apply(users())), vec![1, 3, 4]);
    }

    #[test]
    fn should_match_numbers_and_booleans_by_text() {
        assert_eq!(ids(&Filters::new().with("age", "36").apply(users())), vec![1]);
        assert_eq!(
            ids(&Filters::new().with("active", "true").apply(users())),
            vec![4]
        );
    }

    #[test]
    fn should_drop_records_missing_the_field() {
        let filtered = Filters::new().with("role", "nobody").apply(users());
        assert!(filtered.is_empty());
    }

    #[test]
    fn should_match_nested_field() {
        let records = vec![
            json!({"id": 1, "author": {"name": "ada"}}).as_object().cloned().unwrap(),
            json!({"id": 2, "author": {"name": "bob"}}).as_object().cloned().unwrap(),
        ];
        let filtered = Filters::new().with("author.name", "bob").apply(records);
        assert_eq!(ids(&filtered), vec![2]);
    }
}
