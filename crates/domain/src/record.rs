//! Records — schema-less JSON objects stored in collections.

use serde_json::{Map, Value};

/// A single item of a collection. No schema is enforced.
pub type Record = Map<String, Value>;

/// Field holding a record's identity.
pub const ID_FIELD: &str = "id";

/// Read the raw `id` value of a record, if any.
#[must_use]
pub fn id_of(record: &Record) -> Option<&Value> {
    record.get(ID_FIELD)
}

/// Resolve a dotted field path (`author.name`) inside a record.
///
/// Each segment descends into a nested object; any other value on the way
/// ends the lookup.
#[must_use]
pub fn lookup<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = record.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Shallow-merge `patch` into `target`, top-level fields only.
pub fn merge(target: &mut Record, patch: Record) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}
