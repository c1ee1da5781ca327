//! Relationship fields that arrive either as bare ids or expanded documents.
//!
//! Depending on the query depth the CMS returns `"categories": ["64f…"]` or
//! `"categories": [{ "id": "64f…", "title": "…" }]`. [`Relation`] captures
//! both shapes plus absence, and every consumer matches on it instead of
//! probing the JSON at runtime.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::DocId;

/// A relationship field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Relation<T> {
    /// Only the related document's identifier was returned.
    Id(DocId),
    /// The related document was expanded in place.
    Expanded(T),
    /// The field was missing, null, or could not be understood.
    Absent,
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Relation::Absent
    }
}

impl<T> Relation<T> {
    /// The expanded document, if depth expansion happened.
    ///
    /// A bare identifier counts as unresolved: fetching it is the query
    /// layer's job, not the resolver's.
    pub fn resolve(&self) -> Option<&T> {
        match self {
            Relation::Expanded(doc) => Some(doc),
            Relation::Id(_) | Relation::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Relation::Absent)
    }
}

/// Resolve every element of a multi-valued relationship, keeping order and
/// dropping the unresolved ones.
pub fn resolve_many<T>(relations: &[Relation<T>]) -> Vec<&T> {
    relations.iter().filter_map(Relation::resolve).collect()
}

impl<T: DeserializeOwned> Relation<T> {
    /// Classify a raw JSON value.
    ///
    /// Strings and numbers are identifiers, objects are decoded as `T`.
    /// Anything that does not fit (including an object that fails to decode)
    /// becomes [`Relation::Absent`].
    pub fn from_value(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Relation::Absent,
            Value::String(id) if id.trim().is_empty() => Relation::Absent,
            Value::String(id) => Relation::Id(id),
            Value::Number(n) => Relation::Id(n.to_string()),
            Value::Object(map) => match serde_json::from_value::<T>(Value::Object(map)) {
                Ok(doc) => Relation::Expanded(doc),
                Err(e) => {
                    tracing::debug!(error = %e, "Malformed expanded relationship, treating as absent");
                    Relation::Absent
                }
            },
            other => {
                tracing::debug!(kind = value_kind(&other), "Unexpected relationship shape, treating as absent");
                Relation::Absent
            }
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Relation<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Relation::from_value(value))
    }
}

/// Deserialize a list field that the CMS may send as `null`.
pub fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Array(_) => "array",
        _ => "other",
    }
}
