//! Query parameter types for the dataset API.
//!
//! The v1 endpoint takes two structured query parameters: `filters`, a
//! `;`-joined list of string predicates, and `structure`, a JSON mapping
//! from output field name to a source field path (or a nested mapping).
//! Both are modeled here as ordered collections so the serialized strings
//! are stable across requests.

use crate::error::Result;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// An ordered set of filter predicates (e.g. `areaType=overview`)
///
/// Order affects only the serialized string, not which records the API
/// returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<String>,
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter predicate, builder-style
    #[must_use]
    pub fn with(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Number of predicates in the set
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the set contains no predicates
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Serialize the set to the `filters` query parameter value
    pub fn joined(&self) -> String {
        self.filters.join(";")
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A field entry in a [`Structure`]: either a flat source field path or a
/// nested structure
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructureValue {
    /// Flat source field path (e.g. `newCasesByPublishDate`)
    Path(String),
    /// Nested mapping of output names to further entries
    Nested(Structure),
}

/// The shape of the dataset requested from the API
///
/// An ordered mapping from output field name to either a source field path
/// or a nested mapping. Serialized to compact JSON (no whitespace after
/// separators) for the `structure` query parameter. Insertion order is
/// preserved in the serialized string, so identical construction yields an
/// identical parameter value on every request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Structure {
    fields: Vec<(String, StructureValue)>,
}

impl Structure {
    /// Create an empty structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an output field name to a flat source field path, builder-style
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.fields
            .push((name.into(), StructureValue::Path(path.into())));
        self
    }

    /// Map an output field name to a nested structure, builder-style
    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, inner: Structure) -> Self {
        self.fields
            .push((name.into(), StructureValue::Nested(inner)));
        self
    }

    /// Whether the structure contains no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize to the compact JSON string sent as the `structure` query
    /// parameter
    pub fn to_compact_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// serde_json's default map type sorts keys; serializing the Vec of pairs as
// a map keeps insertion order.
impl Serialize for Structure {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for StructureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            StructureValue::Path(path) => serializer.serialize_str(path),
            StructureValue::Nested(inner) => inner.serialize(serializer),
        }
    }
}
