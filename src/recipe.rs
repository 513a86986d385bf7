// src/recipe.rs
//! Recipe record and its JSON shape
//!
//! A recipe is a named set of tags, ingredients and instructions with a
//! server-assigned id and creation timestamp. Decoding is lenient: unknown
//! fields are ignored, and missing or `null` fields take their empty value.
//! Request bodies go through [`Recipe::from_json_slice`], which also accepts
//! repeated keys (last one wins), keys that differ only in case, and a bare
//! `null` body.

use chrono::{DateTime, Utc};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// JSON keys of a recipe, in declaration order
const FIELDS: [&str; 6] = ["id", "name", "tags", "ingredients", "instructions", "publishedAt"];

/// A single recipe record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Opaque identifier assigned on create
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Matched case-insensitively by tag search
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    /// Set once on create, never refreshed by update
    #[serde(default = "zero_time", deserialize_with = "null_as_zero_time")]
    pub published_at: DateTime<Utc>,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            tags: Vec::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            published_at: zero_time(),
        }
    }
}

/// Timestamp of a recipe that never had one: `0001-01-01T00:00:00Z`
pub fn zero_time() -> DateTime<Utc> {
    DateTime::from_timestamp(-62_135_596_800, 0).unwrap_or_default()
}

impl Recipe {
    /// Create a recipe with a name and no other content
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style tag setter
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Decode a request body
    ///
    /// Any valid JSON object is accepted as long as the recipe fields have
    /// the right types. `null` decodes to an empty recipe.
    pub fn from_json_slice(body: &[u8]) -> serde_json::Result<Self> {
        Self::from_json_value(serde_json::from_slice(body)?)
    }

    /// Decode an already-parsed JSON value
    ///
    /// Parsing into a `Value` first collapses repeated keys to their last
    /// occurrence. Keys are then matched to fields exactly, or failing that
    /// ignoring case; an exact key beats a case-folded one.
    pub fn from_json_value(value: Value) -> serde_json::Result<Self> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            Value::Bool(b) => return Err(invalid_type(Unexpected::Bool(b))),
            Value::Number(_) => return Err(invalid_type(Unexpected::Other("number"))),
            Value::String(s) => return Err(invalid_type(Unexpected::Str(&s))),
            Value::Array(_) => return Err(invalid_type(Unexpected::Seq)),
        };

        let mut fields = Map::new();
        for (key, value) in object {
            if FIELDS.contains(&key.as_str()) {
                fields.insert(key, value);
            } else if let Some(field) = FIELDS.iter().find(|f| eq_fold(f, &key)) {
                fields.entry(*field).or_insert(value);
            }
        }

        Self::deserialize(Value::Object(fields))
    }

    /// Whether any tag equals `tag`, ignoring case
    ///
    /// This is whole-tag equality under simple case folding: `"Dessert"`
    /// matches `"dessert"` but not `"desserts"`, and `"Σ"` matches both `"σ"`
    /// and `"ς"`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| eq_fold(t, tag))
    }
}

fn invalid_type(unexpected: Unexpected<'_>) -> serde_json::Error {
    serde_json::Error::invalid_type(unexpected, &"a recipe object")
}

/// Case-insensitive equality using one-to-one (simple) case folding
///
/// Characters whose case mapping expands to several characters (`ß`, `İ`)
/// only match themselves.
fn eq_fold(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    let mut lower = upper.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => upper,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(zero_time))
}
