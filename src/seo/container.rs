//! SEOmatic container types.
//!
//! SEOmatic serializes each category of head tags as its own JSON string.
//! `SeomaticData` carries the five strings for one page; `Container` is one
//! parsed string, keyed in the order SEOmatic wrote it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::error::{Result, SeoError};
use crate::debug;

/// Attributes of one HTML tag, e.g. `rel` and `href` of a `<link>`.
pub type AttributeSet = Map<String, Value>;

/// The five SEOmatic container categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    JsonLd,
    Link,
    Script,
    Tag,
    Title,
}

impl ContainerKind {
    pub const ALL: [Self; 5] = [Self::JsonLd, Self::Link, Self::Script, Self::Tag, Self::Title];

    /// Field name SEOmatic uses for this container.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::JsonLd => "metaJsonLdContainer",
            Self::Link => "metaLinkContainer",
            Self::Script => "metaScriptContainer",
            Self::Tag => "metaTagContainer",
            Self::Title => "metaTitleContainer",
        }
    }

    /// HTML tag produced per normalized record, for attribute containers.
    pub fn tag_name(self) -> Option<&'static str> {
        match self {
            Self::Link => Some("link"),
            Self::Tag => Some("meta"),
            _ => None,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One entry value: a single attribute set or a list of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerValue<'a> {
    Single(&'a AttributeSet),
    /// Elements keep their source positions; non-object elements are
    /// skipped by consumers but still occupy their index.
    Many(&'a [Value]),
}

impl<'a> ContainerValue<'a> {
    /// Classify an entry value. Empty and non-tag-shaped values yield `None`.
    pub fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(attrs) => Some(Self::Single(attrs)),
            Value::Array(items) if !items.is_empty() => Some(Self::Many(items)),
            _ => None,
        }
    }
}

/// A parsed container: entry key to entry value, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    entries: Map<String, Value>,
}

impl Container {
    /// Parse one serialized container.
    ///
    /// A top-level value that is not an object (`null`, arrays, ...) is an
    /// empty container, not an error.
    pub fn parse(kind: ContainerKind, raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(SeoError::json(kind))?;
        Ok(Self::from_value(kind, value))
    }

    pub fn from_value(kind: ContainerKind, value: Value) -> Self {
        match value {
            Value::Object(entries) => Self { entries },
            Value::Null => Self::default(),
            other => {
                debug!("seo"; "{kind}: expected an object, got {}", json_type(&other));
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Raw entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// page data
// ============================================================================

/// Serialized SEOmatic containers for one page.
///
/// Mirrors the shape SEOmatic's API returns. Every field is optional; a
/// missing or empty field renders nothing for that category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeomaticData {
    #[serde(deserialize_with = "container_string")]
    pub meta_json_ld_container: Option<String>,
    #[serde(deserialize_with = "container_string")]
    pub meta_link_container: Option<String>,
    #[serde(deserialize_with = "container_string")]
    pub meta_script_container: Option<String>,
    #[serde(deserialize_with = "container_string")]
    pub meta_tag_container: Option<String>,
    #[serde(deserialize_with = "container_string")]
    pub meta_title_container: Option<String>,
}

impl SeomaticData {
    /// The raw string for a container, treating `""` as absent.
    pub fn raw(&self, kind: ContainerKind) -> Option<&str> {
        let field = match kind {
            ContainerKind::JsonLd => &self.meta_json_ld_container,
            ContainerKind::Link => &self.meta_link_container,
            ContainerKind::Script => &self.meta_script_container,
            ContainerKind::Tag => &self.meta_tag_container,
            ContainerKind::Title => &self.meta_title_container,
        };
        field.as_deref().filter(|s| !s.is_empty())
    }

    /// Set the raw string for a container.
    pub fn set(&mut self, kind: ContainerKind, raw: impl Into<String>) {
        let raw = Some(raw.into());
        match kind {
            ContainerKind::JsonLd => self.meta_json_ld_container = raw,
            ContainerKind::Link => self.meta_link_container = raw,
            ContainerKind::Script => self.meta_script_container = raw,
            ContainerKind::Tag => self.meta_tag_container = raw,
            ContainerKind::Title => self.meta_title_container = raw,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContainerKind::ALL.iter().all(|&k| self.raw(k).is_none())
    }
}

/// Accept a container either as a JSON string or already decoded.
///
/// Some SEOmatic endpoints (`asArray: true`) return containers as objects;
/// those are re-serialized so every container goes through the same parser.
fn container_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Ok(Some(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_container_kind_names() {
        assert_eq!(ContainerKind::JsonLd.to_string(), "metaJsonLdContainer");
        assert_eq!(ContainerKind::Title.field_name(), "metaTitleContainer");
        assert_eq!(ContainerKind::Link.tag_name(), Some("link"));
        assert_eq!(ContainerKind::Tag.tag_name(), Some("meta"));
        assert_eq!(ContainerKind::Script.tag_name(), None);
    }

    #[test]
    fn test_parse_keeps_source_order() {
        let container =
            Container::parse(ContainerKind::Tag, r#"{"z": {}, "a": {}, "m": {}}"#).unwrap();
        let keys: Vec<_> = container.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_parse_non_object_is_empty() {
        for raw in ["null", "[]", "[1, 2]", "\"text\"", "3"] {
            let container = Container::parse(ContainerKind::Link, raw).unwrap();
            assert!(container.iter().next().is_none(), "{raw} should give an empty container");
        }
    }

    #[test]
    fn test_parse_malformed_is_error() {
        let err = Container::parse(ContainerKind::Script, "{\"a\":").unwrap_err();
        assert!(matches!(
            err,
            SeoError::Json { container: ContainerKind::Script, .. }
        ));
    }

    #[test]
    fn test_container_value_shapes() {
        let single = json!({"href": "/x"});
        let many = json!([{"href": "/x"}, {"href": "/y"}]);
        let empty = json!([]);

        assert!(matches!(ContainerValue::from_json(&single), Some(ContainerValue::Single(_))));
        assert!(matches!(ContainerValue::from_json(&many), Some(ContainerValue::Many(v)) if v.len() == 2));
        assert_eq!(ContainerValue::from_json(&empty), None);
        assert_eq!(ContainerValue::from_json(&json!(null)), None);
        assert_eq!(ContainerValue::from_json(&json!("x")), None);
        assert_eq!(ContainerValue::from_json(&json!(true)), None);
    }

    #[test]
    fn test_seomatic_data_from_api_shape() {
        let data: SeomaticData = serde_json::from_value(json!({
            "metaTitleContainer": "{\"title\":{\"title\":\"Home\"}}",
            "metaLinkContainer": null,
            "metaTagContainer": "",
            "metaScriptContainer": {"ga": {"script": "x"}},
            "metaSiteVarsContainer": "{}"
        }))
        .unwrap();

        assert_eq!(
            data.raw(ContainerKind::Title),
            Some("{\"title\":{\"title\":\"Home\"}}")
        );
        assert_eq!(data.raw(ContainerKind::Link), None);
        assert_eq!(data.raw(ContainerKind::Tag), None);
        assert_eq!(data.raw(ContainerKind::JsonLd), None);
        assert_eq!(
            data.raw(ContainerKind::Script),
            Some("{\"ga\":{\"script\":\"x\"}}")
        );
    }

    #[test]
    fn test_seomatic_data_set_and_empty() {
        let mut data = SeomaticData::default();
        assert!(data.is_empty());

        data.set(ContainerKind::Link, "{}");
        assert!(!data.is_empty());
        assert_eq!(data.raw(ContainerKind::Link), Some("{}"));
    }
}
