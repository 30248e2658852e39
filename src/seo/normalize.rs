//! Container to tag-list normalization.
//!
//! Flattens a link or meta container into one keyed record per tag:
//!
//! ```text
//! {"canonical": {...}, "alternate": [{...}, {...}]}
//!   -> canonical, alternate0, alternate1
//! ```
//!
//! Array entries are keyed `<key><index>` with no separator. That can collide
//! with a sibling key (`"alternate1"` next to `"alternate"[1]`); the format is
//! kept as is because hosts diff on these keys.

use serde::Serialize;
use serde_json::Value;

use super::container::{AttributeSet, Container, ContainerValue, json_type};
use super::value::{attr_value, is_truthy};
use crate::debug;
use crate::markup::{Element, SeoHead, Tag};
use crate::utils::html::is_valid_attr_name;
use tola_vdom::prelude::Attrs;

/// One tag's attributes plus its derived key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub key: String,
    #[serde(flatten)]
    pub attrs: AttributeSet,
}

impl NormalizedRecord {
    fn new(key: String, source: &AttributeSet) -> Self {
        // The derived key is the record's identity; a source `key` attribute
        // would only shadow it and is never rendered
        let attrs = source
            .iter()
            .filter(|(name, _)| name.as_str() != "key")
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Self { key, attrs }
    }

    /// Attributes in HTML form.
    ///
    /// Values with no attribute text and names that are not valid attribute
    /// names are dropped.
    pub fn html_attrs(&self) -> Vec<(String, String)> {
        self.attrs
            .iter()
            .filter(|(name, _)| {
                let valid = is_valid_attr_name(name);
                if !valid {
                    debug!("seo"; "`{}`: dropping invalid attribute name {:?}", self.key, name);
                }
                valid
            })
            .filter_map(|(name, value)| attr_value(value).map(|v| (name.clone(), v)))
            .collect()
    }

    /// Build the element for this record.
    pub fn to_element(&self, tag: &str) -> Element {
        let attrs = Attrs::from_iter(
            self.html_attrs()
                .into_iter()
                .map(|(k, v)| (k.into(), v.into())),
        );
        SeoHead::element(tag, attrs)
    }

    /// Build the keyed tag for this record.
    pub fn to_tag(&self, tag: &str) -> Tag {
        Tag::new(self.to_element(tag)).with_key(self.key.as_str())
    }
}

/// Flatten a container into keyed records, in entry order then array order.
pub fn normalize(container: &Container) -> Vec<NormalizedRecord> {
    container
        .iter()
        .flat_map(|(key, value)| normalize_entry(key, value))
        .collect()
}

fn normalize_entry(key: &str, value: &Value) -> Vec<NormalizedRecord> {
    if key.is_empty() || !is_truthy(value) {
        return Vec::new();
    }

    match ContainerValue::from_json(value) {
        Some(ContainerValue::Single(attrs)) => vec![NormalizedRecord::new(key.to_string(), attrs)],
        Some(ContainerValue::Many(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item.as_object() {
                Some(attrs) => Some(NormalizedRecord::new(format!("{key}{i}"), attrs)),
                None => {
                    debug!("seo"; "skipping `{key}[{i}]`: expected an object, got {}", json_type(item));
                    None
                }
            })
            .collect(),
        None => {
            debug!("seo"; "skipping `{key}`: expected an object or array, got {}", json_type(value));
            Vec::new()
        }
    }
}
