//! Serialized document store types.
//!
//! Every field defaults when absent so that partially formed entries load as
//! empty content instead of failing the whole store. Values of the wrong type
//! degrade too: flags read any JSON value as truthy or not, malformed
//! elements become [`ParagraphElement::Unknown`], and other malformed list
//! items and map entries are dropped with a warning.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::store::StoreError;

/// Raw document store as produced by the CCC data generator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStore {
    /// Table of contents tree. Depth-first pre-order is the reading order.
    #[serde(deserialize_with = "skip_invalid_items")]
    pub toc_link_tree: Vec<TocLinkNode>,
    /// Table of contents entries keyed by `tocId`.
    #[serde(deserialize_with = "skip_invalid_entries")]
    pub toc_nodes: BTreeMap<String, TocNode>,
    /// Page content keyed by `tocId`.
    #[serde(deserialize_with = "skip_invalid_entries")]
    pub page_nodes: BTreeMap<String, PageNode>,
}

impl RawStore {
    /// Parse a store from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a store from JSON bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, StoreError> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Read and parse a store file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&bytes)
    }
}

/// Node of the table of contents tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocLinkNode {
    pub id: String,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "skip_invalid_items"
    )]
    pub children: Vec<TocLinkNode>,
}

/// Table of contents entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocNode {
    pub id: String,
    /// Display title.
    pub text: String,
    /// Short link, possibly decorated (e.g. `__P1.HTM`).
    pub link: String,
}

/// A page of the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageNode {
    pub id: String,
    /// Paragraphs in reading order.
    #[serde(deserialize_with = "skip_invalid_items")]
    pub paragraphs: Vec<Paragraph>,
    /// Footnotes keyed by footnote id. Key order carries no meaning.
    #[serde(deserialize_with = "skip_invalid_entries")]
    pub footnotes: BTreeMap<String, Footnote>,
}

/// A paragraph: display attributes plus inline elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    #[serde(deserialize_with = "or_default")]
    pub attrs: ParagraphAttrs,
    #[serde(deserialize_with = "lenient_elements")]
    pub elements: Vec<ParagraphElement>,
}

/// Presentational paragraph flags. Flags are additive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphAttrs {
    #[serde(deserialize_with = "truthy")]
    pub indent: bool,
}

/// Inline element of a paragraph, discriminated by its `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ParagraphElement {
    /// Line break.
    Spacer,
    /// Footnote reference number.
    Ref {
        #[serde(default)]
        number: u32,
    },
    /// Link to another location, rendered as a styled glyph.
    RefAnchor {
        #[serde(default)]
        link: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attrs: Option<TextAttrs>,
    },
    /// Plain paragraph reference number.
    RefCcc {
        #[serde(default)]
        ref_number: u32,
    },
    /// Literal text.
    Text {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attrs: Option<TextAttrs>,
    },
    /// Any element type this version does not know about.
    #[serde(other)]
    Unknown,
}

/// Text styling flags shared by text-bearing elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAttrs {
    #[serde(rename = "b", deserialize_with = "truthy")]
    pub bold: bool,
    #[serde(rename = "i", deserialize_with = "truthy")]
    pub italic: bool,
}

/// Footnote of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footnote {
    /// Display ordinal.
    pub number: u32,
    #[serde(deserialize_with = "skip_invalid_items")]
    pub refs: Vec<FootnoteRef>,
}

/// Single reference inside a footnote.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootnoteRef {
    pub text: String,
}

/// Deserialize elements one by one, turning any element that fails to parse
/// into [`ParagraphElement::Unknown`]. A non-array value yields no elements.
fn lenient_elements<'de, D>(deserializer: D) -> Result<Vec<ParagraphElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(values) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or(ParagraphElement::Unknown))
        .collect())
}

/// Deserialize a list, dropping items that fail to parse.
fn skip_invalid_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(values) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(values
        .into_iter()
        .filter_map(|value| {
            serde_json::from_value(value)
                .inspect_err(|err| tracing::warn!(error = %err, "Skipping malformed store item"))
                .ok()
        })
        .collect())
}

/// Deserialize a map, dropping entries whose value fails to parse.
fn skip_invalid_entries<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(parsed) => Some((key, parsed)),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Skipping malformed store entry");
                None
            }
        })
        .collect())
}

/// Deserialize a value, falling back to the default when it does not fit.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Read any JSON value as a flag: `null`, `false`, `0` and `""` are unset.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
