//! Knowledge document model

use serde::{Serialize, Serializer, ser::Error as _};
use serde_json::Value;
use serde_json::value::RawValue;

use super::display::format_display_name;

/// One indexed knowledge item.
///
/// The identifier, name and type are derived from where the document was
/// found; `content` is the parsed JSON payload, kept opaque apart from the
/// few fields read through [`ContentView`]. Serializing emits the source text
/// of the payload as `content`, so key order and formatting survive.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KnowledgeDocument {
    /// Semantic identifier, `{type}/{name}`
    pub id: String,

    /// Kebab-case name taken from the source filename
    pub name: String,

    /// Document type taken from the source directory
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Structured payload as stored in the source
    #[serde(skip)]
    pub content: Value,

    /// Source text of the payload, used for substring fallback matching
    #[serde(rename = "content", serialize_with = "serialize_raw_json")]
    raw: String,

    /// Recognized content fields, extracted once at construction
    #[serde(skip)]
    view: ContentView,
}

impl KnowledgeDocument {
    /// Create a document from an already parsed payload.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        doc_type: impl Into<String>,
        content: Value,
    ) -> Self {
        let raw = content.to_string();
        Self::with_raw(id.into(), name.into(), doc_type.into(), content, raw)
    }

    /// Parse a document payload from its source bytes.
    pub fn from_slice(
        id: impl Into<String>,
        name: impl Into<String>,
        doc_type: impl Into<String>,
        bytes: &[u8],
    ) -> Result<Self, serde_json::Error> {
        let content: Value = serde_json::from_slice(bytes)?;
        // from_slice only accepts valid UTF-8, so the lossy path never substitutes
        let raw = String::from_utf8_lossy(bytes).into_owned();
        Ok(Self::with_raw(
            id.into(),
            name.into(),
            doc_type.into(),
            content,
            raw,
        ))
    }

    fn with_raw(id: String, name: String, doc_type: String, content: Value, raw: String) -> Self {
        let view = ContentView::from_value(&content);
        Self {
            id,
            name,
            doc_type,
            content,
            raw,
            view,
        }
    }

    /// Serialized payload exactly as it was read.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Typed view of the recognized content fields.
    pub fn view(&self) -> &ContentView {
        &self.view
    }

    /// Human readable title, e.g. `Laravel Jetstream`.
    pub fn display_name(&self) -> String {
        format_display_name(&self.name)
    }

    /// The payload exactly as read, for re-emitting without reordering keys.
    pub fn raw_content(&self) -> Result<Box<RawValue>, serde_json::Error> {
        RawValue::from_string(self.raw.clone())
    }
}

fn serialize_raw_json<S: Serializer>(raw: &str, serializer: S) -> Result<S::Ok, S::Error> {
    RawValue::from_string(raw.to_owned())
        .map_err(S::Error::custom)?
        .serialize(serializer)
}

/// Tolerant typed view over a document's content.
///
/// Absent or mistyped fields are left empty instead of failing, and content
/// that is not a JSON object yields the empty view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentView {
    pub description: Option<String>,
    pub framework: Option<String>,
    pub language: Option<String>,
    /// The nested `type` field of the payload
    pub content_type: Option<String>,
    pub tags: Vec<String>,
}

impl ContentView {
    /// Extract the recognized fields from a JSON payload.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);

        let tags = object
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            description: text("description"),
            framework: text("framework"),
            language: text("language"),
            content_type: text("type"),
            tags,
        }
    }
}
