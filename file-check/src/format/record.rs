//! Structured-record (JSON) checker.
//!
//! The document is decoded into a `Node` tree and searched once per expected
//! value. Only scalar content is searched: mapping keys never match.

use serde_json::Value;

/// A decoded structured-record document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf rendered as text. Strings are kept verbatim, numbers and
    /// booleans use their JSON spelling and `null` is the empty string.
    Scalar(String),
    Sequence(Vec<Node>),
    Mapping(Vec<(String, Node)>),
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(String::new()),
            Value::Bool(b) => Self::Scalar(b.to_string()),
            Value::Number(n) => Self::Scalar(n.to_string()),
            Value::String(s) => Self::Scalar(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, val)| (key, Self::from(val)))
                    .collect(),
            ),
        }
    }
}

impl Node {
    /// Whether `needle` is a substring of any scalar at any depth.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Scalar(text) => text.contains(needle),
            Self::Sequence(items) => items.iter().any(|item| item.contains(needle)),
            Self::Mapping(entries) => entries.iter().any(|(_, val)| val.contains(needle)),
        }
    }
}

/// Decode raw file content as a JSON document.
///
/// # Errors
///
/// Returns the `serde_json` error if the content is not valid UTF-8 JSON.
pub fn decode_record(content: &[u8]) -> Result<Node, serde_json::Error> {
    let value: Value = serde_json::from_slice(content)?;
    Ok(Node::from(value))
}

/// Count how many of `values` occur somewhere in `document`.
#[must_use]
pub fn check_record(values: &[String], document: &Node) -> usize {
    values
        .iter()
        .filter(|value| document.contains(value.as_str()))
        .count()
}
