use serde::Deserialize;
use std::collections::HashMap;

use super::{ContentError, ContentItem};

/// `manifest.json` at the root of a content directory.
#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    /// Document files, relative to the content directory, in source order.
    pub documents: Vec<String>,
    /// Which documents go into the index. Defaults to all of them.
    #[serde(default)]
    pub include: Option<IncludeFilterValue>,
}

impl InputManifest {
    /// The normalized include filter.
    pub fn filter(&self) -> Result<IncludeFilter, ContentError> {
        self.include
            .clone()
            .map_or(Ok(IncludeFilter::All), IncludeFilter::try_from)
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum IncludeFilterValue {
    /// Match all documents (represented as "*")
    All(String),
    /// Match documents by field=value criteria
    Filter(HashMap<String, String>),
}

/// Normalized include filter for matching
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncludeFilter {
    All,
    Filter(HashMap<String, String>),
}

impl TryFrom<IncludeFilterValue> for IncludeFilter {
    type Error = ContentError;

    /// Only `"*"` is accepted as a string; anything else is most likely a
    /// mistyped filter object.
    fn try_from(val: IncludeFilterValue) -> Result<Self, Self::Error> {
        match val {
            IncludeFilterValue::All(s) if s == "*" => Ok(IncludeFilter::All),
            IncludeFilterValue::All(s) => Err(ContentError::InvalidInclude(s)),
            IncludeFilterValue::Filter(f) => Ok(IncludeFilter::Filter(f)),
        }
    }
}

impl IncludeFilter {
    /// Check if a content item matches this filter
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            IncludeFilter::All => true,
            IncludeFilter::Filter(filters) => filters.iter().all(|(key, value)| match key.as_str() {
                "kind" | "type" => &item.kind == value,
                // Compared the way the index stores tags
                "tag" => item
                    .tags
                    .iter()
                    .flatten()
                    .any(|t| t.trim() == value.trim()),
                _ => {
                    tracing::warn!(key = %key, "unknown include filter key");
                    true
                }
            }),
        }
    }
}
