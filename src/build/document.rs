use serde::{Deserialize, Serialize};

/// One content document as the content layer hands it over: a blog post,
/// a case study, or any other page kind.
///
/// Only `kind` and `slug` are required to parse. A missing title is not a
/// parse error; the index builder decides what to do with it.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(alias = "type")]
    pub kind: String,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "excerpt", alias = "summary")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Explicit URL; computed from `kind` and `slug` when absent.
    #[serde(default)]
    pub url: Option<String>,
}

impl ContentItem {
    /// Stable record id: `"{kind}:{slug}"`.
    pub fn computed_id(&self) -> String {
        format!("{}:{}", self.kind, self.slug)
    }

    /// The page URL: explicit if given, else derived from the kind.
    pub fn computed_url(&self) -> String {
        if let Some(url) = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            return url.to_string();
        }
        match self.kind.as_str() {
            "post" | "blog" => format!("/blog/{}", self.slug),
            "work" | "works" => format!("/works/{}", self.slug),
            other => format!("/{}/{}", other, self.slug),
        }
    }
}
