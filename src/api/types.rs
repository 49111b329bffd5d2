use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Author profile embedded in an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub following: bool,
}

/// A single article as returned by `GET /articles`.
///
/// `slug` is the identity key: previews are keyed by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub favorites_count: u64,
    #[serde(default)]
    pub author: Profile,
}

impl Article {
    /// Calendar date portion of `createdAt` (e.g. "2024-03-01").
    pub fn created_date(&self) -> &str {
        self.created_at
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.created_at)
    }
}

/// Payload of `GET /articles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub articles_count: usize,
}

/// Error body returned by the API on validation and auth failures:
/// `{"errors": {"body": ["can't be empty"]}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}
