use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Grant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id                : Option<u64>,
    #[serde(default)]
    pub grant_name        : String,
    #[serde(default)]
    pub grant_description : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags              : Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_urls      : Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_urls     : Option<Vec<String>>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewGrant {
    pub grant_name        : String,
    pub grant_description : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_urls      : Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_urls     : Option<Vec<String>>,
}

/// Response of `GET /grants`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct GrantList {
    pub success: bool,
    #[serde(default)]
    pub grants: Vec<Grant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `GET /tags`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct TagList {
    pub success: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `POST /grants`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct GrantsAdded {
    pub success: bool,
    #[serde(default)]
    pub grants_added: Vec<Grant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_grants: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body of `POST /grants/search`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchRequest {
    pub tags: Vec<String>,
}

/// Response of `POST /grants/search`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct SearchResult {
    pub success: bool,
    #[serde(default)]
    pub grants: Vec<Grant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `GET /health`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Health {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Body of an unsuccessful response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, thiserror::Error),
    error("{error}")
)]
pub struct Error {
    #[serde(default)]
    pub success: bool,
    pub error: String,
}
