use std::time::Duration;

use reqwest::Client;

use grantdb_boundary::{GrantList, GrantsAdded, Health, NewGrant, SearchRequest, SearchResult, TagList};

use crate::{into_json, util::join_url, Result};

/// Public grant catalog API
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
    client: Client,
}

impl PublicApi {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self::with_client(url, Client::new())
    }

    /// Create a client that aborts requests after `timeout`.
    pub fn with_timeout(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(url, client))
    }

    #[must_use]
    pub const fn with_client(url: String, client: Client) -> Self {
        Self { url, client }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn endpoint(&self, path: &str) -> String {
        join_url(&self.url, path)
    }

    pub async fn grants(&self) -> Result<GrantList> {
        let url = self.endpoint("grants");
        let response = self.client.get(&url).send().await?;
        into_json(response).await
    }

    pub async fn tags(&self) -> Result<TagList> {
        let url = self.endpoint("tags");
        let response = self.client.get(&url).send().await?;
        into_json(response).await
    }

    pub async fn add_grants(&self, grants: &[NewGrant]) -> Result<GrantsAdded> {
        let url = self.endpoint("grants");
        let response = self.client.post(&url).json(grants).send().await?;
        into_json(response).await
    }

    pub async fn search_grants(&self, tags: &[String]) -> Result<SearchResult> {
        let url = self.endpoint("grants/search");
        let request = SearchRequest {
            tags: tags.to_vec(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        into_json(response).await
    }

    pub async fn health(&self) -> Result<Health> {
        let url = self.endpoint("health");
        let response = self.client.get(&url).send().await?;
        into_json(response).await
    }
}
