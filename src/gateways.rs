use async_trait::async_trait;

use grantdb_boundary as json;
use grantdb_core::{
    entities::*,
    gateways::{Error, GrantGateway, Result},
};
use grantdb_frontend_api::{self as api, PublicApi};

/// [`GrantGateway`] backed by the HTTP API.
pub struct HttpGateway {
    api: PublicApi,
}

impl HttpGateway {
    pub const fn new(api: PublicApi) -> Self {
        Self { api }
    }
}

fn from_api_error(err: api::Error) -> Error {
    match err {
        api::Error::Fetch(msg) => Error::Transport(msg),
        api::Error::Api(json::Error { error, .. }) => {
            Error::Unsuccessful(Some(error).filter(|e| !e.trim().is_empty()))
        }
    }
}

fn ensure_success(success: bool, error: Option<String>) -> Result<()> {
    if success {
        Ok(())
    } else {
        Err(Error::Unsuccessful(error))
    }
}

fn into_grants(grants: Vec<json::Grant>) -> Vec<Grant> {
    grants.into_iter().map(Grant::from).collect()
}

#[async_trait(?Send)]
impl GrantGateway for HttpGateway {
    async fn all_grants(&self) -> Result<Vec<Grant>> {
        let json::GrantList {
            success,
            grants,
            count,
            error,
        } = self.api.grants().await.map_err(from_api_error)?;
        ensure_success(success, error)?;
        if let Some(count) = count.filter(|c| *c != grants.len()) {
            log::debug!("Reported count {count} differs from {} received grants", grants.len());
        }
        Ok(into_grants(grants))
    }

    async fn available_tags(&self) -> Result<Vec<String>> {
        let json::TagList {
            success,
            tags,
            count,
            error,
        } = self.api.tags().await.map_err(from_api_error)?;
        ensure_success(success, error)?;
        if let Some(count) = count.filter(|c| *c != tags.len()) {
            log::debug!("Reported count {count} differs from {} received tags", tags.len());
        }
        Ok(tags)
    }

    async fn add_grants(&self, grants: Vec<NewGrant>) -> Result<Vec<Grant>> {
        let grants: Vec<json::NewGrant> = grants.into_iter().map(Into::into).collect();
        let json::GrantsAdded {
            success,
            grants_added,
            message,
            total_grants,
            error,
        } = self.api.add_grants(&grants).await.map_err(from_api_error)?;
        ensure_success(success, error)?;
        if let Some(msg) = message {
            log::debug!("{msg}");
        }
        if let Some(total) = total_grants {
            log::debug!("The catalog now contains {total} grants");
        }
        Ok(into_grants(grants_added))
    }

    async fn search_grants_by_tags(&self, tags: &[String]) -> Result<Vec<Grant>> {
        let json::SearchResult {
            success,
            grants,
            count: _,
            search_tags,
            error,
        } = self.api.search_grants(tags).await.map_err(from_api_error)?;
        ensure_success(success, error)?;
        if let Some(search_tags) = search_tags.filter(|t| t.as_slice() != tags) {
            log::debug!("Search was performed with tags {search_tags:?}");
        }
        Ok(into_grants(grants))
    }
}
