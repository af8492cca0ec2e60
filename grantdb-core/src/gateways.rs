use async_trait::async_trait;
use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Transport(String),
    #[error("{}", .0.as_deref().unwrap_or("The request was not successful"))]
    Unsuccessful(Option<String>),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The remote grant service.
///
/// Storage and the automatic tagging of new grants happen
/// behind this trait. All returned grants are already tagged.
#[async_trait(?Send)]
pub trait GrantGateway {
    /// The canonical list of all stored grants.
    async fn all_grants(&self) -> Result<Vec<Grant>>;

    /// The universe of tags that can be assigned.
    async fn available_tags(&self) -> Result<Vec<String>>;

    /// Submit new grants for tagging and storage.
    /// Returns the grants as they have been stored.
    async fn add_grants(&self, grants: Vec<NewGrant>) -> Result<Vec<Grant>>;

    /// All grants carrying at least one of the given tags.
    async fn search_grants_by_tags(&self, tags: &[String]) -> Result<Vec<Grant>>;
}
