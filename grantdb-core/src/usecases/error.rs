use crate::{gateways, util::validate::MalformedInput};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error loading {what}: {source}")]
    Load {
        what: &'static str,
        source: gateways::Error,
    },
    #[error("Search error: {0}")]
    Search(#[source] gateways::Error),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),
    #[error("Failed to add grants: {0}")]
    Rejected(#[source] gateways::Error),
}

impl From<MalformedInput> for Error {
    fn from(err: MalformedInput) -> Self {
        Self::Submission(err.into())
    }
}

impl Error {
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Submission(SubmissionError::MalformedInput(_)))
    }
}
