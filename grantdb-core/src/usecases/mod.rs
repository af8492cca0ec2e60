mod error;
mod load_grants;
mod load_tags;
mod reset_catalog;
mod search_grants;
mod submit_grants;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::{Error, SubmissionError},
    load_grants::*,
    load_tags::*,
    reset_catalog::*,
    search_grants::*,
    submit_grants::*,
};

mod prelude {
    pub use super::error::{Error, SubmissionError};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{catalog::CatalogStore, entities::*, gateways::GrantGateway};
}
