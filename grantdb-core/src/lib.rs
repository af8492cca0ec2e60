//! # grantdb-core
//!
//! Client side reconciliation of the grant catalog.
//!
//! The [`catalog::CatalogStore`] holds the grants of the current session,
//! the [`view`] module derives everything that is shown from it.
//! All remote access goes through [`gateways::GrantGateway`].

pub mod catalog;
pub mod gateways;
pub mod tag;
pub mod text;
pub mod usecases;
pub mod util;
pub mod view;

pub mod entities {
    pub use grantdb_entities::{filter::*, grant::*, id::*, tag::*};
}
