#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # grantdb-entities
//!
//! Reusable, agnostic domain entities for the grant catalog.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod filter;
pub mod grant;
pub mod id;
pub mod tag;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
