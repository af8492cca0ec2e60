use crate::entities::*;

/// Where the current content of the catalog came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Origin {
    #[default]
    Empty,
    Listing,
    TagSearch(Vec<String>),
}

/// The in-memory collection of grants of the current session.
///
/// The store is only ever written with successful results.
/// A failed request never reaches it and the last good
/// state stays untouched.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    grants: Vec<Grant>,
    origin: Origin,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Replace everything with the canonical listing.
    pub fn replace_all(&mut self, grants: Vec<Grant>) {
        self.grants = grants;
        self.origin = Origin::Listing;
    }

    /// Replace everything with the result of a tag search.
    pub fn apply_search_results(&mut self, tags: &[String], grants: Vec<Grant>) {
        self.grants = grants;
        self.origin = Origin::TagSearch(tags.to_vec());
    }

    /// Append newly created grants.
    ///
    /// Nothing is merged: a grant equal to an existing one is kept twice.
    pub fn append_grants(&mut self, grants: Vec<Grant>) -> &[Grant] {
        let start = self.grants.len();
        self.grants.extend(grants);
        &self.grants[start..]
    }

    pub fn clear(&mut self) {
        self.grants.clear();
        self.origin = Origin::Empty;
    }
}
