use itertools::Itertools;

use crate::id::GrantId;

/// A grant record as known to the catalog.
///
/// The tags are assigned by the external tagging service
/// and are never modified on the client side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    /// Absent until the record has been stored.
    pub id: Option<GrantId>,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub website_urls: Option<Vec<String>>,
    pub document_urls: Option<Vec<String>>,
}

impl Grant {
    /// The tags of this grant without duplicates, in order of first occurrence.
    pub fn distinct_tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str).unique()
    }

    /// Number of tag entries as delivered, duplicates included.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// `true` if at least one of the given tags is assigned to this grant.
    pub fn has_any_tag<'a>(&self, tags: impl IntoIterator<Item = &'a str>) -> bool {
        tags.into_iter().any(|t| self.has_tag(t))
    }
}

/// A grant that is about to be submitted for tagging and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGrant {
    pub name: String,
    pub description: String,
    pub website_urls: Option<Vec<String>>,
    pub document_urls: Option<Vec<String>>,
}

impl NewGrant {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            website_urls: None,
            document_urls: None,
        }
    }
}
