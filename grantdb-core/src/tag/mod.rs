use itertools::Itertools;

pub mod frequency;

/// The universe of tags the tagging service can assign.
///
/// Loaded independently from the grants and only
/// changed by an explicit refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCatalog {
    tags: Vec<String>,
}

/// The first tags of a catalog and how many are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub remaining_count: usize,
}

impl TagCatalog {
    /// Empty and duplicate tags are dropped, the order is kept.
    pub fn new<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tags = tags
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.trim().is_empty())
            .unique()
            .collect();
        Self { tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn preview(&self, limit: usize) -> TagPreview<'_> {
        let shown = &self.tags[..limit.min(self.tags.len())];
        TagPreview {
            shown,
            remaining_count: self.tags.len() - shown.len(),
        }
    }

    pub fn replace(&mut self, other: TagCatalog) {
        *self = other;
    }
}
