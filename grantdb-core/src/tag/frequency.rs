use std::collections::HashMap;

use super::TagCatalog;
use crate::entities::*;

/// Number of distinct grants per tag.
pub type TagFrequencies<'a> = HashMap<&'a str, TagCount>;

/// Count every tag once per grant.
pub fn tag_frequencies<'a>(grants: impl IntoIterator<Item = &'a Grant>) -> TagFrequencies<'a> {
    grants
        .into_iter()
        .flat_map(Grant::distinct_tags)
        .fold(HashMap::new(), |mut acc, tag| {
            *acc.entry(tag).or_default() += 1;
            acc
        })
}

/// The used tags of the catalog, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedTags {
    /// At most the requested number of tags.
    pub shown: Vec<TagFrequency>,
    /// Number of used tags that did not fit into `shown`.
    pub remaining_count: usize,
}

impl RankedTags {
    /// Total number of used catalog tags.
    pub fn total_count(&self) -> usize {
        self.shown.len() + self.remaining_count
    }
}

/// Rank the catalog tags that are in use.
///
/// Tags with the same frequency keep their catalog order.
pub fn rank_tags(catalog: &TagCatalog, frequencies: &TagFrequencies, limit: usize) -> RankedTags {
    let mut ranked: Vec<_> = catalog
        .tags()
        .iter()
        .filter_map(|tag| {
            frequencies
                .get(tag.as_str())
                .copied()
                .filter(|count| *count > 0)
                .map(|count| TagFrequency(tag.clone(), count))
        })
        .collect();
    ranked.sort_by(|a, b| b.count().cmp(&a.count()));
    let remaining_count = ranked.len().saturating_sub(limit);
    ranked.truncate(limit);
    RankedTags {
        shown: ranked,
        remaining_count,
    }
}
