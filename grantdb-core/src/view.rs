use crate::{
    entities::*,
    tag::{
        frequency::{rank_tags, tag_frequencies, RankedTags, TagFrequencies},
        TagCatalog,
    },
    util::{filter::grants_by_filter, sort::SortGrants},
};

pub const DEFAULT_MAX_RANKED_TAGS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Maximum number of ranked tags offered for filtering.
    pub max_ranked_tags: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            max_ranked_tags: DEFAULT_MAX_RANKED_TAGS,
        }
    }
}

/// Everything that is shown of the catalog.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    /// Filtered and sorted grants.
    pub visible: Vec<&'a Grant>,
    /// Computed over the whole catalog, independent of the filters.
    pub tag_frequencies: TagFrequencies<'a>,
    pub ranked_tags: RankedTags,
    /// Size of the unfiltered catalog.
    pub total_count: usize,
    pub selected_tag_count: usize,
}

impl CatalogView<'_> {
    pub fn frequency_of(&self, tag: &str) -> TagCount {
        self.tag_frequencies.get(tag).copied().unwrap_or_default()
    }
}

/// Derive the view of `grants` for the given filter state.
///
/// This is a pure function: the same inputs always result in the same view.
pub fn derive_view<'a>(
    grants: &'a [Grant],
    filter: &FilterState,
    tag_catalog: &TagCatalog,
    options: &ViewOptions,
) -> CatalogView<'a> {
    let tag_frequencies = tag_frequencies(grants);
    let ranked_tags = rank_tags(tag_catalog, &tag_frequencies, options.max_ranked_tags);
    let visible = visible_grants(grants, filter);
    CatalogView {
        visible,
        tag_frequencies,
        ranked_tags,
        total_count: grants.len(),
        selected_tag_count: filter.selected_tags.len(),
    }
}

/// The filtered and sorted subset of `grants`.
pub fn visible_grants<'a>(grants: &'a [Grant], filter: &FilterState) -> Vec<&'a Grant> {
    let mut visible = grants_by_filter(grants, filter);
    visible.sort_grants_by(filter.sort_key);
    visible
}
