use crate::{entities::*, text::contains_ignore_case};

pub trait TaggedWithAny {
    /// `true` if at least one of the tags is assigned.
    /// An empty tag list matches nothing.
    fn tagged_with_any(&self, tags: &[String]) -> bool;
}

impl TaggedWithAny for Grant {
    fn tagged_with_any(&self, tags: &[String]) -> bool {
        self.has_any_tag(tags.iter().map(String::as_str))
    }
}

pub trait MatchesText {
    /// Case insensitive substring match.
    ///
    /// `lowercase_term` must already be lower-cased.
    fn matches_text(&self, lowercase_term: &str) -> bool;
}

impl MatchesText for Grant {
    fn matches_text(&self, lowercase_term: &str) -> bool {
        contains_ignore_case(&self.name, lowercase_term)
            || contains_ignore_case(&self.description, lowercase_term)
    }
}

/// Apply the tag and text filters of `filter`.
///
/// Tags are combined with OR. The sort key is ignored.
pub fn grants_by_filter<'a>(
    grants: impl IntoIterator<Item = &'a Grant>,
    filter: &FilterState,
) -> Vec<&'a Grant> {
    let lowercase_term = filter.trimmed_search_term().map(str::to_lowercase);
    grants
        .into_iter()
        .filter(|g| filter.selected_tags.is_empty() || g.tagged_with_any(&filter.selected_tags))
        .filter(|g| {
            lowercase_term
                .as_deref()
                .is_none_or(|term| g.matches_text(term))
        })
        .collect()
}
