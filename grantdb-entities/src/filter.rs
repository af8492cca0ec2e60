use strum::{Display, EnumString};

/// Ordering of the visible grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SortKey {
    /// Alphabetically by name.
    #[default]
    Name,
    /// Most tagged grants first.
    #[strum(to_string = "tag-count", serialize = "tags")]
    TagCount,
}

/// The user controlled filter inputs of the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected tags in toggle order, without duplicates.
    pub selected_tags: Vec<String>,
    pub search_term: String,
    pub sort_key: SortKey,
}

impl FilterState {
    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// Select or deselect a tag.
    ///
    /// Returns `true` if the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
            false
        } else {
            self.selected_tags.push(tag.to_owned());
            true
        }
    }

    /// The search term without surrounding whitespace, `None` if nothing is left.
    pub fn trimmed_search_term(&self) -> Option<&str> {
        let term = self.search_term.trim();
        (!term.is_empty()).then_some(term)
    }

    pub fn has_filters(&self) -> bool {
        !self.selected_tags.is_empty() || self.trimmed_search_term().is_some()
    }

    /// Reset tag selection and search term. The sort order is kept.
    pub fn clear(&mut self) {
        self.selected_tags.clear();
        self.search_term.clear();
    }
}
