use std::borrow::Borrow;

use crate::{entities::*, text::cmp_ignore_case};

pub trait SortGrants {
    /// Stable sort: grants that compare equal keep their relative order.
    fn sort_grants_by(&mut self, key: SortKey);
}

impl<T> SortGrants for [T]
where
    T: Borrow<Grant>,
{
    fn sort_grants_by(&mut self, key: SortKey) {
        match key {
            SortKey::Name => {
                self.sort_by(|a, b| cmp_ignore_case(&a.borrow().name, &b.borrow().name));
            }
            SortKey::TagCount => {
                self.sort_by(|a, b| b.borrow().tag_count().cmp(&a.borrow().tag_count()));
            }
        }
    }
}
