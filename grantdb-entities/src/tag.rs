pub type TagCount = u64;

/// A tag together with the number of distinct grants carrying it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TagFrequency(pub String, pub TagCount);

impl TagFrequency {
    pub fn tag(&self) -> &str {
        &self.0
    }

    pub const fn count(&self) -> TagCount {
        self.1
    }
}
