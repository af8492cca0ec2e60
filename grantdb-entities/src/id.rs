use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier assigned by the external store when a grant is created.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GrantId(u64);

impl GrantId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for GrantId {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<GrantId> for u64 {
    fn from(from: GrantId) -> Self {
        from.0
    }
}

impl FromStr for GrantId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for GrantId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
