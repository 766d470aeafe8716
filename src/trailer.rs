use std::fmt;

use crate::domain::Person;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailerKind {
    #[default]
    ReviewedBy,
    AckedBy,
}

impl TrailerKind {
    pub const fn key(self) -> &'static str {
        match self {
            Self::ReviewedBy => "Reviewed-by",
            Self::AckedBy => "Acked-by",
        }
    }
}

impl fmt::Display for TrailerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A commit-message trailer line, `Kind: Name <email>`.
#[derive(Debug, Clone)]
pub struct Trailer<'a> {
    pub kind: TrailerKind,
    pub person: &'a Person,
}

impl fmt::Display for Trailer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.person)
    }
}
