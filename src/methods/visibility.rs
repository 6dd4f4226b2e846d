use std::fmt;

use bitflags::bitflags;

/// Access level of a method entry. Checked at dispatch time against
/// the call context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_set(&self) -> VisibilitySet {
        match self {
            Self::Public => VisibilitySet::PUBLIC,
            Self::Protected => VisibilitySet::PROTECTED,
            Self::Private => VisibilitySet::PRIVATE,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        };
        write!(f, "{name}")
    }
}

bitflags! {
    /// Filter used when listing methods, e.g. all public and protected
    /// names of a class.
    #[derive(Default)]
    pub struct VisibilitySet: u8 {
        const PUBLIC    = 0b00000001;
        const PROTECTED = 0b00000010;
        const PRIVATE   = 0b00000100;
        const NON_PRIVATE = Self::PUBLIC.bits | Self::PROTECTED.bits;
        const ALL = Self::PUBLIC.bits | Self::PROTECTED.bits | Self::PRIVATE.bits;
    }
}

impl VisibilitySet {
    pub fn admits(&self, visibility: Visibility) -> bool {
        self.contains(visibility.as_set())
    }
}
