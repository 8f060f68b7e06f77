//! Section identifiers and their declared order.

use core::fmt;

/// Identifier for one of the four fixed content sections.
///
/// The declared order of the variants is load-bearing: it is both the
/// render order of the navigation links and the priority order when the
/// scroll-spy resolves which section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// All sections in declared document order.
    pub const ALL: [Self; 4] = [Self::About, Self::Projects, Self::Skills, Self::Contact];

    /// The DOM id of the section element.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// The nav-link label: the section id with its first character upper-cased.
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
