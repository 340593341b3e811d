//! The four résumé sections and everything derived from their identifier.

use crate::error::ArcadeError;
use std::{fmt, str::FromStr};

/// One navigable region of the résumé.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Skills,
    Experience,
    Contact,
}

impl Section {
    /// All sections, in tab order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    /// The lowercase identifier used in markup and in requests.
    pub const fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Element id of the tab that selects this section.
    pub fn tab_id(self) -> String {
        format!("{}-tab", self.id())
    }

    /// Element id of the panel that displays this section.
    pub fn panel_id(self) -> String {
        format!("{}-content", self.id())
    }

    /// Controller button bound to this section.
    pub const fn button(self) -> char {
        match self {
            Section::About => 'A',
            Section::Skills => 'X',
            Section::Experience => 'Y',
            Section::Contact => 'B',
        }
    }

    /// Inverse of [`Section::button`], ignoring case.
    pub fn from_button(button: char) -> Option<Self> {
        let button = button.to_ascii_uppercase();
        Self::ALL.into_iter().find(|s| s.button() == button)
    }

    /// Theme colour name, used to build `arcade-*` CSS classes.
    pub const fn accent(self) -> &'static str {
        match self {
            Section::About => "purple",
            Section::Skills => "pink",
            Section::Experience => "cyan",
            Section::Contact => "orange",
        }
    }

    const fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Skills => 1,
            Section::Experience => 2,
            Section::Contact => 3,
        }
    }

    /// The section to the right, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The section to the left, wrapping from the first to the last.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Section {
    type Err = ArcadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ArcadeError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
