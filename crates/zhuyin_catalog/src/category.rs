//! Vocabulary categories.

use std::fmt;

/// The closed set of categories a vocabulary item can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum Category {
    /// Animals.
    Animal,
    /// Food and drink.
    Food,
    /// Everyday objects.
    Daily,
    /// Family members.
    Family,
    /// Nature and weather.
    Nature,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Self::Animal,
        Self::Food,
        Self::Daily,
        Self::Family,
        Self::Nature,
    ];

    /// Returns the lowercase tag for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Animal => "animal",
            Self::Food => "food",
            Self::Daily => "daily",
            Self::Family => "family",
            Self::Nature => "nature",
        }
    }

    /// Looks up a category by its tag. Matching is case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
