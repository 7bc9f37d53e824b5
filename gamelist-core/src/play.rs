use serde::Serialize;

/// How well a title runs, from fully playable to not playable at all.
///
/// Variants are ordered by severity, so `max` picks the worse of two
/// levels. Driver attributes only ever move a record up this scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayLevel {
    #[default]
    Full,
    MinorIssues,
    MajorIssues,
    NotPlayable,
}

/// All play levels in ascending severity.
const ALL_LEVELS: &[PlayLevel] = &[
    PlayLevel::Full,
    PlayLevel::MinorIssues,
    PlayLevel::MajorIssues,
    PlayLevel::NotPlayable,
];

impl PlayLevel {
    /// Canonical name used for display, JSON and parsing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::MinorIssues => "minor-issues",
            Self::MajorIssues => "major-issues",
            Self::NotPlayable => "not-playable",
        }
    }

    /// Returns the worse of `self` and `proposed`.
    pub fn raise(self, proposed: PlayLevel) -> PlayLevel {
        self.max(proposed)
    }

    /// All levels, best first.
    pub fn all() -> &'static [PlayLevel] {
        ALL_LEVELS
    }
}

impl std::fmt::Display for PlayLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string cannot be parsed into a `PlayLevel`.
#[derive(Debug, Clone)]
pub struct PlayLevelParseError(pub String);

impl std::fmt::Display for PlayLevelParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown play level: '{}'", self.0)
    }
}

impl std::error::Error for PlayLevelParseError {}

impl std::str::FromStr for PlayLevel {
    type Err = PlayLevelParseError;

    /// Parse a play level from its canonical name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_LEVELS
            .iter()
            .copied()
            .find(|level| level.as_str() == lower)
            .ok_or_else(|| PlayLevelParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/play_tests.rs"]
mod tests;
