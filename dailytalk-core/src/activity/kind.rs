//! Activity kind classification

use serde::{Deserialize, Serialize};

/// The closed set of activity kinds the provider can deploy
///
/// Parsing is tolerant: unrecognized or empty input falls back to
/// [`ActivityKind::Dialog`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Guided dialog walkthrough
    #[default]
    Dialog,
    /// Multiple-choice quiz
    Quiz,
    /// Decision-based scenario
    Scenario,
}

impl ActivityKind {
    /// Parse a kind string, trimming whitespace and ignoring case
    ///
    /// Empty or unrecognized values normalize to `Dialog`; this is a
    /// deliberate fallback policy, not an error path.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "quiz" => Self::Quiz,
            "scenario" => Self::Scenario,
            _ => Self::Dialog,
        }
    }

    /// The URL path segment for this kind, as used in launch URLs
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::Quiz => "quiz",
            Self::Scenario => "scenario",
        }
    }

    /// All kinds, in a stable order
    pub fn all() -> [Self; 3] {
        [Self::Dialog, Self::Quiz, Self::Scenario]
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}
