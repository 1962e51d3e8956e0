use serde::{Deserialize, Serialize};

/// Normalized disposition of a decision document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Granted,
    Denied,
    Revoked,
    Remanded,
    Unknown,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "GRANTED",
            Self::Denied => "DENIED",
            Self::Revoked => "REVOKED",
            Self::Remanded => "REMANDED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Denial-leaning outcomes. REMANDED and UNKNOWN are neither.
    #[must_use]
    pub const fn is_adverse(self) -> bool {
        matches!(self, Self::Denied | Self::Revoked)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller hint for which classification path applies to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Hearing,
    Appeal,
    /// Detect from appeal markers in the document header.
    #[default]
    Auto,
}
