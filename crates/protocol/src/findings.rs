use crate::guideline::GuidelineCode;
use serde::{Deserialize, Serialize};

/// Direction of a formal finding: for or against the individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingDirection {
    For,
    Against,
}

impl FindingDirection {
    /// Parse the FOR/AGAINST token of a findings line, any casing.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "FOR" => Some(Self::For),
            "AGAINST" => Some(Self::Against),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::For => "FOR",
            Self::Against => "AGAINST",
        }
    }
}

/// One subparagraph line of a formal findings entry.
///
/// `paragraph_ref` is normalized: letter-only references get the enclosing
/// paragraph number prefixed (e.g. "a" under Paragraph 1 becomes "1.a"), and
/// ranges are kept literal ("1.a-1.b"). Entries are deduplicated by
/// (paragraph_ref, finding).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubparagraphFinding {
    pub paragraph_ref: String,
    pub finding: FindingDirection,
}

/// Formal finding for a single adjudicated guideline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalFinding {
    pub code: GuidelineCode,
    pub guideline_name: String,
    pub overall: FindingDirection,
    pub subparagraphs: Vec<SubparagraphFinding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_token_parsing() {
        assert_eq!(
            FindingDirection::from_token("Against"),
            Some(FindingDirection::Against)
        );
        assert_eq!(FindingDirection::from_token(" FOR "), Some(FindingDirection::For));
        assert_eq!(FindingDirection::from_token("withdrawn"), None);
    }
}
