use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the 13 fixed adjudicative guideline categories (SEAD-4, A through M).
///
/// The set is closed: it is never extended at runtime, and every analysis
/// produces exactly one assessment per code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GuidelineCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a guideline code (expected a single letter A-M): {0:?}")]
pub struct ParseGuidelineError(pub String);

impl GuidelineCode {
    /// All codes in their fixed A-M order.
    pub const ALL: [Self; 13] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
    ];

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::I => 'I',
            Self::J => 'J',
            Self::K => 'K',
            Self::L => 'L',
            Self::M => 'M',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'H' => Some(Self::H),
            'I' => Some(Self::I),
            'J' => Some(Self::J),
            'K' => Some(Self::K),
            'L' => Some(Self::L),
            'M' => Some(Self::M),
            _ => None,
        }
    }
}

impl std::fmt::Display for GuidelineCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for GuidelineCode {
    type Err = ParseGuidelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| ParseGuidelineError(s.to_string())),
            _ => Err(ParseGuidelineError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_codes_are_ordered_and_distinct() {
        assert_eq!(GuidelineCode::ALL.len(), 13);
        for pair in GuidelineCode::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn parse_round_trip() {
        for code in GuidelineCode::ALL {
            let parsed: GuidelineCode = code.to_string().parse().unwrap();
            assert_eq!(parsed, code);
        }
        assert!("N".parse::<GuidelineCode>().is_err());
        assert!("AB".parse::<GuidelineCode>().is_err());
        assert_eq!("f".parse::<GuidelineCode>().unwrap(), GuidelineCode::F);
    }
}
