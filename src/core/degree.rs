use thiserror::Error;
use std::{fmt, str::FromStr};
use super::key::Mode;

/// Degree labels by semitone distance from the root.
pub const NUMERALS: [&str; 12] = [
    "I", "bI", "II", "bIII", "III", "IV",
    "bV", "V", "bVI", "VI", "bVII", "VII"];

#[derive(Error, Debug, PartialEq)]
pub enum DegreeParseError {
    #[error("Invalid degree `{0}`")]
    InvalidDegree(String),
}

/// A chord's position relative to a tonal center.
/// Upper-case labels are major chords, lower-case are minor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Degree {
    pub index: usize,
    pub mode: Mode,
}

impl Degree {
    pub fn new(index: usize, mode: Mode) -> Degree {
        Degree {
            index: index % 12,
            mode,
        }
    }

    /// All 24 labels, major before minor at each position.
    pub fn all() -> impl Iterator<Item = Degree> {
        (0..12).flat_map(|index| {
            [Mode::Major, Mode::Minor].into_iter()
                .map(move |mode| Degree { index, mode })
        })
    }

    /// Whether two degrees match, optionally ignoring
    /// chord quality (i.e. the third).
    pub fn matches(&self, other: &Degree, thirds: bool) -> bool {
        self.index == other.index && (!thirds || self.mode == other.mode)
    }
}

impl FromStr for Degree {
    type Err = DegreeParseError;

    /// Parses a degree label, e.g. "IV", "bVII", "vi".
    /// Mixed case is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(index) = NUMERALS.iter().position(|&n| n == s) {
            return Ok(Degree { index, mode: Mode::Major });
        }
        NUMERALS.iter()
            .position(|&n| n.to_lowercase() == s)
            .map(|index| Degree { index, mode: Mode::Minor })
            .ok_or_else(|| DegreeParseError::InvalidDegree(s.to_string()))
    }
}

impl TryFrom<&str> for Degree {
    type Error = DegreeParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = NUMERALS[self.index];
        match self.mode {
            Mode::Major => write!(f, "{}", numeral),
            Mode::Minor => write!(f, "{}", numeral.to_lowercase()),
        }
    }
}
