use thiserror::Error;
use std::{fmt, str::FromStr};
use super::degree::{Degree, DegreeParseError};

#[derive(Error, Debug, PartialEq)]
pub enum VocabularyParseError {
    #[error("Vocabulary has no degrees")]
    Empty,

    #[error("Couldn't parse vocabulary degree")]
    InvalidDegree(#[from] DegreeParseError),
}

/// A set of degrees to test tunes against,
/// written as space-separated labels, e.g. "I IV V vi".
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vocabulary {
    pub raw: String,
    pub degrees: Vec<Degree>,
}

impl Vocabulary {
    /// Whether the degree is in this vocabulary.
    /// With `thirds` off, major and minor chords
    /// on the same degree are treated as the same.
    pub fn contains(&self, degree: &Degree, thirds: bool) -> bool {
        self.degrees.iter().any(|d| d.matches(degree, thirds))
    }

    /// How many of the given degrees are in this vocabulary.
    pub fn count(&self, degrees: &[Degree], thirds: bool) -> usize {
        degrees.iter().filter(|d| self.contains(d, thirds)).count()
    }

    pub fn covers(&self, degrees: &[Degree], thirds: bool) -> bool {
        degrees.iter().all(|d| self.contains(d, thirds))
    }
}

impl FromStr for Vocabulary {
    type Err = VocabularyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = s.split_whitespace()
            .map(Degree::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if degrees.is_empty() {
            return Err(VocabularyParseError::Empty);
        }
        Ok(Vocabulary {
            raw: s.trim().to_string(),
            degrees,
        })
    }
}

impl TryFrom<&str> for Vocabulary {
    type Error = VocabularyParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn degrees(s: &str) -> Vec<Degree> {
        s.split_whitespace().map(|d| d.try_into().unwrap()).collect()
    }

    #[test]
    fn test_parse_vocabulary() {
        let vocab: Vocabulary = "  I IV   V vi ".try_into().unwrap();
        assert_eq!(vocab.raw, "I IV   V vi");
        assert_eq!(vocab.degrees, degrees("I IV V vi"));
    }

    #[test]
    fn test_parse_invalid_vocabulary() {
        let res: Result<Vocabulary, _> = "I IV Five".try_into();
        assert_eq!(res, Err(VocabularyParseError::InvalidDegree(
            DegreeParseError::InvalidDegree("Five".to_string()))));

        let res: Result<Vocabulary, _> = "   ".try_into();
        assert_eq!(res, Err(VocabularyParseError::Empty));
    }

    #[test]
    fn test_case_sensitive_membership() {
        let vocab: Vocabulary = "I IV V".try_into().unwrap();
        let vi: Degree = "vi".try_into().unwrap();
        let iv: Degree = "iv".try_into().unwrap();
        assert!(!vocab.contains(&vi, true));
        assert!(!vocab.contains(&iv, true));
        assert!(vocab.contains(&iv, false));
        assert!(!vocab.contains(&vi, false));
    }

    #[test]
    fn test_count_and_covers() {
        let vocab: Vocabulary = "I IV V".try_into().unwrap();
        let seq = degrees("I IV V vi");
        assert_eq!(vocab.count(&seq, true), 3);
        assert!(!vocab.covers(&seq, true));
        assert!(vocab.covers(&seq[..3], true));

        let seq = degrees("i iv v");
        assert_eq!(vocab.count(&seq, true), 0);
        assert_eq!(vocab.count(&seq, false), 3);
        assert!(vocab.covers(&seq, false));
    }
}
