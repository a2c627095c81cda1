use std::fmt;
use super::key::Mode;
use super::degree::Degree;

const NAMES: [&str; 12] = [
    "P1",
    "m2",
    "M2",
    "m3",
    "M3",
    "P4",
    "d5",
    "P5",
    "m6",
    "M6",
    "m7",
    "M7",
];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Interval {
    pub semitones: isize
}

impl Interval {
    /// Position within the octave, always in 0..12,
    /// regardless of direction or octave.
    pub fn pitch_class(&self) -> usize {
        self.semitones.rem_euclid(12) as usize
    }

    /// The degree label a chord of the given quality
    /// gets when it sits this far above the root.
    pub fn to_degree(&self, mode: Mode) -> Degree {
        Degree {
            index: self.pitch_class(),
            mode,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", NAMES[self.pitch_class()])
    }
}

/// Generate an interval from an integer.
impl From<isize> for Interval {
    fn from(i: isize) -> Self {
        Interval { semitones: i }
    }
}
