mod key;
mod note;
mod chord;
mod degree;
mod interval;
mod vocabulary;

pub use key::{Mode, Root};
pub use note::Note;
pub use chord::{Chord, ChordParseError};
pub use degree::{Degree, DegreeParseError, NUMERALS};
pub use interval::Interval;
pub use vocabulary::{Vocabulary, VocabularyParseError};
