mod histogram;
mod playability;

pub use histogram::{Histogram, histogram};
pub use playability::{PlayabilityReport, Shortfall, playability};

use thiserror::Error;
use serde::Deserialize;
use crate::core::Vocabulary;
use crate::inference::Inference;
use crate::tune::Tune;

#[derive(Error, Debug, PartialEq)]
pub enum EvalError {
    #[error("Can't compute a ratio over an empty corpus")]
    EmptyCorpus,
}

fn yes() -> bool {
    true
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
pub struct EvalOptions {
    #[serde(default)]
    pub inference: Inference,

    // Distinguish major and minor chords on the same degree.
    // Turning this off ("thirds off") compares degrees only.
    #[serde(default = "yes")]
    pub thirds: bool,

    // Search every root instead of trusting the inferred one.
    #[serde(default)]
    pub thorough: bool,

    // Collect tunes a thorough run couldn't fully cover.
    #[serde(default)]
    pub shortfalls: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            inference: Inference::default(),
            thirds: true,
            thorough: false,
            shortfalls: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Histogram(Histogram),
    Playability(PlayabilityReport),
}

/// Evaluate a corpus. Without a vocabulary this counts degree usage;
/// with one it measures how much of the corpus the vocabulary covers.
pub fn evaluate(tunes: &[Tune], vocab: Option<&Vocabulary>, opts: &EvalOptions) -> Result<Evaluation, EvalError> {
    match vocab {
        None => Ok(Evaluation::Histogram(histogram(tunes, &opts.inference))),
        Some(vocab) => Ok(Evaluation::Playability(playability(tunes, vocab, opts)?)),
    }
}

/// Run the playability check for each candidate vocabulary.
pub fn compare<'a>(tunes: &[Tune], vocabs: &'a [Vocabulary], opts: &EvalOptions) -> Result<Vec<(&'a Vocabulary, PlayabilityReport)>, EvalError> {
    vocabs.iter()
        .map(|vocab| playability(tunes, vocab, opts).map(|report| (vocab, report)))
        .collect()
}
