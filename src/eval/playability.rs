use crate::core::{Degree, Vocabulary};
use crate::inference::best_interpretation;
use crate::tune::{Tune, describe};
use super::{EvalError, EvalOptions};

/// A tune the vocabulary can't fully cover,
/// even under its best-fitting root.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Shortfall {
    pub tune: String,
    pub score: usize,
    pub len: usize,
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayabilityReport {
    pub playable: usize,
    pub total: usize,

    // Only collected for thorough runs
    // with shortfalls enabled.
    pub shortfalls: Vec<Shortfall>,
}

impl PlayabilityReport {
    /// Fraction of the corpus that is playable, in [0, 1].
    pub fn ratio(&self) -> f64 {
        self.playable as f64 / self.total as f64
    }
}

/// Check which tunes can be played using only the degrees in the vocabulary.
///
/// Heuristic runs measure each tune from its inferred root.
/// Thorough runs try every root and accept a tune if any of
/// them puts all of its chords in the vocabulary.
pub fn playability(tunes: &[Tune], vocab: &Vocabulary, opts: &EvalOptions) -> Result<PlayabilityReport, EvalError> {
    if tunes.is_empty() {
        return Err(EvalError::EmptyCorpus);
    }

    let mut playable = 0;
    let mut shortfalls = vec![];
    for tune in tunes {
        if opts.thorough {
            let best = best_interpretation(tune, vocab, opts.thirds);
            if best.score == tune.len() {
                playable += 1;
            } else if opts.shortfalls {
                log::debug!("{}/{} `{}` -> {}",
                    best.score, tune.len(), tune, describe(&best.degrees));
                shortfalls.push(Shortfall {
                    tune: tune.to_string(),
                    score: best.score,
                    len: tune.len(),
                    degrees: best.degrees,
                });
            }
        } else {
            let degrees = opts.inference.interpret(tune);
            if vocab.covers(&degrees, opts.thirds) {
                playable += 1;
            }
        }
    }

    log::debug!("`{}`: {}/{} tunes playable", vocab, playable, tunes.len());
    Ok(PlayabilityReport {
        playable,
        total: tunes.len(),
        shortfalls,
    })
}
