//! End-to-end runs over the fixture corpus

use numerals::{
    core::{Degree, Vocabulary},
    eval::{compare, evaluate, histogram, playability, EvalError, EvalOptions, Evaluation},
    file::{load_tunes, OnError},
    inference::{best_interpretation, Inference},
    tune::Tune,
};
use std::path::PathBuf;

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn load_corpus() -> Vec<Tune> {
    load_tunes(&[fixture_path("tunes.txt")], OnError::Abort).unwrap()
}

fn vocab(s: &str) -> Vocabulary {
    s.try_into().unwrap()
}

fn degree(s: &str) -> Degree {
    s.try_into().unwrap()
}

#[test]
fn test_load_skips_blank_lines() {
    let tunes = load_corpus();
    assert_eq!(tunes.len(), 10);
    assert_eq!(tunes[3].key, "D");
}

#[test]
fn test_invalid_lines() {
    let res = load_tunes(&[fixture_path("invalid.txt")], OnError::Abort);
    assert!(res.is_err());

    let tunes = load_tunes(&[fixture_path("invalid.txt")], OnError::Skip).unwrap();
    assert_eq!(tunes.len(), 2);
}

#[test]
fn test_corpus_histogram() {
    let tunes = load_corpus();
    let hist = histogram(&tunes, &Inference::default());
    assert_eq!(hist.get(&degree("I")), 10);
    assert_eq!(hist.get(&degree("IV")), 10);
    assert_eq!(hist.get(&degree("V")), 10);
    assert_eq!(hist.get(&degree("vi")), 6);
    assert_eq!(hist.get(&degree("bVII")), 0);

    let total: usize = hist.iter().map(|(_, count)| count).sum();
    assert_eq!(total, 36);
    for index in 0..12 {
        assert!(hist.merged(index) <= tunes.len());
    }
}

#[test]
fn test_corpus_playability() {
    let tunes = load_corpus();
    let vocabs = vec![vocab("I IV V"), vocab("I IV V vi")];

    let rows = compare(&tunes, &vocabs, &EvalOptions::default()).unwrap();
    assert_eq!(rows[0].1.playable, 4);
    assert_eq!(rows[0].1.ratio(), 0.4);
    assert_eq!(rows[1].1.ratio(), 1.0);

    let thorough = EvalOptions { thorough: true, shortfalls: true, ..EvalOptions::default() };
    let report = playability(&tunes, &vocabs[0], &thorough).unwrap();
    assert_eq!(report.playable, 4);
    assert_eq!(report.shortfalls.len(), 6);
    for shortfall in &report.shortfalls {
        assert!(shortfall.score < shortfall.len);
    }
}

#[test]
fn test_thorough_never_worse_than_heuristic() {
    let tunes = load_corpus();
    for v in ["I IV V", "I V", "I bVII IV", "vi IV I V", "ii V I"] {
        let vocab = vocab(v);
        for thirds in [true, false] {
            let heuristic = EvalOptions { thirds, ..EvalOptions::default() };
            let thorough = EvalOptions { thorough: true, ..heuristic };
            let h = playability(&tunes, &vocab, &heuristic).unwrap();
            let t = playability(&tunes, &vocab, &thorough).unwrap();
            assert!(t.playable >= h.playable, "{}: {} < {}", v, t.playable, h.playable);

            for tune in &tunes {
                let score = vocab.count(&heuristic.inference.interpret(tune), thirds);
                assert!(best_interpretation(tune, &vocab, thirds).score >= score);
            }
        }
    }
}

#[test]
fn test_empty_corpus() {
    let res = evaluate(&[], Some(&vocab("I IV V")), &EvalOptions::default());
    assert_eq!(res, Err(EvalError::EmptyCorpus));

    match evaluate(&[], None, &EvalOptions::default()) {
        Ok(Evaluation::Histogram(hist)) => assert_eq!(hist.iter().map(|(_, c)| c).sum::<usize>(), 0),
        other => panic!("Expected an empty histogram, got {:?}", other),
    }
}
