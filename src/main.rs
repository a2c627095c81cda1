use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;
use anyhow::{bail, Result};
use numerals::{
    config::Config,
    core::Vocabulary,
    eval::{compare, histogram, EvalOptions},
    file::{load_tunes, OnError},
    report,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Config file; defaults to ~/.config/numerals/config.yaml if present
    #[clap(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Log debug output
    #[clap(short, long)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Corpus {
    /// Files of tunes, one progression per line
    #[clap(required = true, value_hint = ValueHint::FilePath)]
    files: Vec<PathBuf>,

    /// Skip lines that don't parse instead of stopping
    #[clap(long)]
    skip_invalid: bool,

    /// Don't measure minor-key tunes from the relative major
    #[clap(long)]
    no_relative_minor: bool,

    /// Don't measure tunes with a bVII as mixolydian
    #[clap(long)]
    no_mixolydian: bool,

    /// Treat major and minor chords on the same degree alike
    #[clap(long)]
    thirds_off: bool,
}

impl Corpus {
    fn apply(&self, opts: &mut EvalOptions) {
        if self.no_relative_minor {
            opts.inference.relative_minor = false;
        }
        if self.no_mixolydian {
            opts.inference.mixolydian = false;
        }
        if self.thirds_off {
            opts.thirds = false;
        }
    }

    fn on_error(&self) -> OnError {
        if self.skip_invalid {
            OnError::Skip
        } else {
            OnError::Abort
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count how many tunes use each degree
    Histogram {
        #[clap(flatten)]
        corpus: Corpus,
    },

    /// Measure how much of the corpus each vocabulary can play
    Playability {
        #[clap(flatten)]
        corpus: Corpus,

        /// Degrees to test, e.g. "I IV V vi"; repeatable.
        /// Replaces the vocabularies from the config.
        #[clap(long = "vocab")]
        vocabs: Vec<String>,

        /// Try every root rather than the inferred one
        #[clap(long)]
        thorough: bool,

        /// List tunes a thorough run can't fully cover
        #[clap(long)]
        shortfalls: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::resolve(cli.config.as_deref())?;
    let mut opts = config.eval;

    match cli.command {
        Command::Histogram { corpus } => {
            corpus.apply(&mut opts);
            let tunes = load_tunes(&corpus.files, corpus.on_error())?;
            let hist = histogram(&tunes, &opts.inference);
            println!("{}", report::histogram(&hist, opts.thirds));
        }
        Command::Playability { corpus, vocabs, thorough, shortfalls } => {
            corpus.apply(&mut opts);
            if thorough {
                opts.thorough = true;
            }
            if shortfalls {
                opts.thorough = true;
                opts.shortfalls = true;
            }

            let vocabs = if vocabs.is_empty() {
                config.vocabularies
            } else {
                vocabs.iter()
                    .map(|v| v.parse::<Vocabulary>())
                    .collect::<Result<Vec<_>, _>>()?
            };
            if vocabs.is_empty() {
                bail!("No vocabularies to test; pass --vocab or list them in the config");
            }

            let tunes = load_tunes(&corpus.files, corpus.on_error())?;
            let rows = compare(&tunes, &vocabs, &opts)?;
            println!("{}", report::comparison(&rows));

            if opts.shortfalls {
                for (vocab, result) in &rows {
                    if !result.shortfalls.is_empty() {
                        println!("\n{}:\n{}", vocab, report::shortfalls(&result.shortfalls));
                    }
                }
            }
        }
    }

    Ok(())
}
