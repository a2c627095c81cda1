use std::{env, fs::File, io::BufReader};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, de};
use crate::core::Vocabulary;
use crate::eval::EvalOptions;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub eval: EvalOptions,

    #[serde(default, deserialize_with = "from_vocabularies")]
    pub vocabularies: Vec<Vocabulary>,
}

/// Lets us write vocabularies as space-separated strings in yaml,
/// e.g. "I IV V vi" instead of "[I, IV, V, vi]"
fn from_vocabularies<'de, D>(deserializer: D) -> Result<Vec<Vocabulary>, D::Error>
where
    D: Deserializer<'de>,
{
    let vocabs: Vec<String> = Deserialize::deserialize(deserializer)?;
    vocabs.iter()
        .map(|s| s.parse::<Vocabulary>()
            .map_err(|err| <D::Error as de::Error>::custom(format!("`{}`: {}", s, err))))
        .collect()
}

impl Config {
    /// Where the config lives if no path is given.
    pub fn default_path() -> Option<PathBuf> {
        env::var("HOME").ok()
            .map(|home| Path::new(&home).join(".config/numerals/config.yaml"))
    }

    pub fn load(path: &Path) -> Result<Config> {
        let file = File::open(path)
            .with_context(|| format!("Couldn't open config {}", path.display()))?;
        let config = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("Error while reading config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the given config, or the default one if it exists.
    /// Falls back to built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::load(path),
            None => match Config::default_path() {
                Some(path) if path.exists() => Config::load(&path),
                _ => Ok(Config::default()),
            }
        }
    }
}
