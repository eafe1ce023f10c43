use std::path::PathBuf;

use crate::extractor::DEFAULT_LIMIT;

pub const DEFAULT_INPUT: &str = "consolidado.bib";
pub const DEFAULT_OUTPUT: &str = "primeros_500.bib";

/// Environment variables consulted by the command line tool
pub const INPUT_ENV: &str = "BIBHEAD_INPUT";
pub const OUTPUT_ENV: &str = "BIBHEAD_OUTPUT";
pub const LIMIT_ENV: &str = "BIBHEAD_LIMIT";

/// Where to read entries from, where to write them to, and how many to keep.
/// Resolving defaults and environment variables is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub limit: usize,
}

impl Config {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input: I, output: O, limit: usize) -> Config {
        Config {
            input: input.into(),
            output: output.into(),
            limit,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_LIMIT)
    }
}
