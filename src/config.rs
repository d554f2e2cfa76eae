use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// File read instead of stdin when built with the `input-file` feature.
pub const INPUT_FILE: &str = "input.txt";

/// What [`Game::load`](../struct.Game.html#method.load) does with a malformed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Log the record and keep reading.
    #[default]
    Lenient,
    /// Stop at the record and return its error.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadConfig {
    pub mode: LoadMode,
    pub source: InputSource,
}

impl LoadConfig {
    pub fn new(mode: LoadMode, source: InputSource) -> LoadConfig {
        LoadConfig { mode, source }
    }

    /// Config selected at compile time through the `input-file` and `strict` features.
    pub fn from_features() -> LoadConfig {
        let mode = if cfg!(feature = "strict") {
            LoadMode::Strict
        } else {
            LoadMode::Lenient
        };
        let source = if cfg!(feature = "input-file") {
            InputSource::File(PathBuf::from(INPUT_FILE))
        } else {
            InputSource::Stdin
        };
        LoadConfig { mode, source }
    }
}
