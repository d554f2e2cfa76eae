use std::error::Error;
use std::fmt;
use std::io;
use serde::{Serialize, Deserialize};

/// The three kinds of record an input pair can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Player,
    Round,
    Winner,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordKind::Player => write!(f, "player"),
            RecordKind::Round => write!(f, "round"),
            RecordKind::Winner => write!(f, "round winner"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    InvalidIndex { kind: RecordKind, index: String },
    InvalidRank(char),
    RankOutOfRange(u8),
    InvalidWinner(char),
    TokenLength { expected: usize, actual: usize },
    /// Holds the token with invalid bytes replaced by U+FFFD.
    NotUtf8(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            DecodeError::InvalidIndex { kind, index } => {
                write!(f, "Error: Invalid {} index '{}'.", kind, index)},
            DecodeError::InvalidRank(c) => {
                write!(f, "Error: Card rank '{}' is not a digit.", c)},
            DecodeError::RankOutOfRange(r) => {
                write!(f, "Error: Card rank {} is above 9.", r)},
            DecodeError::InvalidWinner(c) => {
                write!(f, "Error: Round winner '{}' is not a player index.", c)},
            DecodeError::TokenLength { expected, actual } => {
                write!(f, "Error: Expected a card token of {} characters, got {}.", expected, actual)},
            DecodeError::NotUtf8(token) => {
                write!(f, "Error: Token '{}' is not valid UTF-8.", token)},
        }
    }
}

impl Error for DecodeError {}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// `pair` is the 1-based position of the offending pair in the stream.
    Decode { pair: usize, source: DecodeError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            LoadError::Io(e) => {
                write!(f, "Error: I/O failure: {}", e)},
            LoadError::Decode { pair, source } => {
                write!(f, "Error: Malformed record #{}: {}", pair, source)},
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Decode { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}
