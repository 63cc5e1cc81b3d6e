use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrokeError {
    #[error("Unsupported number of keys: {0} (expected 1..=63)")]
    UnsupportedKeyCount(usize),

    #[error("Invalid key label: {0:?}")]
    InvalidKeyLabel(String),

    #[error("Left-hand key on the right-hand side: {0:?}")]
    InvalidSideOrder(String),

    #[error("Invalid number key: {0:?}")]
    InvalidNumberKey(String),

    #[error("Invalid numbers: {0}")]
    InvalidDigitMap(String),

    #[error("Invalid implicit hyphen keys: {0}")]
    InvalidImplicitHyphenKeys(String),

    #[error("Invalid keys mask: {0:#x}")]
    InvalidMask(u64),

    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    #[error("Invalid steno: {0:?}")]
    InvalidSteno(String),

    #[error("Unsupported stroke input: {0}")]
    UnsupportedInput(String),

    #[error("Empty stroke")]
    EmptyStroke,

    #[error("Failed to read layout file {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse layout file {path}: {message}")]
    ParseConfig { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, StrokeError>;
