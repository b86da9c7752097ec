//! Errors raised by the library.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("malformed value '{value}' in column '{column}' of row {row}")]
    MalformedValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidConfig {
    #[error("at least one neighbour must be consulted")]
    Neighbours,

    #[error("EV threshold must be a non-negative number, got {0}")]
    EvThreshold(f64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CleanseError {
    #[error("missing match result column '{0}'")]
    MissingResultColumn(String),
}
