//! Error types for the board core

use std::io;
use thiserror::Error;

use crate::config::ConfigError;

/// Board error type
#[derive(Error, Debug)]
pub enum Error {
    /// A cell outside the logical board was addressed.
    /// Only reachable through a broken invariant in the controller.
    #[error("cell ({row}, {col}) is outside the {width}x{height} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// A board was requested with a zero width or height
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rejected configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for board operations
pub type Result<T> = std::result::Result<T, Error>;
