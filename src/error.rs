//! Error types for line reading operations.

use thiserror::Error;

/// The main error type for line reading operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors from the underlying read operation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The descriptor index lies outside the reader's slot table.
    #[error("invalid descriptor {descriptor}: table capacity is {capacity}")]
    InvalidDescriptor { descriptor: usize, capacity: usize },

    /// The descriptor is within range but no stream is attached to its slot.
    #[error("descriptor {descriptor} has no attached stream")]
    NotAttached { descriptor: usize },

    /// Reading is disabled because the configured chunk capacity is zero.
    #[error("chunk capacity is zero: reading is disabled")]
    Disabled,

    /// Every slot in the descriptor table is occupied.
    #[error("descriptor table is full: capacity is {capacity}")]
    TableFull { capacity: usize },
}

/// A convenient Result type for line reading operations.
pub type Result<T> = std::result::Result<T, Error>;
