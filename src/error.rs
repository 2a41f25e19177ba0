//! Error types for primer loading and file IO.
//!
//! Classification itself has no failure states (absence of a match is the
//! ordinary `-1` result); everything that can go wrong happens while loading
//! primers or reads, or while writing the output table.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PrimersortError>;

/// Errors raised by the loaders and writers.
#[derive(Error, Debug)]
pub enum PrimersortError {
    /// A primer pattern failed to compile as a start-anchored regex.
    ///
    /// Raised at load time so a bad pattern can never silently classify
    /// every read as unmatched.
    #[error("invalid primer pattern '{pattern}': {source}")]
    InvalidPrimer {
        /// The pattern text as read from the primer table.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The primer table has no `Primers` column.
    #[error("no 'Primers' column in '{path}'")]
    MissingPrimersColumn {
        /// Path of the offending table.
        path: String,
    },

    /// Reading or writing a CSV/TSV table failed.
    #[error("table error for '{path}': {source}")]
    Table {
        /// Path of the table being read or written.
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Parsing the reads file failed.
    #[error("failed to parse reads from '{path}': {source}")]
    ReadInput {
        /// Path of the reads file.
        path: String,
        #[source]
        source: needletail::errors::ParseError,
    },
}
