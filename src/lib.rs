//! char-count: report the number of characters in a text file
//!
//! The file is decoded as UTF-8 and its characters (Unicode scalar values,
//! not bytes) are counted.

/// Command-line argument parsing
pub mod cli;

/// Character counting over files and readers
pub mod counter;

mod error;

pub use cli::Cli;
pub use counter::{count_characters, count_reader, count_str};
pub use error::{CountError, UsageError};
