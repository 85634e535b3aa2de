//! Error types for the crossweave pipeline, with error codes and helpful
//! messages.
//!
//! # Error Codes
//!
//! Each variant has a stable code for documentation lookup:
//!
//! - W001: `WordFile` (word file could not be read)
//! - W002: `Supplier` (word/clue supplier failed; wraps [`SupplierError`])
//! - P001: `Transport` (supplier transport failure)
//! - P002: `MalformedPayload` (supplier returned an unusable payload)
//! - P003: `EmptySupply` (supplier returned no words for the theme)
//!
//! Placement itself never raises: a word that cannot be seated is a reported
//! omission, not an error. The variants here cover the boundaries around the
//! engine, where a build legitimately cannot start.

use std::io;

/// Failure from a word/clue supplier (network-backed or otherwise).
///
/// Supplier failures are fatal to a build: the engine is never invoked with
/// partial data, so there is nothing to recover here.
#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("word supplier transport failure: {reason}")]
    Transport { reason: String },

    #[error("word supplier returned a malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("word supplier returned no words for theme \"{theme}\"")]
    EmptySupply { theme: String },
}

impl SupplierError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SupplierError::Transport { .. } => "P001",
            SupplierError::MalformedPayload { .. } => "P002",
            SupplierError::EmptySupply { .. } => "P003",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SupplierError::Transport { .. } => {
                Some("Check connectivity to the word supplier, or pass an explicit word list instead.")
            }
            SupplierError::MalformedPayload { .. } => None,
            SupplierError::EmptySupply { .. } => {
                Some("Try a broader theme, or pass an explicit word list instead.")
            }
        }
    }
}

/// Unified error type for everything outside the placement core.
#[derive(Debug, thiserror::Error)]
pub enum CrosswordError {
    /// The word file passed on the command line could not be read.
    #[error("failed to read word file \"{path}\": {source}")]
    WordFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The word/clue supplier failed; the build never ran.
    #[error("word supplier failure: {0}")]
    Supplier(#[from] SupplierError),
}

impl CrosswordError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CrosswordError::WordFile { .. } => "W001",
            CrosswordError::Supplier(_) => "W002",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CrosswordError::WordFile { .. } => {
                Some("Expected one entry per line: `word;clue` with the clue optional.")
            }
            CrosswordError::Supplier(e) => e.help(),
        }
    }

    /// Formats the error with its code and optional help text, for
    /// user-facing CLI output.
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            CrosswordError::Supplier(e) => {
                format_error_with_code_and_help(&e.to_string(), e.code(), e.help())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Shared formatting for `display_detailed` implementations.
pub(crate) fn format_error_with_code_and_help(
    message: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    match help {
        Some(help) => format!("[{code}] {message}\n  help: {help}"),
        None => format!("[{code}] {message}"),
    }
}
