//! Error types for the LDIF to CSV conversion pipeline.
//!
//! This module defines the error hierarchy of the crate:
//!
//! - [`LdifError`] - input-side errors (reading and decoding LDIF)
//! - [`CsvError`] - output-side errors (writing CSV rows)
//! - [`ConvertError`] - top-level conversion errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// LDIF Parsing Errors
// =============================================================================

/// Errors while reading or decoding LDIF input.
#[derive(Debug, Error)]
pub enum LdifError {
    /// Failed to read the input stream.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes could not be decoded.
    #[error("Failed to decode input: {0}")]
    Encoding(String),
}

// =============================================================================
// CSV Output Errors
// =============================================================================

/// Errors while writing CSV output.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to write to the output sink.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer rejected a record.
    #[error("Failed to write record to csv: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type a driver sees when running the full
/// parse-then-serialize sequence. It wraps both lower-level errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// LDIF input error.
    #[error("LDIF error: {0}")]
    Ldif(#[from] LdifError),

    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for LDIF parsing operations.
pub type LdifResult<T> = Result<T, LdifError>;

/// Result type for CSV output operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for full conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;
