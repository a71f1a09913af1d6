//! # ldif2csv - Directory export to CSV conversion
//!
//! ldif2csv turns LDIF dumps from a directory server (group listings, owner
//! reports, and similar exports) into CSV rows, keeping only the attributes
//! the caller asks for.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  LDIF File  │────▶│   Parser    │────▶│   Writer    │
//! │ (ISO/UTF8)  │     │ (auto-enc)  │     │ (CSV rows)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Records are blank-line-separated blocks; repeated attribute names within a
//! block merge into one newline-joined field. Each record becomes one row,
//! columns in the order its attributes first appeared.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ldif2csv::{parse_file_auto, write_csv};
//!
//! let attributes = vec!["cn".to_string(), "owner".to_string()];
//! let result = parse_file_auto("groups.ldif", &attributes)?;
//!
//! write_csv(std::io::stdout().lock(), &result.records)?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Record, Attribute)
//! - [`parser`] - LDIF parsing with encoding auto-detection
//! - [`writer`] - CSV row serialization

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Output
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConvertError, ConvertResult, CsvError, CsvResult, LdifError, LdifResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Attribute, Record};

// =============================================================================
// Re-exports - LDIF Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_encoding, parse_bytes_auto, parse_file, parse_file_auto, parse_reader,
    parse_str, ParseResult,
};

// =============================================================================
// Re-exports - CSV Output
// =============================================================================

pub use writer::{write_csv, write_csv_file};
