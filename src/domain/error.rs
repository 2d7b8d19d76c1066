//! Error types for the vitrina core.
//!
//! This module defines the centralized error type [`VitrinaError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for vitrina operations.
///
/// This enum consolidates the error conditions that can occur in the core:
/// backend fetch and decode failures, I/O failures from file-based
/// collaborators, and configuration problems. Filtering, cascading option
/// resolution and pagination are total functions and never produce errors.
///
/// # Examples
///
/// ```
/// use vitrina::domain::VitrinaError;
///
/// fn validate_page_size(size: usize) -> Result<(), VitrinaError> {
///     if size == 0 {
///         return Err(VitrinaError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum VitrinaError {
    /// Backend fetch or decode failed.
    ///
    /// Occurs when a collection cannot be retrieved from the backend
    /// collaborator, or when its response cannot be decoded. The string
    /// contains a description of what went wrong.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, raised by file-based
    /// collaborators (fixture backend, TOML configuration). Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for vitrina operations.
///
/// This is a type alias for `std::result::Result<T, VitrinaError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, VitrinaError>;
