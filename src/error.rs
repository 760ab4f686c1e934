//! Error types for billing configuration loading.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the two recoverable failures of a load: the file could not be read,
//! or its contents were not a billing document.

use std::io;

use thiserror::Error;

/// The main error type for billing configuration loading.
///
/// # Example
///
/// ```
/// use invoice_config::error::BillingError;
/// use std::io;
///
/// let error = BillingError::ConfigRead {
///     path: "/missing/bill.yaml".to_string(),
///     source: io::Error::from(io::ErrorKind::NotFound),
/// };
/// assert!(error.to_string().starts_with("Failed to read configuration file '/missing/bill.yaml'"));
/// ```
#[derive(Debug, Error)]
pub enum BillingError {
    /// Configuration file could not be read (missing, permission denied, ...).
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigRead {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Configuration file was read but is not a well-formed billing document.
    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

impl BillingError {
    /// Returns the I/O error kind for read failures, `None` for parse failures.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::ConfigRead { source, .. } => Some(source.kind()),
            Self::ConfigParse { .. } => None,
        }
    }

    /// Returns the path of the configuration file involved.
    pub fn path(&self) -> &str {
        match self {
            Self::ConfigRead { path, .. } | Self::ConfigParse { path, .. } => path,
        }
    }
}

/// A type alias for Results that return BillingError.
pub type BillingResult<T> = Result<T, BillingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn parse_error() -> serde_yaml::Error {
        serde_yaml::from_str::<Vec<u32>>("not: [a, list").unwrap_err()
    }

    #[test]
    fn test_config_read_displays_path_and_cause() {
        let error = BillingError::ConfigRead {
            path: "/missing/bill.yaml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read configuration file '/missing/bill.yaml': no such file"
        );
    }

    #[test]
    fn test_config_parse_displays_path() {
        let error = BillingError::ConfigParse {
            path: "/config/bad.yaml".to_string(),
            source: parse_error(),
        };
        assert!(
            error
                .to_string()
                .starts_with("Failed to parse configuration file '/config/bad.yaml': ")
        );
    }

    #[test]
    fn test_io_kind_only_for_read_errors() {
        let read = BillingError::ConfigRead {
            path: "a".to_string(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let parse = BillingError::ConfigParse {
            path: "b".to_string(),
            source: parse_error(),
        };

        assert_eq!(read.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert_eq!(parse.io_kind(), None);
        assert_eq!(read.path(), "a");
        assert_eq!(parse.path(), "b");
    }

    #[test]
    fn test_source_is_preserved() {
        let error = BillingError::ConfigRead {
            path: "a".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let source = error.source().expect("read error carries its cause");
        assert_eq!(source.to_string(), "gone");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<BillingError>();
    }
}
