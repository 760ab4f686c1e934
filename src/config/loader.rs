//! Configuration loading functionality.
//!
//! This module reads a billing document from disk and deserializes it
//! into a [`BillingConfig`].

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{BillingError, BillingResult};
use crate::models::BillingConfig;

/// Loads a billing configuration from a YAML file.
///
/// The whole file is read and closed before parsing. Missing keys and
/// explicit `null`s leave the corresponding fields empty; unknown keys are
/// ignored. No validation is applied to the values themselves.
///
/// # Arguments
///
/// * `path` - Path to the YAML document (e.g., "./config/invoice.yaml")
///
/// # Returns
///
/// Returns the loaded `BillingConfig` on success, or an error if:
/// - The file cannot be read (`ConfigRead`)
/// - The file is not valid YAML or has the wrong shape (`ConfigParse`)
///
/// # Example
///
/// ```no_run
/// use invoice_config::config::load_config;
///
/// let config = load_config("./config/invoice.yaml")?;
/// println!("Bill for {}", config.bill_to.name);
/// # Ok::<(), invoice_config::error::BillingError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> BillingResult<BillingConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|source| {
        warn!(path = %path_str, error = %source, "Failed to read billing configuration");
        BillingError::ConfigRead {
            path: path_str.clone(),
            source,
        }
    })?;

    let config = parse_config(&content).map_err(|source| {
        warn!(path = %path_str, error = %source, "Failed to parse billing configuration");
        BillingError::ConfigParse {
            path: path_str.clone(),
            source,
        }
    })?;

    debug!(
        path = %path_str,
        billables = config.billables.len(),
        "Loaded billing configuration"
    );

    Ok(config)
}

/// Parses a billing configuration from YAML text.
///
/// A document that is empty or only whitespace yields an all-empty
/// configuration.
///
/// # Example
///
/// ```
/// use invoice_config::config::parse_config;
///
/// let config = parse_config("bill:\n  currency: EUR\n").unwrap();
/// assert_eq!(config.bill.currency, "EUR");
/// assert!(config.billables.is_empty());
/// ```
pub fn parse_config(content: &str) -> Result<BillingConfig, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(BillingConfig::default());
    }

    serde_yaml::from_str(content)
}
