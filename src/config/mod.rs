//! Configuration loading for billing documents.
//!
//! This module loads a bill description from a YAML file into a
//! [`BillingConfig`](crate::models::BillingConfig).
//!
//! # Example
//!
//! ```no_run
//! use invoice_config::config::load_config;
//!
//! let config = load_config("./config/invoice.yaml").unwrap();
//! println!("Billing {} items", config.billables.len());
//! ```

pub(crate) mod de;
mod loader;

pub use loader::{load_config, parse_config};
