//! Billing configuration for invoice generation.
//!
//! This crate loads a YAML-described bill (issuing business, bill metadata,
//! recipient, line items and bank transfer details) and renders the
//! human-formatted monetary strings an invoice template needs.

#![warn(missing_docs)]

pub mod config;
pub mod currency;
pub mod error;
pub mod models;
