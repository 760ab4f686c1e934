//! Billing records loaded from a configuration document.
//!
//! All records are plain data: loaded once, then only read.

mod bank;
mod billable_item;
mod billing_config;
mod details;

pub use bank::BankDetails;
pub use billable_item::BillableItem;
pub use billing_config::BillingConfig;
pub use details::{BillDetails, BillToDetails, BusinessDetails};
