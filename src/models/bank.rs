//! Bank transfer details.

use serde::{Deserialize, Serialize};

use crate::config::de::scalar_string;

/// Settlement instructions printed at the foot of the invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankDetails {
    /// Transfer type (e.g., "Domestic", "SWIFT").
    #[serde(deserialize_with = "scalar_string")]
    pub transfer_type: String,
    /// Account holder name.
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
    /// Bank or account holder address.
    #[serde(deserialize_with = "scalar_string")]
    pub address: String,
    /// Account type (e.g., "Business").
    #[serde(deserialize_with = "scalar_string")]
    pub account_type: String,
    /// International bank account number.
    #[serde(deserialize_with = "scalar_string")]
    pub iban: String,
    /// Domestic sort code.
    #[serde(deserialize_with = "scalar_string")]
    pub sort_code: String,
}

impl BankDetails {
    /// Returns the fields in declaration order for positional rendering:
    /// transfer type, name, address, account type, IBAN, sort code.
    pub fn strings(&self) -> [String; 6] {
        [
            self.transfer_type.clone(),
            self.name.clone(),
            self.address.clone(),
            self.account_type.clone(),
            self.iban.clone(),
            self.sort_code.clone(),
        ]
    }
}
