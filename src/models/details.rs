//! Identity and metadata sections of a bill.

use serde::{Deserialize, Serialize};

use crate::config::de::scalar_string;

/// The party issuing the bill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDetails {
    /// Business name.
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
    /// Responsible person.
    #[serde(deserialize_with = "scalar_string")]
    pub person: String,
    /// Postal address.
    #[serde(deserialize_with = "scalar_string")]
    pub address: String,
    /// Path to the logo image shown on the invoice.
    #[serde(deserialize_with = "scalar_string")]
    pub image_file: String,
}

/// Metadata about the bill itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillDetails {
    /// Department the bill is issued from.
    #[serde(deserialize_with = "scalar_string")]
    pub department: String,
    /// Currency code of the bill (e.g., "USD"). Not validated.
    #[serde(deserialize_with = "scalar_string")]
    pub currency: String,
    /// Payment terms text (e.g., "Net 30").
    #[serde(deserialize_with = "scalar_string")]
    pub payment_terms: String,
    /// Due date as free-form text.
    #[serde(deserialize_with = "scalar_string")]
    pub due_date: String,
}

/// The recipient of the bill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillToDetails {
    /// Recipient email address.
    #[serde(deserialize_with = "scalar_string")]
    pub email: String,
    /// Recipient name.
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
    /// Street line of the address.
    #[serde(deserialize_with = "scalar_string")]
    pub street: String,
    /// City, state and zip line of the address.
    #[serde(deserialize_with = "scalar_string")]
    pub city_state_zip: String,
    /// Country line of the address.
    #[serde(deserialize_with = "scalar_string")]
    pub country: String,
}
