//! The aggregate billing record.

use serde::{Deserialize, Serialize};

use crate::config::de::{items_or_default, null_as_default};

use super::{BankDetails, BillDetails, BillToDetails, BillableItem, BusinessDetails};

/// Everything needed to render one invoice.
///
/// Sections missing from the document are left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// The issuing business.
    #[serde(deserialize_with = "null_as_default")]
    pub business: BusinessDetails,
    /// Bill metadata.
    #[serde(deserialize_with = "null_as_default")]
    pub bill: BillDetails,
    /// The recipient.
    #[serde(deserialize_with = "null_as_default")]
    pub bill_to: BillToDetails,
    /// Line items in display order.
    #[serde(deserialize_with = "items_or_default")]
    pub billables: Vec<BillableItem>,
    /// Bank transfer details.
    #[serde(deserialize_with = "null_as_default")]
    pub bank: BankDetails,
}
