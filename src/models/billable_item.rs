//! Invoice line items.

use serde::{Deserialize, Serialize};

use crate::config::de::{null_as_default, scalar_string};
use crate::currency::format_amount;

/// One line of the invoice.
///
/// The line total is never stored; it is recomputed from the unit price
/// and quantity by [`BillableItem::total`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillableItem {
    /// Number of units billed.
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: f64,
    /// Line description, shown verbatim.
    #[serde(deserialize_with = "scalar_string")]
    pub description: String,
    /// Price of a single unit.
    #[serde(deserialize_with = "null_as_default")]
    pub unit_price: f64,
    /// Currency code printed in front of the amounts.
    #[serde(deserialize_with = "scalar_string")]
    pub currency: String,
}

impl BillableItem {
    /// Returns `unit_price * quantity`, unrounded.
    pub fn total(&self) -> f64 {
        self.unit_price * self.quantity
    }

    /// Returns the display cells of this line: quantity, description,
    /// unit price and total.
    ///
    /// The quantity is printed with two decimals and no grouping. Both
    /// amounts are rounded independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use invoice_config::models::BillableItem;
    ///
    /// let item = BillableItem {
    ///     quantity: 3.0,
    ///     description: "Widget".to_string(),
    ///     unit_price: 19.999,
    ///     currency: "USD".to_string(),
    /// };
    /// assert_eq!(item.strings(), ["3.00", "Widget", "USD 20.00", "USD 60.00"]);
    /// ```
    pub fn strings(&self) -> [String; 4] {
        [
            format!("{:.2}", self.quantity),
            self.description.clone(),
            format_amount(&self.currency, self.unit_price),
            format_amount(&self.currency, self.total()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(quantity: f64, unit_price: f64) -> BillableItem {
        BillableItem {
            quantity,
            description: "Consulting".to_string(),
            unit_price,
            currency: "EUR".to_string(),
        }
    }

    #[test]
    fn test_total_multiplies_unit_price_by_quantity() {
        assert_eq!(item(3.0, 19.999).total(), 19.999 * 3.0);
        assert_eq!(item(0.0, 250.0).total(), 0.0);
        assert_eq!(item(1.5, 40.0).total(), 60.0);
    }

    #[test]
    fn test_total_is_not_rounded() {
        let total = item(3.0, 0.1).total();
        assert_eq!(total, 0.1 * 3.0);
        assert_ne!(total, 0.3);
    }

    #[test]
    fn test_strings_for_widget() {
        let widget = BillableItem {
            quantity: 3.0,
            description: "Widget".to_string(),
            unit_price: 19.999,
            currency: "USD".to_string(),
        };
        assert_eq!(
            widget.strings(),
            ["3.00", "Widget", "USD 20.00", "USD 60.00"]
        );
    }

    #[test]
    fn test_strings_group_thousands_in_amounts_only() {
        let strings = item(1500.0, 1234.5).strings();
        assert_eq!(strings[0], "1500.00");
        assert_eq!(strings[2], "EUR 1,234.50");
        assert_eq!(strings[3], "EUR 1,851,750.00");
    }

    #[test]
    fn test_strings_keep_description_verbatim() {
        let mut line = item(1.0, 1.0);
        line.description = "  Design & build, phase 2  ".to_string();
        assert_eq!(line.strings()[1], "  Design & build, phase 2  ");
    }

    #[test]
    fn test_strings_with_negative_price() {
        let strings = item(2.0, -42.1).strings();
        assert_eq!(strings[2], "EUR -42.10");
        assert_eq!(strings[3], "EUR -84.20");
    }

    #[test]
    fn test_strings_do_not_mutate() {
        let line = item(2.0, 10.0);
        let before = line.clone();
        let _ = line.strings();
        assert_eq!(line, before);
    }

    #[test]
    fn test_deserialize_billable_item() {
        let yaml = r#"
quantity: 2.5
description: Hosting
unit_price: 99.99
currency: USD
"#;
        let line: BillableItem = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(line.quantity, 2.5);
        assert_eq!(line.description, "Hosting");
        assert_eq!(line.unit_price, 99.99);
        assert_eq!(line.currency, "USD");
    }

    #[test]
    fn test_deserialize_integer_quantity() {
        let line: BillableItem = serde_yaml::from_str("quantity: 4\nunit_price: 10").unwrap();
        assert_eq!(line.quantity, 4.0);
        assert_eq!(line.unit_price, 10.0);
        assert_eq!(line.description, "");
    }

    proptest! {
        #[test]
        fn total_equals_product(quantity in 0.0f64..10_000.0, unit_price in -1e6f64..1e6) {
            let line = item(quantity, unit_price);
            prop_assert_eq!(line.total(), unit_price * quantity);
        }

        #[test]
        fn quantity_cell_has_two_decimals(quantity in 0.0f64..1e9) {
            let cell = item(quantity, 1.0).strings()[0].clone();
            let (_, fraction) = cell.split_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 2);
            prop_assert!(!cell.contains(','));
        }
    }
}
