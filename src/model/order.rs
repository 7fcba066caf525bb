use serde::Deserialize;

use super::address::AddressRecord;

/// One row of a TCGplayer shipping export
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Address1")]
    pub address1: String,
    #[serde(rename = "Address2", default)]
    pub address2: Option<String>,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "PostalCode")]
    pub postal_code: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Order #", default)]
    pub order_id: String,
    #[serde(rename = "Value Of Products")]
    pub value_of_products: f64,
    #[serde(rename = "Shipping Fee Paid")]
    pub shipping_fee_paid: f64,
}

impl Order {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Product value plus shipping paid by the buyer
    pub fn full_cost(&self) -> f64 {
        self.value_of_products + self.shipping_fee_paid
    }

    pub fn address2(&self) -> &str {
        self.address2.as_deref().unwrap_or("")
    }

    pub fn to_address(&self) -> AddressRecord {
        AddressRecord::new(
            self.full_name(),
            self.address1.as_str(),
            self.address2(),
            self.city.as_str(),
            self.state.as_str(),
            self.postal_code.as_str(),
        )
    }
}
