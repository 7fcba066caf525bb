use serde::Serialize;

use super::order::Order;

/// Package dimensions attached to every carrier import row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageDimensions {
    pub ounces: u32,
    pub length: u32,
    pub width: u32,
    pub height: f32,
}

/// Standard toploader envelope: 3 oz, 7 x 5 x 0.5 in
pub const STANDARD_PACKAGE: PackageDimensions = PackageDimensions {
    ounces: 3,
    length: 7,
    width: 5,
    height: 0.5,
};

/// One row of a PirateShip import CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address 1")]
    pub address1: String,
    #[serde(rename = "Address 2")]
    pub address2: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Zipcode")]
    pub zipcode: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Order Id")]
    pub order_id: String,
    #[serde(rename = "Ounces")]
    pub ounces: u32,
    #[serde(rename = "Length")]
    pub length: u32,
    #[serde(rename = "Width")]
    pub width: u32,
    #[serde(rename = "Height")]
    pub height: f32,
}

impl ShippingRecord {
    pub fn from_order(order: &Order, package: PackageDimensions) -> Self {
        Self {
            name: order.full_name(),
            address1: order.address1.clone(),
            address2: order.address2().to_string(),
            city: order.city.clone(),
            state: order.state.clone(),
            zipcode: order.postal_code.clone(),
            country: order.country.clone(),
            order_id: order.order_id.clone(),
            ounces: package.ounces,
            length: package.length,
            width: package.width,
            height: package.height,
        }
    }
}

impl From<&Order> for ShippingRecord {
    fn from(order: &Order) -> Self {
        Self::from_order(order, STANDARD_PACKAGE)
    }
}
