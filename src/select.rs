//! Order selection by value threshold
//!
//! Orders below the threshold ship as plain letters and get a printed
//! label; orders at or above it go through the carrier import.

use crate::model::{AddressRecord, Order, ShippingRecord};

/// Split orders into (low-value, high-value) by total cost
///
/// The two sides are disjoint and keep input order.
pub fn split_orders(orders: &[Order], threshold: f64) -> (Vec<&Order>, Vec<&Order>) {
    orders.iter().partition(|o| o.full_cost() < threshold)
}

/// Label addresses for every order costing less than `threshold`
pub fn select_low_value(orders: &[Order], threshold: f64) -> Vec<AddressRecord> {
    orders
        .iter()
        .filter(|o| o.full_cost() < threshold)
        .map(Order::to_address)
        .collect()
}

/// Carrier import rows for every order costing at least `threshold`
pub fn select_high_value(orders: &[Order], threshold: f64) -> Vec<ShippingRecord> {
    orders
        .iter()
        .filter(|o| o.full_cost() >= threshold)
        .map(ShippingRecord::from)
        .collect()
}
