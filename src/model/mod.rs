pub mod address;
pub mod order;
pub mod shipping;

pub use address::AddressRecord;
pub use order::Order;
pub use shipping::{PackageDimensions, ShippingRecord};
