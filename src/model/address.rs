use serde::Deserialize;

/// Content of a single mailing label.
///
/// The postal code is kept as text so leading zeros survive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub name: String,
    #[serde(rename = "addr1")]
    pub address_line1: String,
    #[serde(rename = "addr2")]
    pub address_line2: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "zipcode")]
    pub postal_code: String,
}

impl AddressRecord {
    pub fn new(
        name: impl Into<String>,
        address_line1: impl Into<String>,
        address_line2: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address_line1: address_line1.into(),
            address_line2: address_line2.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
        }
    }

    /// "City, ST 12345"
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.postal_code)
    }

    /// Text lines printed on the label, top to bottom
    ///
    /// The second address line is omitted when empty, so a label has
    /// either 3 or 4 lines.
    pub fn label_lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone(), self.address_line1.clone()];
        if !self.address_line2.is_empty() {
            lines.push(self.address_line2.clone());
        }
        lines.push(self.city_line());
        lines
    }
}
