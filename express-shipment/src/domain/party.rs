//! Shipment parties.

use std::ops::Deref;

/// Contact and address data shared by every shipment party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    country_code: String,
    postal_code: String,
    city: String,
    street_lines: Vec<String>,
    name: String,
    company: String,
    phone: String,
}

impl Party {
    pub fn new(
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        street_lines: Vec<String>,
        name: impl Into<String>,
        company: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            postal_code: postal_code.into(),
            city: city.into(),
            street_lines,
            name: name.into(),
            company: company.into(),
            phone: phone.into(),
        }
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Street lines in the order they were supplied.
    pub fn street_lines(&self) -> &[String] {
        &self.street_lines
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// The party sending the shipment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipper(Party);

impl Shipper {
    pub fn new(party: Party) -> Self {
        Shipper(party)
    }

    pub fn into_party(self) -> Party {
        self.0
    }
}

impl Deref for Shipper {
    type Target = Party;

    fn deref(&self) -> &Party {
        &self.0
    }
}

/// The party receiving the shipment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient(Party);

impl Recipient {
    pub fn new(party: Party) -> Self {
        Recipient(party)
    }

    pub fn into_party(self) -> Party {
        self.0
    }
}

impl Deref for Recipient {
    type Target = Party;

    fn deref(&self) -> &Party {
        &self.0
    }
}
