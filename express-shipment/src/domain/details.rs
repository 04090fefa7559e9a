//! Shipment-level details.

use chrono::{DateTime, Utc};

/// General information about a shipment.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentDetails {
    unscheduled_pickup: bool,
    terms_of_trade: String,
    content_type: String,
    ready_at_timestamp: i64,
    number_of_pieces: u32,
    currency_code: String,
    description: String,
    service_type: String,
}

impl ShipmentDetails {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        unscheduled_pickup: bool,
        terms_of_trade: impl Into<String>,
        content_type: impl Into<String>,
        ready_at_timestamp: i64,
        number_of_pieces: u32,
        currency_code: impl Into<String>,
        description: impl Into<String>,
        service_type: impl Into<String>,
    ) -> Self {
        Self {
            unscheduled_pickup,
            terms_of_trade: terms_of_trade.into(),
            content_type: content_type.into(),
            ready_at_timestamp,
            number_of_pieces,
            currency_code: currency_code.into(),
            description: description.into(),
            service_type: service_type.into(),
        }
    }

    /// Whether a courier must be requested (no regular pickup is scheduled).
    pub fn is_unscheduled_pickup(&self) -> bool {
        self.unscheduled_pickup
    }

    pub fn terms_of_trade(&self) -> &str {
        &self.terms_of_trade
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Ready-at time in seconds since the Unix epoch.
    pub fn ready_at_timestamp(&self) -> i64 {
        self.ready_at_timestamp
    }

    /// Ready-at time as a UTC datetime.
    ///
    /// Returns `None` if the timestamp is outside chrono's representable range.
    pub fn ready_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.ready_at_timestamp, 0)
    }

    pub fn number_of_pieces(&self) -> u32 {
        self.number_of_pieces
    }

    /// ISO 4217 currency code.
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }
}
