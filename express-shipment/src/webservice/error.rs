//! Webservice error types.

/// Error converting a shipment request into wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Packages don't share one unit system
    #[error("packages must all use either KG/CM or LB/IN")]
    MixedUnitSystems,

    /// The carrier accepts at most three street lines per address
    #[error("{party} has {count} street lines, at most 3 are supported")]
    TooManyStreetLines { party: &'static str, count: usize },

    /// Ready-at timestamp can't be represented as a date
    #[error("ready-at timestamp out of range: {0}")]
    InvalidTimestamp(i64),
}

/// Errors from submitting a shipment request.
#[derive(Debug, thiserror::Error)]
pub enum WebserviceError {
    /// Request could not be expressed in the wire schema
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The carrier answered with an error notification
    #[error("shipment rejected ({code}): {message}")]
    Rejected { code: i32, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConversionError::TooManyStreetLines {
            party: "shipper",
            count: 4,
        };
        assert_eq!(
            err.to_string(),
            "shipper has 4 street lines, at most 3 are supported"
        );

        let err = WebserviceError::Rejected {
            code: 1001,
            message: "The requested product cannot be shipped".into(),
        };
        assert_eq!(
            err.to_string(),
            "shipment rejected (1001): The requested product cannot be shipped"
        );

        let err = WebserviceError::from(ConversionError::MixedUnitSystems);
        assert!(err.to_string().starts_with("conversion error:"));
    }
}
