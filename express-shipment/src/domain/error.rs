//! Domain error types.
//!
//! These errors represent validation failures while assembling a request.
//! They are distinct from conversion and transport errors.

use std::fmt;

use super::units::InvalidUnit;

/// A field group the builder requires before it can produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestField {
    UnscheduledPickup,
    TermsOfTrade,
    ContentType,
    ReadyAtTimestamp,
    NumberOfPieces,
    Currency,
    Description,
    ServiceType,
    PayerAccountNumber,
    Insurance,
    Shipper,
    Recipient,
    Packages,
    DryIce,
}

impl RequestField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestField::UnscheduledPickup => "unscheduled pickup",
            RequestField::TermsOfTrade => "terms of trade",
            RequestField::ContentType => "content type",
            RequestField::ReadyAtTimestamp => "ready-at timestamp",
            RequestField::NumberOfPieces => "number of pieces",
            RequestField::Currency => "currency",
            RequestField::Description => "description",
            RequestField::ServiceType => "service type",
            RequestField::PayerAccountNumber => "payer account number",
            RequestField::Insurance => "insurance",
            RequestField::Shipper => "shipper",
            RequestField::Recipient => "recipient",
            RequestField::Packages => "packages",
            RequestField::DryIce => "dry ice",
        }
    }
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when building a request with required fields missing.
///
/// Lists every missing field, in declaration order of [`RequestField`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("incomplete shipment request, missing: {}", join(.missing))]
pub struct IncompleteRequest {
    missing: Vec<RequestField>,
}

impl IncompleteRequest {
    pub(crate) fn new(missing: Vec<RequestField>) -> Self {
        Self { missing }
    }

    pub fn missing(&self) -> &[RequestField] {
        &self.missing
    }

    pub fn is_missing(&self, field: RequestField) -> bool {
        self.missing.contains(&field)
    }
}

fn join(fields: &[RequestField]) -> String {
    fields
        .iter()
        .map(RequestField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Any error raised while assembling a shipment request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    InvalidUnit(#[from] InvalidUnit),

    #[error(transparent)]
    IncompleteRequest(#[from] IncompleteRequest),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize_weight;

    #[test]
    fn error_display() {
        let err = IncompleteRequest::new(vec![RequestField::Shipper]);
        assert_eq!(err.to_string(), "incomplete shipment request, missing: shipper");

        let err = IncompleteRequest::new(vec![
            RequestField::PayerAccountNumber,
            RequestField::Packages,
            RequestField::DryIce,
        ]);
        assert_eq!(
            err.to_string(),
            "incomplete shipment request, missing: payer account number, packages, dry ice"
        );
    }

    #[test]
    fn is_missing() {
        let err = IncompleteRequest::new(vec![RequestField::Insurance, RequestField::Recipient]);
        assert!(err.is_missing(RequestField::Insurance));
        assert!(err.is_missing(RequestField::Recipient));
        assert!(!err.is_missing(RequestField::Shipper));
    }

    #[test]
    fn request_error_wraps_both_kinds() {
        let unit = normalize_weight(1.0, "STONE").unwrap_err();
        let err = RequestError::from(unit.clone());
        assert_eq!(err.to_string(), unit.to_string());
        assert!(matches!(err, RequestError::InvalidUnit(_)));

        let incomplete = IncompleteRequest::new(vec![RequestField::DryIce]);
        let err: RequestError = incomplete.into();
        assert!(matches!(err, RequestError::IncompleteRequest(_)));
    }
}
