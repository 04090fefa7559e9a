//! Transport seam for submitting shipment requests.
//!
//! The SOAP client itself lives outside this crate. Anything that can turn a
//! [`ShipmentRequest`] into a [`ShipmentResponse`] implements
//! [`ShipmentTransport`]; [`MockTransport`] does so without network access.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::ShipmentRequest;

use super::config::ConversionConfig;
use super::convert::convert_shipment_request;
use super::error::WebserviceError;
use super::types::ShipmentResponse;

/// Submits shipment requests to the carrier.
pub trait ShipmentTransport {
    /// Create a shipment.
    ///
    /// Implementations return [`WebserviceError::Rejected`] when the carrier
    /// answers with an error notification.
    fn create_shipment(
        &self,
        request: &ShipmentRequest,
    ) -> Result<ShipmentResponse, WebserviceError>;
}

/// Mock transport that serializes requests and replays a canned response.
///
/// Useful for testing callers without carrier credentials. Every request body
/// it receives is kept and can be inspected with
/// [`sent_requests`](Self::sent_requests).
#[derive(Debug)]
pub struct MockTransport {
    config: ConversionConfig,
    response_json: String,
    sent: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a mock that answers every request with `response_json`.
    pub fn new(config: ConversionConfig, response_json: impl Into<String>) -> Self {
        Self {
            config,
            response_json: response_json.into(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// JSON bodies of all requests sent so far, oldest first.
    pub fn sent_requests(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ShipmentTransport for MockTransport {
    fn create_shipment(
        &self,
        request: &ShipmentRequest,
    ) -> Result<ShipmentResponse, WebserviceError> {
        let wire = convert_shipment_request(request, &self.config)?;
        let body = serde_json::to_string(&wire)?;

        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(body);

        let response: ShipmentResponse = serde_json::from_str(&self.response_json)?;

        if let Some(error) = response.error_notification() {
            return Err(WebserviceError::Rejected {
                code: error.code,
                message: error.message.clone().unwrap_or_default(),
            });
        }

        debug!(
            awb = response.shipment_identification_number.as_deref(),
            "mock shipment created"
        );

        Ok(response)
    }
}
