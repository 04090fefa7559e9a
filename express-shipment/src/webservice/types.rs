//! Carrier response DTOs.
//!
//! These map the parts of the `ShipmentResponse` the library inspects.
//! Fields the carrier may omit are `Option` or default to empty.

use serde::Deserialize;

/// Response to a `ShipmentRequest`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipmentResponse {
    /// Status notifications. Code 0 means success.
    #[serde(rename = "Notification", default)]
    pub notifications: Vec<Notification>,

    /// Air waybill number, present on success.
    #[serde(rename = "ShipmentIdentificationNumber")]
    pub shipment_identification_number: Option<String>,

    /// Per-package results.
    #[serde(rename = "PackagesResult", default)]
    pub packages_result: Vec<PackageResult>,
}

impl ShipmentResponse {
    /// The first notification reporting an error, if any.
    pub fn error_notification(&self) -> Option<&Notification> {
        self.notifications.iter().find(|n| !n.is_success())
    }
}

/// A response notification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notification {
    /// 0 = success, anything else is an error.
    #[serde(rename = "@code")]
    pub code: i32,

    /// Message text, see the carrier's error code list.
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

impl Notification {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Result for one requested package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageResult {
    /// Sequence number of the requested package.
    #[serde(rename = "@number")]
    pub number: u32,

    #[serde(rename = "TrackingNumber")]
    pub tracking_number: String,
}
