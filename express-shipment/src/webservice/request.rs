//! Wire values for the carrier's `ShipmentRequest` operation.
//!
//! These types mirror the carrier's schema field-for-field, using its
//! PascalCase names. They are produced by [`convert`](super::convert) and
//! handed to a transport for serialization.

use serde::Serialize;

use super::config::LabelType;

/// Root of the `ShipmentRequest` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedShipment {
    pub shipment_info: ShipmentInfo,
    /// Ready-at time, e.g. `2024-03-15T10:30:00 GMT+00:00`.
    pub ship_timestamp: String,
    /// Terms of trade code.
    pub payment_info: String,
    pub international_detail: InternationalDetail,
    pub ship: Ship,
    pub packages: RequestedPackages,
    pub dangerous_goods: DangerousGoods,
}

/// Whether a courier has to be requested for pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DropOffType {
    RegularPickup,
    RequestCourier,
}

/// Unit system for the whole shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnitOfMeasurement {
    /// KG and CM
    #[serde(rename = "SI")]
    Si,
    /// LB and IN
    #[serde(rename = "SU")]
    Su,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentInfo {
    pub drop_off_type: DropOffType,
    pub service_type: String,
    pub account: String,
    pub currency: String,
    pub unit_of_measurement: UnitOfMeasurement,
    pub label_type: LabelType,
    pub label_template: String,
    pub paperless_trade_enabled: bool,
    pub special_services: SpecialServices,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecialServices {
    pub service: Vec<SpecialService>,
}

/// A value-added service such as insurance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecialService {
    pub service_type: String,
    pub service_value: f64,
    pub currency_code: String,
}

impl SpecialService {
    /// Service code for declared-value insurance.
    pub const INSURANCE: &'static str = "II";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InternationalDetail {
    pub commodities: Commodities,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Commodities {
    pub number_of_pieces: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ship {
    pub shipper: ShipParty,
    pub recipient: ShipParty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipParty {
    pub contact: Contact,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    pub person_name: String,
    pub company_name: String,
    pub phone_number: String,
}

/// A postal address.
///
/// The schema has room for three street lines; the second and third are
/// omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub street_lines: String,
    #[serde(rename = "StreetLines2", skip_serializing_if = "Option::is_none")]
    pub street_lines2: Option<String>,
    #[serde(rename = "StreetLines3", skip_serializing_if = "Option::is_none")]
    pub street_lines3: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedPackages {
    pub requested_packages: Vec<RequestedPackage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestedPackage {
    #[serde(rename = "@number")]
    pub number: u32,
    pub weight: f64,
    /// `KG` or `LB`.
    #[serde(rename = "WeightUOM")]
    pub weight_uom: String,
    pub dimensions: PackageDimensions,
    /// `CM` or `IN`.
    #[serde(rename = "DimensionsUOM")]
    pub dimensions_uom: String,
    pub customer_references: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DangerousGoods {
    pub content: DangerousGoodsContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DangerousGoodsContent {
    #[serde(rename = "ContentID")]
    pub content_id: String,
    #[serde(rename = "DryIceTotalNetWeight")]
    pub dry_ice_total_net_weight: f64,
    #[serde(rename = "UNCode")]
    pub un_code: String,
}
