//! Carrier webservice boundary.
//!
//! This module maps a finished [`ShipmentRequest`](crate::domain::ShipmentRequest)
//! onto the carrier's wire schema and defines the transport seam the SOAP
//! client plugs into.
//!
//! Key characteristics of the carrier API:
//! - One unit system per shipment: `SI` (KG/CM) or `SU` (LB/IN)
//! - Addresses carry at most three street lines
//! - Responses report failures as notifications with a non-zero code

mod config;
mod convert;
mod error;
mod request;
mod transport;
mod types;

pub use config::{ConversionConfig, LabelType};
pub use convert::convert_shipment_request;
pub use error::{ConversionError, WebserviceError};
pub use request::{
    Address, Commodities, Contact, DangerousGoods, DangerousGoodsContent, DropOffType,
    InternationalDetail, PackageDimensions, RequestedPackage, RequestedPackages,
    RequestedShipment, Ship, ShipParty, ShipmentInfo, SpecialService, SpecialServices,
    UnitOfMeasurement,
};
pub use transport::{MockTransport, ShipmentTransport};
pub use types::{Notification, PackageResult, ShipmentResponse};
