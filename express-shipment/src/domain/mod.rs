//! Domain types for shipment requests.
//!
//! This module contains the value objects that make up a shipment request,
//! plus the unit normalization that maps caller-supplied units onto the
//! carrier's canonical systems. All types are immutable once constructed.

pub mod codes;
mod details;
mod dry_ice;
mod error;
mod insurance;
mod package;
mod party;
mod request;
mod units;

pub use details::ShipmentDetails;
pub use dry_ice::DryIce;
pub use error::{IncompleteRequest, RequestError, RequestField};
pub use insurance::Insurance;
pub use package::Package;
pub use party::{Party, Recipient, Shipper};
pub use request::ShipmentRequest;
pub use units::{
    DimensionUom, Dimensions, InvalidUnit, UnitKind, UnitSystem, Weight, WeightUom,
    normalize_dimensions, normalize_weight,
};
