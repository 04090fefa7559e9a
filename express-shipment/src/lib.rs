//! Shipment request construction for a parcel-carrier webservice.
//!
//! Collects parties, packages, insurance and dangerous-goods data supplied in
//! arbitrary units, normalizes them to the carrier's unit systems, and
//! produces an immutable request ready for transmission.

pub mod builder;
pub mod domain;
pub mod webservice;
