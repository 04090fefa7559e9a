//! The shipment request aggregate.

use super::details::ShipmentDetails;
use super::dry_ice::DryIce;
use super::insurance::Insurance;
use super::package::Package;
use super::party::{Recipient, Shipper};
use super::units::UnitSystem;

/// A complete, validated shipment request ready for transmission.
///
/// Usually produced by [`ShipmentRequestBuilder`](crate::builder::ShipmentRequestBuilder),
/// which guarantees the package list is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRequest {
    shipment_details: ShipmentDetails,
    payer_account_number: String,
    insurance: Insurance,
    shipper: Shipper,
    recipient: Recipient,
    packages: Vec<Package>,
    dry_ice: DryIce,
}

impl ShipmentRequest {
    pub fn new(
        shipment_details: ShipmentDetails,
        payer_account_number: impl Into<String>,
        insurance: Insurance,
        shipper: Shipper,
        recipient: Recipient,
        packages: Vec<Package>,
        dry_ice: DryIce,
    ) -> Self {
        Self {
            shipment_details,
            payer_account_number: payer_account_number.into(),
            insurance,
            shipper,
            recipient,
            packages,
            dry_ice,
        }
    }

    pub fn shipment_details(&self) -> &ShipmentDetails {
        &self.shipment_details
    }

    pub fn payer_account_number(&self) -> &str {
        &self.payer_account_number
    }

    pub fn insurance(&self) -> &Insurance {
        &self.insurance
    }

    pub fn shipper(&self) -> &Shipper {
        &self.shipper
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    /// Packages in the order they were added.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn dry_ice(&self) -> &DryIce {
        &self.dry_ice
    }

    /// The unit system used by every package, if there is exactly one.
    pub fn unit_system(&self) -> Option<UnitSystem> {
        let mut systems = self.packages.iter().map(Package::unit_system);
        let first = systems.next()??;
        systems.all(|s| s == Some(first)).then_some(first)
    }
}
