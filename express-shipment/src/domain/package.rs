//! A single package within a shipment.

use super::units::{Dimensions, UnitSystem, Weight};

/// A package with its weight and dimensions in canonical units.
///
/// Sequence numbers are assigned by the caller and are not checked for
/// uniqueness or contiguity.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    sequence_number: u32,
    weight: Weight,
    dimensions: Dimensions,
    customer_references: String,
}

impl Package {
    pub fn new(
        sequence_number: u32,
        weight: Weight,
        dimensions: Dimensions,
        customer_references: impl Into<String>,
    ) -> Self {
        Self {
            sequence_number,
            weight,
            dimensions,
            customer_references: customer_references.into(),
        }
    }

    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn customer_references(&self) -> &str {
        &self.customer_references
    }

    /// The unit system shared by weight and dimensions, if they agree.
    ///
    /// Normalization keeps each quantity in the system it was supplied in,
    /// so a package weighed in kilograms but measured in inches has no
    /// single system.
    pub fn unit_system(&self) -> Option<UnitSystem> {
        let system = self.weight.uom.unit_system();
        (system == self.dimensions.uom.unit_system()).then_some(system)
    }
}
