//! Units of measure and normalization into the carrier's canonical systems.
//!
//! The carrier accepts weights in kilograms or pounds and dimensions in
//! centimeters or inches. Callers supply a wider range of units; these
//! functions convert them without ever crossing between metric and imperial.

use std::fmt;

/// Which kind of quantity a unit string was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Weight,
    Dimension,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Weight => f.write_str("weight"),
            UnitKind::Dimension => f.write_str("dimension"),
        }
    }
}

/// Error returned when a unit-of-measure string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} unit of measurement: {unit:?}")]
pub struct InvalidUnit {
    kind: UnitKind,
    unit: String,
}

impl InvalidUnit {
    /// The kind of quantity the unit was supplied for.
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// The rejected unit string, as supplied by the caller.
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// The two unit systems the carrier accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Kilograms and centimeters.
    Metric,
    /// Pounds and inches.
    Imperial,
}

/// Canonical weight unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUom {
    Kilogram,
    Pound,
}

impl WeightUom {
    /// Carrier code for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUom::Kilogram => "KG",
            WeightUom::Pound => "LB",
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        match self {
            WeightUom::Kilogram => UnitSystem::Metric,
            WeightUom::Pound => UnitSystem::Imperial,
        }
    }
}

impl fmt::Display for WeightUom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical dimension unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionUom {
    Centimeter,
    Inch,
}

impl DimensionUom {
    /// Carrier code for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionUom::Centimeter => "CM",
            DimensionUom::Inch => "IN",
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        match self {
            DimensionUom::Centimeter => UnitSystem::Metric,
            DimensionUom::Inch => UnitSystem::Imperial,
        }
    }
}

impl fmt::Display for DimensionUom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weight expressed in a canonical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    pub value: f64,
    pub uom: WeightUom,
}

/// Package dimensions expressed in a canonical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub uom: DimensionUom,
}

/// Normalize a weight to kilograms or pounds.
///
/// The unit is matched ASCII case-insensitively. Grams become kilograms and ounces
/// become pounds; kilograms and pounds pass through unchanged.
///
/// # Examples
///
/// ```
/// use express_shipment::domain::{WeightUom, normalize_weight};
///
/// let w = normalize_weight(500.0, "g").unwrap();
/// assert_eq!(w.value, 0.5);
/// assert_eq!(w.uom, WeightUom::Kilogram);
///
/// assert!(normalize_weight(1.0, "STONE").is_err());
/// ```
pub fn normalize_weight(weight: f64, uom: &str) -> Result<Weight, InvalidUnit> {
    let (value, uom) = match uom.to_ascii_uppercase().as_str() {
        "KG" => (weight, WeightUom::Kilogram),
        "LB" => (weight, WeightUom::Pound),
        "G" => (weight / 1000.0, WeightUom::Kilogram),
        "OZ" => (weight / 16.0, WeightUom::Pound),
        _ => {
            return Err(InvalidUnit {
                kind: UnitKind::Weight,
                unit: uom.to_string(),
            });
        }
    };

    Ok(Weight { value, uom })
}

/// Normalize a (length, width, height) triple to centimeters or inches.
///
/// The same factor is applied to every axis. Millimeters and meters become
/// centimeters; feet and yards become inches.
pub fn normalize_dimensions(
    length: f64,
    width: f64,
    height: f64,
    uom: &str,
) -> Result<Dimensions, InvalidUnit> {
    let (scale, uom): (fn(f64) -> f64, DimensionUom) = match uom.to_ascii_uppercase().as_str() {
        "CM" => (|v: f64| v, DimensionUom::Centimeter),
        "IN" => (|v: f64| v, DimensionUom::Inch),
        "MM" => (|v: f64| v / 10.0, DimensionUom::Centimeter),
        "M" => (|v: f64| v * 100.0, DimensionUom::Centimeter),
        "FT" => (|v: f64| v * 12.0, DimensionUom::Inch),
        "YD" => (|v: f64| v * 36.0, DimensionUom::Inch),
        _ => {
            return Err(InvalidUnit {
                kind: UnitKind::Dimension,
                unit: uom.to_string(),
            });
        }
    };

    Ok(Dimensions {
        length: scale(length),
        width: scale(width),
        height: scale(height),
        uom,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    proptest! {
        /// Grams convert to the same mass in kilograms
        #[test]
        fn grams_preserve_mass(w in 0.001f64..1_000_000.0) {
            let n = normalize_weight(w, "G").unwrap();
            prop_assert_eq!(n.uom, WeightUom::Kilogram);
            prop_assert!(close(n.value * 1000.0, w));
        }

        /// Ounces convert to the same mass in pounds
        #[test]
        fn ounces_preserve_mass(w in 0.001f64..1_000_000.0) {
            let n = normalize_weight(w, "OZ").unwrap();
            prop_assert_eq!(n.uom, WeightUom::Pound);
            prop_assert!(close(n.value * 16.0, w));
        }

        /// Every axis gets the same scaling factor
        #[test]
        fn axes_scale_uniformly(
            l in 0.001f64..10_000.0,
            w in 0.001f64..10_000.0,
            h in 0.001f64..10_000.0,
            (unit, factor) in prop_oneof![
                Just(("CM", 1.0)),
                Just(("IN", 1.0)),
                Just(("MM", 0.1)),
                Just(("M", 100.0)),
                Just(("FT", 12.0)),
                Just(("YD", 36.0)),
            ],
        ) {
            let d = normalize_dimensions(l, w, h, unit).unwrap();
            prop_assert!(close(d.length, l * factor));
            prop_assert!(close(d.width, w * factor));
            prop_assert!(close(d.height, h * factor));
        }

        /// Lowercase input behaves exactly like uppercase input
        #[test]
        fn case_insensitive(
            w in 0.001f64..1_000.0,
            unit in prop_oneof![Just("KG"), Just("LB"), Just("G"), Just("OZ")],
        ) {
            let upper = normalize_weight(w, unit).unwrap();
            let lower = normalize_weight(w, &unit.to_lowercase()).unwrap();
            prop_assert_eq!(upper, lower);
        }

        /// Alphabetic strings outside the known set are rejected
        #[test]
        fn unknown_units_rejected(s in "[A-Z]{3,8}") {
            prop_assume!(!["KG", "LB", "G", "OZ"].contains(&s.as_str()));
            prop_assert!(normalize_weight(1.0, &s).is_err());
        }
    }
}
