//! Dry ice dangerous-goods declaration.

/// A dry ice declaration.
///
/// Required whenever a package uses dry ice as a refrigerant. The content
/// identifier is fixed; only the UN code and the weight vary.
///
/// # Examples
///
/// ```
/// use express_shipment::domain::DryIce;
///
/// let ice = DryIce::new("UN1845", 20.53);
/// assert_eq!(ice.content_id(), DryIce::CONTENT_ID);
/// assert_eq!(ice.un_code(), "UN1845");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DryIce {
    un_code: String,
    weight: f64,
}

impl DryIce {
    /// Carrier content identifier for dry ice.
    pub const CONTENT_ID: &'static str = "901";

    pub fn new(un_code: impl Into<String>, weight: f64) -> Self {
        Self {
            un_code: un_code.into(),
            weight,
        }
    }

    pub fn content_id(&self) -> &'static str {
        Self::CONTENT_ID
    }

    pub fn un_code(&self) -> &str {
        &self.un_code
    }

    /// Net weight of the dry ice.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_are_accessible() {
        let ice = DryIce::new("UN1845", 20.53);
        assert_eq!(ice.content_id(), "901");
        assert_eq!(ice.un_code(), "UN1845");
        assert_eq!(ice.weight(), 20.53);
    }
}
