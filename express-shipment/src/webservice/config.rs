//! Configuration for converting requests into the carrier's wire schema.

use serde::Serialize;

/// Default label template for thermal/PDF labels.
const DEFAULT_LABEL_TEMPLATE: &str = "ECOM26_84_001";

/// Image format of the shipping label returned by the carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LabelType {
    #[default]
    Pdf,
    Zpl,
    Epl,
    Lp2,
}

/// Options applied when converting a [`ShipmentRequest`](crate::domain::ShipmentRequest)
/// to wire values.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Label image format
    pub label_type: LabelType,
    /// Carrier label template name
    pub label_template: String,
    /// Request paperless trade (electronic customs invoice)
    pub paperless_trade: bool,
}

impl ConversionConfig {
    /// Set the label image format.
    pub fn with_label_type(mut self, label_type: LabelType) -> Self {
        self.label_type = label_type;
        self
    }

    /// Set the label template.
    pub fn with_label_template(mut self, template: impl Into<String>) -> Self {
        self.label_template = template.into();
        self
    }

    /// Enable or disable paperless trade.
    pub fn with_paperless_trade(mut self, enabled: bool) -> Self {
        self.paperless_trade = enabled;
        self
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            label_type: LabelType::Pdf,
            label_template: DEFAULT_LABEL_TEMPLATE.to_string(),
            paperless_trade: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ConversionConfig::default();

        assert_eq!(config.label_type, LabelType::Pdf);
        assert_eq!(config.label_template, "ECOM26_84_001");
        assert!(!config.paperless_trade);
    }

    #[test]
    fn custom_config() {
        let config = ConversionConfig::default()
            .with_label_type(LabelType::Zpl)
            .with_label_template("ECOM26_A6_002")
            .with_paperless_trade(true);

        assert_eq!(config.label_type, LabelType::Zpl);
        assert_eq!(config.label_template, "ECOM26_A6_002");
        assert!(config.paperless_trade);
    }

    #[test]
    fn label_type_codes() {
        assert_eq!(serde_json::to_string(&LabelType::Pdf).unwrap(), "\"PDF\"");
        assert_eq!(serde_json::to_string(&LabelType::Lp2).unwrap(), "\"LP2\"");
    }
}
