//! Declared-value insurance.

/// Insurance for the declared value of a shipment.
#[derive(Debug, Clone, PartialEq)]
pub struct Insurance {
    value: f64,
    currency_code: String,
}

impl Insurance {
    pub fn new(value: f64, currency_code: impl Into<String>) -> Self {
        Self {
            value,
            currency_code: currency_code.into(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }
}
