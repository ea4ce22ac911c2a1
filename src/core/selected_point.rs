use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::OverlayResult;

/// Capability required from any chart point shown in the overlay box.
///
/// Chart crates implement this on their own point types; the overlay never
/// needs more than a value and an optional label.
pub trait SelectedPoint {
    fn value(&self) -> f64;

    fn point_description(&self) -> Option<&str> {
        None
    }
}

impl<T: SelectedPoint + ?Sized> SelectedPoint for &T {
    fn value(&self) -> f64 {
        (**self).value()
    }

    fn point_description(&self) -> Option<&str> {
        (**self).point_description()
    }
}

impl SelectedPoint for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

/// Ready-made point type for hosts without their own model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayDataPoint {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OverlayDataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn from_decimal(value: Decimal) -> OverlayResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?))
    }
}

impl SelectedPoint for OverlayDataPoint {
    fn value(&self) -> f64 {
        self.value
    }

    fn point_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
