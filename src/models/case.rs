use serde::{Deserialize, Serialize};

/// How a purchased case is packaged, e.g. "40 lb" or "120 each / 50 lb".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDescriptor {
    pub quantity: f64,

    pub unit: String,

    /// Sold both by count and by weight (or any two unit systems).
    #[serde(default)]
    pub is_dual_unit: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_quantity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CaseDescriptor {
    pub fn new(quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
            is_dual_unit: false,
            secondary_quantity: None,
            secondary_unit: None,
            description: None,
        }
    }

    /// Mark the case as dual-unit with a second quantity/unit view.
    pub fn with_secondary(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.is_dual_unit = true;
        self.secondary_quantity = Some(quantity);
        self.secondary_unit = Some(unit.into());
        self
    }

    /// Positive finite quantity and a non-empty unit.
    pub fn is_valid(&self) -> bool {
        self.quantity.is_finite() && self.quantity > 0.0 && !self.unit.trim().is_empty()
    }

    /// Secondary quantity when the dual-unit view applies.
    pub fn dual_quantity(&self) -> Option<f64> {
        if !self.is_dual_unit {
            return None;
        }
        self.secondary_quantity
            .filter(|q| q.is_finite() && *q > 0.0)
    }

    /// The secondary view as a case of its own, sharing the same case price.
    pub fn secondary_case(&self) -> Option<CaseDescriptor> {
        let quantity = self.dual_quantity()?;
        let unit = self.secondary_unit.clone()?;
        Some(CaseDescriptor::new(quantity, unit))
    }

    /// Human-readable packaging, e.g. "40 lb" or "120 each / 50 lb".
    pub fn summary(&self) -> String {
        let mut text = format!("{} {}", self.quantity, self.unit);
        if let (Some(quantity), Some(unit)) = (self.dual_quantity(), &self.secondary_unit) {
            text.push_str(&format!(" / {} {}", quantity, unit));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(CaseDescriptor::new(40.0, "lb").is_valid());
        assert!(!CaseDescriptor::new(0.0, "lb").is_valid());
        assert!(!CaseDescriptor::new(-1.0, "lb").is_valid());
        assert!(!CaseDescriptor::new(f64::NAN, "lb").is_valid());
        assert!(!CaseDescriptor::new(4.0, "  ").is_valid());
    }

    #[test]
    fn test_dual_quantity_requires_flag() {
        let mut case = CaseDescriptor::new(40.0, "each");
        case.secondary_quantity = Some(50.0);
        assert_eq!(case.dual_quantity(), None);

        let case = CaseDescriptor::new(40.0, "each").with_secondary(50.0, "lb");
        assert_eq!(case.dual_quantity(), Some(50.0));
        assert_eq!(case.summary(), "40 each / 50 lb");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"quantity": 40, "unit": "each", "isDualUnit": true, "secondaryQuantity": 50, "secondaryUnit": "lb"}"#;
        let case: CaseDescriptor = serde_json::from_str(json).unwrap();
        assert!(case.is_dual_unit);
        assert_eq!(case.secondary_unit.as_deref(), Some("lb"));
    }
}
