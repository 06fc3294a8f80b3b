//! Risk class table.
//!
//! The table is an explicit ordered list, lowest severity first. Rank and
//! probability pairing both index into it directly.

use serde::{Deserialize, Serialize};

use crate::{CreditScoreError, Result};

/// A single risk category and its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskClass {
    /// Label as emitted by the classifier (e.g. "Very Good").
    pub name: String,
    /// Display color tag.
    pub color: String,
    /// Qualitative description shown alongside the label.
    pub description: String,
}

impl RiskClass {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
        }
    }
}

/// Ordered, non-empty set of risk classes with unique names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RiskClass>", into = "Vec<RiskClass>")]
pub struct ClassOrder(Vec<RiskClass>);

impl ClassOrder {
    /// Build a class table, rejecting empty tables and duplicate names.
    pub fn new(classes: Vec<RiskClass>) -> Result<Self> {
        if classes.is_empty() {
            return Err(CreditScoreError::Configuration(
                "class table must contain at least one class".to_string(),
            ));
        }
        for (i, class) in classes.iter().enumerate() {
            if classes[..i].iter().any(|c| c.name == class.name) {
                return Err(CreditScoreError::Configuration(format!(
                    "duplicate class name in class table: {:?}",
                    class.name
                )));
            }
        }
        Ok(Self(classes))
    }

    /// The five-tier table: Poor, Standard, Good, Very Good, Excellent.
    pub fn standard() -> Self {
        Self(vec![
            RiskClass::new(
                "Poor",
                "red",
                "High risk. Repayment history or debt load suggests a strong chance of default.",
            ),
            RiskClass::new(
                "Standard",
                "orange",
                "Elevated risk. Credit is likely available but on restrictive terms.",
            ),
            RiskClass::new(
                "Good",
                "yellow",
                "Moderate risk. A reliable borrower with some room for improvement.",
            ),
            RiskClass::new(
                "Very Good",
                "lightgreen",
                "Low risk. Consistent repayment and a healthy debt-to-income ratio.",
            ),
            RiskClass::new(
                "Excellent",
                "green",
                "Minimal risk. Eligible for the most favourable rates.",
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zero-based position of `label`, if known.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|c| c.name == label)
    }

    /// Zero-based position of `label` together with its class.
    pub fn find(&self, label: &str) -> Option<(usize, &RiskClass)> {
        self.0.iter().enumerate().find(|(_, c)| c.name == label)
    }

    pub fn get(&self, index: usize) -> Option<&RiskClass> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RiskClass> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.name.as_str())
    }
}

impl Default for ClassOrder {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<RiskClass>> for ClassOrder {
    type Error = CreditScoreError;

    fn try_from(classes: Vec<RiskClass>) -> Result<Self> {
        Self::new(classes)
    }
}

impl From<ClassOrder> for Vec<RiskClass> {
    fn from(order: ClassOrder) -> Self {
        order.0
    }
}

impl<'a> IntoIterator for &'a ClassOrder {
    type Item = &'a RiskClass;
    type IntoIter = std::slice::Iter<'a, RiskClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
