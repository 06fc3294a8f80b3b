//! Applicant input types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Diversity of the applicant's loan types.
///
/// `Unset` stands in for a form that has not been filled in yet and is
/// rejected by the encoder. Deserializes case-insensitively through
/// [`FromStr`]; `null` becomes `Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<String>")]
pub enum CreditMix {
    Bad,
    Standard,
    Good,
    #[default]
    #[serde(rename = "unset")]
    Unset,
}

impl CreditMix {
    /// Ordinal code fed to the model, or `None` for `Unset`.
    pub fn code(self) -> Option<u8> {
        match self {
            Self::Bad => Some(0),
            Self::Standard => Some(1),
            Self::Good => Some(2),
            Self::Unset => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bad => "Bad",
            Self::Standard => "Standard",
            Self::Good => "Good",
            Self::Unset => "unset",
        }
    }
}

impl fmt::Display for CreditMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditMix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bad" => Ok(Self::Bad),
            "standard" => Ok(Self::Standard),
            "good" => Ok(Self::Good),
            "" | "unset" => Ok(Self::Unset),
            other => Err(format!(
                "unknown credit mix '{other}' (expected bad, standard or good)"
            )),
        }
    }
}

impl TryFrom<Option<String>> for CreditMix {
    type Error = String;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        value.map_or(Ok(Self::Unset), |s| s.parse())
    }
}

/// Raw applicant attributes as collected from a form.
///
/// Every field is optional so that an incomplete form can be represented;
/// [`encode`](crate::encode) rejects anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    /// Age in years (18–100).
    pub age: Option<u32>,
    /// Monthly income.
    pub monthly_income: Option<f64>,
    /// Requested loan amount.
    pub loan_amount: Option<f64>,
    /// Number of active loans (0–10).
    pub num_loans: Option<u32>,
    pub credit_mix: CreditMix,
    /// Outstanding debt.
    pub outstanding_debt: Option<f64>,
    /// Interest rate in percent (0–100).
    pub interest_rate: Option<u32>,
    /// Number of delayed payments (0–50).
    pub delayed_payments: Option<u32>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn monthly_income(mut self, income: f64) -> Self {
        self.monthly_income = Some(income);
        self
    }

    pub fn loan_amount(mut self, amount: f64) -> Self {
        self.loan_amount = Some(amount);
        self
    }

    pub fn num_loans(mut self, count: u32) -> Self {
        self.num_loans = Some(count);
        self
    }

    pub fn credit_mix(mut self, mix: CreditMix) -> Self {
        self.credit_mix = mix;
        self
    }

    pub fn outstanding_debt(mut self, debt: f64) -> Self {
        self.outstanding_debt = Some(debt);
        self
    }

    pub fn interest_rate(mut self, rate: u32) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn delayed_payments(mut self, count: u32) -> Self {
        self.delayed_payments = Some(count);
        self
    }

    /// Overlay the fields that are set in `other` onto `self`.
    pub fn merge(mut self, other: RawInput) -> Self {
        self.age = other.age.or(self.age);
        self.monthly_income = other.monthly_income.or(self.monthly_income);
        self.loan_amount = other.loan_amount.or(self.loan_amount);
        self.num_loans = other.num_loans.or(self.num_loans);
        if other.credit_mix != CreditMix::Unset {
            self.credit_mix = other.credit_mix;
        }
        self.outstanding_debt = other.outstanding_debt.or(self.outstanding_debt);
        self.interest_rate = other.interest_rate.or(self.interest_rate);
        self.delayed_payments = other.delayed_payments.or(self.delayed_payments);
        self
    }
}
