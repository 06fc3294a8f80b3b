//! Raw input → feature vector.

use tracing::debug;

use crate::ValidationError;
use crate::types::{FeatureVector, RawInput};

const AGE_RANGE: (u32, u32) = (18, 100);
const NUM_LOANS_RANGE: (u32, u32) = (0, 10);
const INTEREST_RATE_RANGE: (u32, u32) = (0, 100);
const DELAYED_PAYMENTS_RANGE: (u32, u32) = (0, 50);

/// Validate a raw form and encode it into the model's feature order.
///
/// Credit mix is replaced by its ordinal code (Bad=0, Standard=1, Good=2).
/// Fails on the first missing, unset or out-of-range field; no partial
/// vector is produced.
pub fn encode(raw: &RawInput) -> Result<FeatureVector, ValidationError> {
    let age = bounded("age", raw.age, AGE_RANGE)?;
    let monthly_income = amount("monthly_income", raw.monthly_income)?;
    let loan_amount = amount("loan_amount", raw.loan_amount)?;
    let num_loans = bounded("num_loans", raw.num_loans, NUM_LOANS_RANGE)?;
    let credit_mix = raw.credit_mix.code().ok_or(ValidationError::CreditMixUnset)?;
    let outstanding_debt = amount("outstanding_debt", raw.outstanding_debt)?;
    let interest_rate = bounded("interest_rate", raw.interest_rate, INTEREST_RATE_RANGE)?;
    let delayed_payments = bounded(
        "delayed_payments",
        raw.delayed_payments,
        DELAYED_PAYMENTS_RANGE,
    )?;

    let features = FeatureVector::new([
        f64::from(age),
        monthly_income,
        loan_amount,
        f64::from(num_loans),
        f64::from(credit_mix),
        outstanding_debt,
        f64::from(interest_rate),
        f64::from(delayed_payments),
    ]);
    debug!(?features, "encoded applicant");
    Ok(features)
}

fn bounded(
    field: &'static str,
    value: Option<u32>,
    (min, max): (u32, u32),
) -> Result<u32, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

fn amount(field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    // Written so NaN fails too.
    if !(value.is_finite() && value >= 0.0) {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(value)
}
