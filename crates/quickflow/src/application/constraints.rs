//! Native form constraints: the checks an input control enforces before a form may submit.
//!
//! Nothing here inspects the business meaning of a value. A credit score of `300` passes as
//! readily as `850`; only the bounds, step and shape declared by the field catalog apply.

use super::catalog::{FormField, InputKind, NumberBounds};
use super::numeric::display_number;

/// Tolerance when comparing a value against its step grid.
const STEP_EPSILON: f64 = 1e-7;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstraintViolation {
    #[error("Please fill out this field.")]
    ValueMissing,
    #[error("Please select an item in the list.")]
    SelectionMissing,
    #[error("Please enter a number.")]
    BadNumber,
    #[error("Value must be greater than or equal to {}.", bound(.min))]
    RangeUnderflow { min: f64 },
    #[error("Value must be less than or equal to {}.", bound(.max))]
    RangeOverflow { max: f64 },
    #[error(
        "Please enter a valid value. The two nearest valid values are {} and {}.",
        bound(.lower),
        bound(.upper)
    )]
    StepMismatch { lower: f64, upper: f64 },
    #[error("Please include an '@' in the email address. '{value}' is missing an '@'.")]
    EmailMissingAt { value: String },
    #[error("Please enter a part followed by '@'. '{value}' is incomplete.")]
    EmailMissingLocalPart { value: String },
    #[error("Please enter a part following '@'. '{value}' is incomplete.")]
    EmailMissingDomain { value: String },
}

/// Check a raw field value against the constraints declared for `field`.
pub fn check(field: FormField, raw: &str) -> Result<(), ConstraintViolation> {
    match field.kind() {
        InputKind::Select(options) => {
            if options.iter().any(|option| *option == raw) {
                Ok(())
            } else {
                Err(ConstraintViolation::SelectionMissing)
            }
        }
        _ if raw.is_empty() => Err(ConstraintViolation::ValueMissing),
        InputKind::Number(bounds) => check_number(raw, bounds),
        InputKind::Email => check_email(raw),
        InputKind::Text | InputKind::Tel => Ok(()),
    }
}

fn check_number(raw: &str, bounds: NumberBounds) -> Result<(), ConstraintViolation> {
    let value = Some(raw)
        .filter(|raw| is_floating_point_number(raw))
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or(ConstraintViolation::BadNumber)?;

    if let Some(min) = bounds.min {
        if value < min {
            return Err(ConstraintViolation::RangeUnderflow { min });
        }
    }
    if let Some(max) = bounds.max {
        if value > max {
            return Err(ConstraintViolation::RangeOverflow { max });
        }
    }

    let base = bounds.min.unwrap_or(0.0);
    let steps = (value - base) / bounds.step;
    if (steps - steps.round()).abs() > STEP_EPSILON {
        let decimals = step_decimals(bounds.step);
        let lower = round_to(base + steps.floor() * bounds.step, decimals);
        let upper = round_to(lower + bounds.step, decimals);
        return Err(ConstraintViolation::StepMismatch { lower, upper });
    }

    Ok(())
}

/// Number input grammar: optional `-`, digits with an optional fraction (or a bare fraction),
/// optional exponent. No leading `+`, no trailing `.`, no `inf`/`NaN`.
fn is_floating_point_number(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let mantissa_ok = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole.is_empty() || all_digits(whole)) && all_digits(fraction),
        None => all_digits(mantissa),
    };
    let exponent_ok = exponent.map_or(true, |exponent| {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

fn check_email(raw: &str) -> Result<(), ConstraintViolation> {
    let Some((local, domain)) = raw.split_once('@') else {
        return Err(ConstraintViolation::EmailMissingAt {
            value: raw.to_string(),
        });
    };
    if local.is_empty() {
        return Err(ConstraintViolation::EmailMissingLocalPart {
            value: raw.to_string(),
        });
    }
    if domain.is_empty() {
        return Err(ConstraintViolation::EmailMissingDomain {
            value: raw.to_string(),
        });
    }
    Ok(())
}

fn bound(value: &f64) -> String {
    display_number(*value)
}

fn step_decimals(step: f64) -> i32 {
    display_number(step)
        .split_once('.')
        .map(|(_, fraction)| fraction.len() as i32)
        .unwrap_or(0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
