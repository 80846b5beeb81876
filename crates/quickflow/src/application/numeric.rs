use serde::{Serialize, Serializer};

/// Largest integer a JSON consumer can round-trip through an IEEE double.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Numeric form value after coercion. May hold `NaN` when the text had no numeric prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormNumber(pub f64);

impl Serialize for FormNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.0;
        if !value.is_finite() {
            serializer.serialize_none()
        } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Integer coercion with lenient prefix semantics: leading whitespace is skipped, an optional
/// sign and `0x` prefix are honoured, and parsing stops at the first non-digit.
pub fn parse_int_prefix(raw: &str) -> f64 {
    let (negative, rest) = split_sign(raw.trim_start());
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value = 0.0_f64;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|ch| ch.to_digit(radix)) {
        value = value * f64::from(radix) + f64::from(digit);
        seen_digit = true;
    }

    if !seen_digit {
        return f64::NAN;
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Decimal coercion with lenient prefix semantics: the longest prefix forming a decimal literal
/// (optional fraction and exponent) is parsed, `Infinity` is recognised, anything else is `NaN`.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = split_sign(trimmed);

    if rest.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut mantissa_digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut cursor = end + 1;
        let mut fraction_digits = 0;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
            fraction_digits += 1;
        }
        if mantissa_digits + fraction_digits > 0 {
            end = cursor;
            mantissa_digits += fraction_digits;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    let literal = rest[..end].trim_end_matches('.');
    let literal = if literal.starts_with('.') {
        format!("0{literal}")
    } else {
        literal.to_string()
    };

    match literal.parse::<f64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// Renders a number the way a browser prints it: whole numbers without a fraction, `NaN` and
/// `Infinity` spelled out.
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}
