/// Format an amount as US dollars: `$` prefix, comma thousands separators, two fraction digits,
/// halves rounded away from zero. Non-numeric amounts print as `$NaN`.
pub fn format_usd(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount.is_sign_negative() && amount != 0.0 {
        "-"
    } else {
        ""
    };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let cents = round_to_cents(&amount.abs().to_string());
    let cents = format!("{cents:0>3}");
    let (whole, fraction) = cents.split_at(cents.len() - 2);

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{fraction}")
}

/// Round the shortest decimal rendition of a non-negative amount to whole cents. Working on the
/// digits keeps `1.005` a half cent instead of the `1.00499..` its binary value holds.
fn round_to_cents(decimal: &str) -> String {
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut digits: Vec<u8> = whole.bytes().collect();
    digits.extend(fraction.bytes().chain(std::iter::repeat(b'0')).take(2));

    if fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        let mut index = digits.len();
        loop {
            if index == 0 {
                digits.insert(0, b'1');
                break;
            }
            index -= 1;
            if digits[index] == b'9' {
                digits[index] = b'0';
            } else {
                digits[index] += 1;
                break;
            }
        }
    }

    let cents: String = digits.into_iter().map(char::from).collect();
    let trimmed = cents.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
