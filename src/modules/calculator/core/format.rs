// Display formatting for calculator numerals.
//
// Purpose
// - Turn any numeric string into a display string of roughly nine characters.
//
// Rules
// - Magnitudes at or above 1e9, or nonzero magnitudes below 1e-6, render as `d.ddddde±N`.
// - Everything else renders as the shortest decimal that round-trips; if that is wider
//   than nine characters it is cut to six significant digits, written in fixed notation.
// - Rounding to a digit count resolves exact ties away from zero.
// - Unparseable or non-finite input renders as "0".
//
// Boundaries
// - Pure functions, no input or output.

const MAX_DISPLAY_LENGTH: usize = 9;
const EXPONENTIAL_FRACTION_DIGITS: usize = 5;
const SIGNIFICANT_DIGITS: usize = 6;
const UPPER_PLAIN_BOUND: f64 = 1e9;
const LOWER_PLAIN_BOUND: f64 = 1e-6;

/// Parses a decimal numeral, rejecting anything that is not a finite number.
pub fn parse_numeral(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Renders a number with the shortest digits that round-trip.
///
/// Plain decimal notation is used for magnitudes in `[1e-6, 1e21)`, exponent notation
/// (`1.5e-7`, `1e+21`) outside of it. Negative zero renders as `"0"`.
pub fn number_to_string(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if number == 0.0 {
        return "0".to_string();
    }
    if (LOWER_PLAIN_BOUND..1e21).contains(&number.abs()) {
        format!("{number}")
    } else {
        with_signed_exponent(format!("{number:e}"))
    }
}

pub fn format_number(value: &str) -> String {
    if value == "0" {
        return "0".to_string();
    }
    let Some(number) = parse_numeral(value) else {
        return "0".to_string();
    };

    if needs_exponent(number) {
        let exponential = to_exponential(number, EXPONENTIAL_FRACTION_DIGITS);
        // rounding the mantissa can carry a value just below 1e-6 back into plain range
        if parse_numeral(&exponential).is_none_or(needs_exponent) {
            return exponential;
        }
    }

    let formatted = number_to_string(number);
    if formatted.len() <= MAX_DISPLAY_LENGTH {
        return formatted;
    }

    let significant = strip_trailing_zeros(&to_significant_digits(number, SIGNIFICANT_DIGITS));
    if parse_numeral(&significant).is_some_and(needs_exponent) {
        return to_exponential(number, EXPONENTIAL_FRACTION_DIGITS);
    }
    significant
}

/// Removes trailing zeros after the decimal point, and the point itself when no
/// fractional digits remain. Strings without a decimal point are returned unchanged.
pub fn strip_trailing_zeros(value: &str) -> String {
    if !value.contains('.') {
        return value.to_string();
    }
    let (mantissa, exponent) = match value.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (value, None),
    };
    let trimmed = mantissa.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    match exponent {
        Some(exponent) => format!("{trimmed}e{exponent}"),
        None => trimmed.to_string(),
    }
}

fn needs_exponent(number: f64) -> bool {
    let magnitude = number.abs();
    magnitude >= UPPER_PLAIN_BOUND || (magnitude < LOWER_PLAIN_BOUND && number != 0.0)
}

fn to_exponential(number: f64, fraction_digits: usize) -> String {
    let rounded = round_significant(number, fraction_digits + 1);
    let (lead, fraction) = rounded.digits.split_at(1);
    let sign = if rounded.negative { "-" } else { "" };
    let exponent_sign = if rounded.exponent < 0 { '-' } else { '+' };
    let mantissa = if fraction.is_empty() {
        lead.to_string()
    } else {
        format!("{lead}.{fraction}")
    };
    format!(
        "{sign}{mantissa}e{exponent_sign}{}",
        rounded.exponent.unsigned_abs()
    )
}

// Fixed notation only; callers guarantee the magnitude is below 1e9.
fn to_significant_digits(number: f64, digits: usize) -> String {
    let rounded = round_significant(number, digits);
    let sign = if rounded.negative { "-" } else { "" };
    let exponent = rounded.exponent;
    let digits = rounded.digits;

    if exponent < 0 {
        let leading_zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("{sign}0.{leading_zeros}{digits}");
    }
    let integral_len = exponent as usize + 1;
    if integral_len >= digits.len() {
        let trailing_zeros = "0".repeat(integral_len - digits.len());
        return format!("{sign}{digits}{trailing_zeros}");
    }
    let (integral, fraction) = digits.split_at(integral_len);
    format!("{sign}{integral}.{fraction}")
}

// Enough fraction digits to print any finite f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 800;

struct RoundedDigits {
    negative: bool,
    digits: String,
    exponent: i32,
}

/// Rounds the magnitude to `significant` decimal digits, resolving ties away from zero.
///
/// The decision is made on the exact decimal expansion of the float, so a value that
/// sits exactly halfway (`1234565000` to six digits) always rounds up.
fn round_significant(number: f64, significant: usize) -> RoundedDigits {
    let negative = number.is_sign_negative() && number != 0.0;
    let exact = format!("{:.*e}", EXACT_FRACTION_DIGITS, number.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent = exponent.parse::<i32>().unwrap_or(0);
    let all_digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let mut kept = all_digits[..significant.min(all_digits.len())].to_vec();
    kept.resize(significant, b'0');
    let round_up = all_digits.get(significant).is_some_and(|digit| *digit >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            kept.truncate(significant);
            exponent += 1;
        }
    }

    RoundedDigits {
        negative,
        digits: String::from_utf8_lossy(&kept).into_owned(),
        exponent,
    }
}

fn with_signed_exponent(rendered: String) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}
