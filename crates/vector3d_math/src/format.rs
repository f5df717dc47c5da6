//! Text forms of a single component.
//!
//! `write_number` is the shortest round-trip form used by `Display` and
//! `Debug`; `fixed` renders a fixed count of fractional digits.

use std::fmt;

// Enough fractional digits to print any f64 without rounding.
const EXACT_DIGITS: usize = 1074;

// Outside [1e-6, 1e21) numbers switch to exponent form.
const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Largest fractional digit count `fixed` renders; larger requests are
/// clamped to it.
pub(crate) const MAX_FIXED_DIGITS: u8 = 100;

pub(crate) fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        return write!(f, "{}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&scientific),
    }
}

pub(crate) fn number(value: f64) -> String {
    struct Number(f64);

    impl fmt::Display for Number {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_number(f, self.0)
        }
    }

    Number(value).to_string()
}

/// Renders `value` with exactly `digits` fractional digits, at most
/// [`MAX_FIXED_DIGITS`].
///
/// Rounding works on the exact decimal expansion of the binary value, so
/// `1.005` (stored as `1.00499...`) becomes `1.00`, while an exact tie such
/// as `2.5` rounds away from zero to `3`.
pub(crate) fn fixed(value: f64, digits: u8) -> String {
    let digits = usize::from(digits.min(MAX_FIXED_DIGITS));
    if value.is_nan() || value.abs() >= EXPONENT_ABOVE {
        return number(value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((&exact, ""));

    let mut kept: Vec<u8> = integer.bytes().collect();
    kept.extend(fraction.bytes().take(digits));
    kept.resize(integer.len() + digits, b'0');

    let round_up = fraction
        .as_bytes()
        .get(digits)
        .map_or(false, |next| *next >= b'5');
    if round_up {
        increment(&mut kept);
    }

    let integer_len = kept.len() - digits;
    let mut rendered = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.extend(kept[..integer_len].iter().map(|digit| *digit as char));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(kept[integer_len..].iter().map(|digit| *digit as char));
    }

    rendered
}

fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }

    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::{fixed, number, MAX_FIXED_DIGITS};

    #[test]
    fn shortest_form() {
        assert_eq!(number(1.0), "1");
        assert_eq!(number(-2.5), "-2.5");
        assert_eq!(number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(123456789.0), "123456789");
        assert_eq!(number(0.000001), "0.000001");
    }

    #[test]
    fn special_values() {
        assert_eq!(number(f64::NAN), "NaN");
        assert_eq!(number(f64::INFINITY), "Infinity");
        assert_eq!(number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn exponent_form_outside_decimal_range() {
        assert_eq!(number(1e21), "1e+21");
        assert_eq!(number(1.5e300), "1.5e+300");
        assert_eq!(number(-2e22), "-2e+22");
        assert_eq!(number(1e-7), "1e-7");
        assert_eq!(number(1.25e-10), "1.25e-10");
        assert_eq!(number(1e20), "100000000000000000000");
    }

    #[test]
    fn fixed_pads_and_truncates() {
        assert_eq!(fixed(1.0, 2), "1.00");
        assert_eq!(fixed(3.14159, 3), "3.142");
        assert_eq!(fixed(3.14159, 0), "3");
        assert_eq!(fixed(0.1, 20), "0.10000000000000000555");
    }

    #[test]
    fn fixed_rounds_exact_value() {
        assert_eq!(fixed(1.005, 2), "1.00");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(0.5, 0), "1");
        assert_eq!(fixed(-2.5, 0), "-3");
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(9.995, 2), "9.99");
        assert_eq!(fixed(99.96, 1), "100.0");
    }

    #[test]
    fn fixed_clamps_digit_count() {
        let widest = fixed(1.0, MAX_FIXED_DIGITS);
        assert_eq!(widest.len(), 2 + usize::from(MAX_FIXED_DIGITS));

        assert_eq!(fixed(1.0, u8::MAX), widest);
        assert_eq!(fixed(-0.5, u8::MAX), format!("-0.5{}", "0".repeat(99)));
    }

    #[test]
    fn fixed_sign_handling() {
        assert_eq!(fixed(-0.0, 2), "0.00");
        assert_eq!(fixed(-0.001, 2), "-0.00");
        assert_eq!(fixed(-1.25, 1), "-1.3");
    }

    #[test]
    fn fixed_falls_back_for_large_and_special_values() {
        assert_eq!(fixed(f64::NAN, 2), "NaN");
        assert_eq!(fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(fixed(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(fixed(1e21, 2), "1e+21");
        assert_eq!(fixed(1e20, 1), "100000000000000000000.0");
    }
}
