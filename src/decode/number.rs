//! Numeric literal inference.
//!
//! A literal is tried, in order, as a 32-bit integer, a 64-bit integer, a
//! decimal and finally a double; the first representation that holds the
//! literal exactly wins. The integer tiers only apply to literals without a
//! fraction or exponent.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use crate::value::Value;

/// Largest magnitude held by the decimal tier (96-bit mantissa).
const DECIMAL_MAX_MANTISSA: u128 = (1 << 96) - 1;

/// Most fractional digits held by the decimal tier.
const DECIMAL_MAX_SCALE: i64 = 28;

/// Infer the narrowest `Value` holding a JSON number literal.
///
/// Returns `None` when `literal` is not a JSON number.
pub fn infer_number(literal: &str) -> Option<Value> {
    if !is_json_number(literal) {
        return None;
    }

    if !literal.contains(['.', 'e', 'E']) {
        if let Ok(i) = literal.parse::<i32>() {
            return Some(Value::Int(i));
        }
        if let Ok(l) = literal.parse::<i64>() {
            return Some(Value::Long(l));
        }
    }

    if let Some(d) = fit_decimal(literal) {
        return Some(Value::Decimal(d));
    }

    literal.parse::<f64>().ok().map(Value::Double)
}

/// Parse `literal` as a decimal when it fits the decimal tier's bounds.
fn fit_decimal(literal: &str) -> Option<BigDecimal> {
    let d = BigDecimal::from_str(literal).ok()?;
    let (_, scale) = d.normalized().as_bigint_and_exponent();
    if scale > DECIMAL_MAX_SCALE {
        return None;
    }
    let max = BigDecimal::new(BigInt::from(DECIMAL_MAX_MANTISSA), 0);
    if d.abs() > max {
        return None;
    }
    Some(d)
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
pub(crate) fn is_json_number(literal: &str) -> bool {
    let bytes = literal.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i += count_digits(&bytes[i..]),
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        let digits = count_digits(&bytes[i + 1..]);
        if digits == 0 {
            return false;
        }
        i += 1 + digits;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let digits = count_digits(&bytes[i..]);
        if digits == 0 {
            return false;
        }
        i += digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
