//! Rounding rules used by the website.
//!
//! Rust's `f64::round` rounds halves away from zero, and `format!("{:.1}")`
//! may resolve exact ties differently. The site rounds halves toward positive
//! infinity for integers and resolves fixed-decimal ties to the larger
//! magnitude. Both rules are reproduced here so outputs match.

/// Round to the nearest integer, halves toward positive infinity.
///
/// ```rust
/// use fit_core::metrics::rounding::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact for every finite f64
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Format with exactly `digits` decimals.
///
/// The exact binary value is rounded to the nearest decimal; an exact tie
/// goes to the larger magnitude.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // -0.0 prints as "0.0"
    let value = if value == 0.0 { 0.0 } else { value };

    if is_exact_tie(value.abs(), digits) {
        return round_tie_away(value, digits);
    }

    format!("{value:.digits$}")
}

/// `abs * 10^d` is a half-integer only if `abs * 2^(d+1)` is an odd integer,
/// and multiplying by a power of two is exact.
fn is_exact_tie(abs: f64, digits: usize) -> bool {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53

    let exponent = i32::try_from(digits).map_or(i32::MAX, |d| d.saturating_add(1));
    let doubled = abs * 2f64.powi(exponent);
    doubled < MAX_EXACT && doubled.fract() == 0.0 && doubled % 2.0 == 1.0
}

/// A tie has exactly `digits + 1` decimals ending in 5. Drop the 5 and
/// carry one into the last kept digit.
fn round_tie_away(value: f64, digits: usize) -> String {
    let mut exact: Vec<char> = format!("{:.prec$}", value.abs(), prec = digits + 1)
        .chars()
        .collect();
    exact.pop();
    if exact.last() == Some(&'.') {
        exact.pop();
    }

    let mut carry = true;
    for c in exact.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                carry = false;
                break;
            }
        }
    }

    let mut out = String::with_capacity(exact.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    if carry {
        out.push('1');
    }
    out.extend(exact);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(332.25), 332.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.4999), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.51), -2.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
    }

    #[test]
    fn test_to_fixed_plain() {
        assert_eq!(to_fixed(3.2, 2), "3.20");
        assert_eq!(to_fixed(24.691358024691358, 1), "24.7");
        assert_eq!(to_fixed(1780.0, 0), "1780");
    }

    #[test]
    fn test_to_fixed_exact_ties() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(24.25, 1), "24.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(-9.5, 0), "-10");
        assert_eq!(to_fixed(99.75, 1), "99.8");
    }

    #[test]
    fn test_to_fixed_tie_with_many_digits() {
        // 2^-40 has exactly 40 decimals
        assert_eq!(
            to_fixed(2f64.powi(-40), 39),
            "0.000000000000909494701772928237915039063"
        );
        assert_eq!(to_fixed(2f64.powi(-40), 45).len(), 47);
    }

    #[test]
    fn test_to_fixed_near_ties() {
        // 1.005 is stored as 1.00499999...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 0.35 is stored as 0.34999999...
        assert_eq!(to_fixed(0.35, 1), "0.3");
    }

    #[test]
    fn test_to_fixed_negative_zero() {
        assert_eq!(to_fixed(-0.0, 1), "0.0");
    }
}
