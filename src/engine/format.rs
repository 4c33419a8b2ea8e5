//! Display formatting for computed values.

/// Format a computed value for display.
///
/// Values with magnitude above `1e15`, or below `1e-10` but nonzero, are
/// rendered in normalized exponential notation with 10 fractional digits.
/// Everything else is rounded to 10 decimal places and rendered in minimal
/// decimal form: no trailing zeros, no forced decimal point.
///
/// # Example
///
/// ```rust
/// use reckoner::engine::format_value;
///
/// assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
/// assert_eq!(format_value(20.0), "20");
/// assert_eq!(format_value(2e16), "2.0000000000e16");
/// ```
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude > 1e15 || (magnitude < 1e-10 && value != 0.0) {
        return format!("{value:.10e}");
    }

    let rounded = (value * 1e10).round() / 1e10;
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_without_decimal_point() {
        assert_eq!(format_value(20.0), "20");
        assert_eq!(format_value(-7.0), "-7");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn fractions_round_to_ten_places() {
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_value(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn trailing_zeros_are_dropped() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(1.25), "1.25");
    }

    #[test]
    fn large_magnitudes_use_exponential_notation() {
        assert_eq!(format_value(2e16), "2.0000000000e16");
        assert_eq!(format_value(-2e16), "-2.0000000000e16");
    }

    #[test]
    fn tiny_magnitudes_use_exponential_notation() {
        assert_eq!(format_value(5e-11), "5.0000000000e-11");
    }

    #[test]
    fn boundaries_stay_in_decimal_form() {
        // Thresholds are strict, so the boundary values themselves
        // take the decimal path.
        assert!(!format_value(1e15).contains('e'));
        assert_eq!(format_value(1e-10), "0.0000000001");
    }

    #[test]
    fn zero_is_never_exponential() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "-0");
    }
}
