//! Number formatting shared by the transcript and every shell

/// Format a value compactly: integral values without a fractional part,
/// everything else in shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format a value with six fixed decimals, as the line-mode shell reports results
pub fn format_fixed(value: f64) -> String {
    format!("{:.6}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(10.0), "10.000000");
        assert_eq!(format_fixed(0.1 + 0.2), "0.300000");
    }
}
