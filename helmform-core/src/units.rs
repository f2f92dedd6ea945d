//! Magnitude-plus-unit values such as `"150m"` or `"2Gi"`.

use crate::error::ValueParseError;

/// Strip `unit` from the end of `value` and parse what remains as a number.
///
/// The suffix must match exactly and the remaining magnitude must be a
/// finite decimal number without surrounding whitespace. An empty `unit`
/// parses the whole string.
pub fn parse_numeric_prefix(value: &str, unit: &str) -> Result<f64, ValueParseError> {
    let magnitude = value
        .strip_suffix(unit)
        .ok_or_else(|| ValueParseError::UnitMismatch {
            value: value.to_string(),
            unit: unit.to_string(),
        })?;

    magnitude
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValueParseError::Malformed {
            value: value.to_string(),
            unit: unit.to_string(),
        })
}

/// Render a magnitude back into its `helmValue` form.
///
/// Whole numbers print without a fractional part, so `150.0` with `"m"`
/// gives `"150m"`.
pub fn format_with_unit(value: f64, unit: &str) -> String {
    format!("{value}{unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_millicores() {
        assert_eq!(parse_numeric_prefix("150m", "m"), Ok(150.0));
        assert_eq!(parse_numeric_prefix("30000m", "m"), Ok(30000.0));
    }

    #[test]
    fn parses_binary_units() {
        assert_eq!(parse_numeric_prefix("2Gi", "Gi"), Ok(2.0));
        assert_eq!(parse_numeric_prefix("0.5Gi", "Gi"), Ok(0.5));
    }

    #[test]
    fn empty_unit_parses_whole_string() {
        assert_eq!(parse_numeric_prefix("4", ""), Ok(4.0));
    }

    #[test]
    fn rejects_wrong_suffix() {
        let err = parse_numeric_prefix("2Mi", "Gi").unwrap_err();
        assert!(matches!(err, ValueParseError::UnitMismatch { .. }));
    }

    #[test]
    fn rejects_missing_magnitude() {
        let err = parse_numeric_prefix("Gi", "Gi").unwrap_err();
        assert!(matches!(err, ValueParseError::Malformed { .. }));
    }

    #[test]
    fn rejects_garbage_magnitude() {
        for value in ["abcm", "1.2.3m", " 150m", "150 m", "mm"] {
            let err = parse_numeric_prefix(value, "m").unwrap_err();
            assert!(
                matches!(err, ValueParseError::Malformed { .. }),
                "{value}: {err:?}"
            );
        }
    }

    #[test]
    fn rejects_non_finite_magnitude() {
        assert!(parse_numeric_prefix("infm", "m").is_err());
        assert!(parse_numeric_prefix("NaNGi", "Gi").is_err());
    }

    #[test]
    fn formats_whole_and_fractional_values() {
        assert_eq!(format_with_unit(150.0, "m"), "150m");
        assert_eq!(format_with_unit(0.5, "Gi"), "0.5Gi");
    }
}
