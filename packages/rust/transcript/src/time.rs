//! Subtitle timestamp arithmetic.

use confkit_shared::{ConfkitError, Result};

/// Unit weights for the three `HH:MM:SS` components.
const UNIT_WEIGHTS: [f64; 3] = [3600.0, 60.0, 1.0];

/// Convert a subtitle timestamp like `00:00:37,644` into seconds since
/// midnight. The comma-delimited fractional/frame component is ignored.
///
/// Exactly three `:`-separated components are required; anything else is
/// a parse error rather than a silent truncation. Inputs are always
/// within one day, so there is no rollover handling.
pub fn parse_timestamp(timestamp: &str) -> Result<f64> {
    let clock = timestamp.split(',').next().unwrap_or_default();
    let components: Vec<&str> = clock.split(':').collect();

    if components.len() != UNIT_WEIGHTS.len() {
        return Err(ConfkitError::parse(format!(
            "timestamp {timestamp:?} has {} components, expected {}",
            components.len(),
            UNIT_WEIGHTS.len()
        )));
    }

    let mut seconds = 0.0;
    for (component, weight) in components.iter().zip(UNIT_WEIGHTS) {
        let value: u32 = component.trim().parse().map_err(|_| {
            ConfkitError::parse(format!(
                "timestamp {timestamp:?} has non-numeric component {component:?}"
            ))
        })?;
        seconds += weight * f64::from(value);
    }

    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_fractional_part() {
        assert_eq!(parse_timestamp("01:02:03,500").unwrap(), 3723.0);
    }

    #[test]
    fn parses_midnight() {
        assert_eq!(parse_timestamp("00:00:00").unwrap(), 0.0);
    }

    #[test]
    fn parses_plain_clock() {
        assert_eq!(parse_timestamp("00:00:37").unwrap(), 37.0);
        assert_eq!(parse_timestamp("10:00:00").unwrap(), 36000.0);
    }

    #[test]
    fn rejects_wrong_component_count() {
        assert!(parse_timestamp("02:03").is_err());
        assert!(parse_timestamp("01:02:03:04").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn rejects_non_numeric_component() {
        let err = parse_timestamp("00:xx:00").unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
    }
}
