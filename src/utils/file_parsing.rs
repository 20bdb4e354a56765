use crate::error::{Result, StatsError};

/// Parses a metric cell; `NaN` is undefined, an empty cell is malformed.
pub fn parse_metric(field: &str, raw: &str) -> Result<Option<f64>> {
    let v: f64 = raw.trim().parse().map_err(|_| invalid(field, raw))?;
    if v.is_nan() {
        return Ok(None);
    }
    if !(0.0..=1.0).contains(&v) {
        tracing::warn!(field, value = v, "metric outside [0, 1]");
    }
    Ok(Some(v))
}

/// Parses a required non-negative integer cell.
pub fn parse_count(field: &str, raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| invalid(field, raw))
}

pub fn parse_float(field: &str, raw: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| invalid(field, raw))
}

fn invalid(field: &str, raw: &str) -> StatsError {
    StatsError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_cells() {
        assert_eq!(parse_metric("p", "0.25").unwrap(), Some(0.25));
        assert_eq!(parse_metric("p", " 1 ").unwrap(), Some(1.0));
        assert_eq!(parse_metric("p", "NaN").unwrap(), None);
        assert_eq!(parse_metric("p", "nan").unwrap(), None);
        assert!(matches!(
            parse_metric("p", ""),
            Err(StatsError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_metric("p", "abc"),
            Err(StatsError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn count_cells() {
        assert_eq!(parse_count("n", "1200").unwrap(), 1200);
        assert!(parse_count("n", "-3").is_err());
        assert!(parse_count("n", "").is_err());
        assert!(parse_count("n", "1.5").is_err());
    }

    #[test]
    fn float_cells() {
        assert_eq!(parse_float("x", "3.5").unwrap(), 3.5);
        assert!(parse_float("x", "x").is_err());
    }
}
