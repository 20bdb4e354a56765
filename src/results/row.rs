use crate::error::{Result, StatsError};
use crate::evaluation::{Measurement, MetricFamily};
use crate::utils::file_parsing::{parse_count, parse_metric};
use std::collections::HashMap;

pub const TEST_SET_SIZE: &str = "test set size";
pub const PROPERTY_INSTANCES: &str = "property instances";
pub const CURRENT_VIOLATIONS: &str = "current violations";
pub const CORRECTIONS_WITH_ADDITION: &str = "corrections with one addition";
pub const CORRECTIONS_WITH_DELETION: &str = "corrections with one deletion";
pub const CORRECTIONS_WITH_REPLACEMENT: &str = "corrections with one replacement";

/// One constraint's line of a result file, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    fields: HashMap<String, String>,
}

impl ResultRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn require(&self, field: &str) -> Result<&str> {
        self.get(field)
            .ok_or_else(|| StatsError::MissingField(field.to_string()))
    }

    /// Required integer column.
    pub fn count(&self, field: &str) -> Result<u64> {
        parse_count(field, self.require(field)?)
    }

    /// Reads the precision/recall pair of `family` weighted by the test set
    /// size.
    ///
    /// Result files from different runs do not all carry every family, so an
    /// absent precision or recall column is undefined. The test set size is
    /// always required.
    pub fn measurement(&self, family: MetricFamily) -> Result<Measurement> {
        let count = self.count(TEST_SET_SIZE)?;
        let precision = self.optional_metric(&family.precision_column())?;
        let recall = self.optional_metric(&family.recall_column())?;
        Ok(Measurement::new(precision, recall, count))
    }

    fn optional_metric(&self, field: &str) -> Result<Option<f64>> {
        match self.get(field) {
            Some(raw) => parse_metric(field, raw),
            None => Ok(None),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResultRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_from_full_row() {
        let row: ResultRow = [
            ("test set size", "20"),
            ("mined precision", "0.75"),
            ("mined recall", "0.5"),
        ]
        .into_iter()
        .collect();

        let m = row.measurement(MetricFamily::Mined).unwrap();
        assert_eq!(m, Measurement::defined(0.75, 0.5, 20));
    }

    #[test]
    fn absent_columns_are_undefined() {
        let row: ResultRow = [("test set size", "4"), ("addition baseline recall", "NaN")]
            .into_iter()
            .collect();

        let m = row.measurement(MetricFamily::AdditionBaseline).unwrap();
        assert_eq!(m.precision, None);
        assert_eq!(m.recall, None);
        assert_eq!(m.count, 4);
    }

    #[test]
    fn missing_test_set_size_is_fatal() {
        let row: ResultRow = [("mined precision", "0.1"), ("mined recall", "0.2")]
            .into_iter()
            .collect();
        let err = row.measurement(MetricFamily::Mined).unwrap_err();
        assert!(matches!(err, StatsError::MissingField(f) if f == TEST_SET_SIZE));
    }

    #[test]
    fn empty_metric_cell_is_fatal() {
        let row: ResultRow = [
            ("test set size", "8"),
            ("mined precision", ""),
            ("mined recall", "0.4"),
        ]
        .into_iter()
        .collect();
        let err = row.measurement(MetricFamily::Mined).unwrap_err();
        assert!(matches!(err, StatsError::InvalidNumber { field, .. } if field == "mined precision"));
    }

    #[test]
    fn garbage_metric_is_fatal() {
        let row: ResultRow = [("test set size", "1"), ("mined precision", "high")]
            .into_iter()
            .collect();
        assert!(matches!(
            row.measurement(MetricFamily::Mined),
            Err(StatsError::InvalidNumber { .. })
        ));
    }
}
