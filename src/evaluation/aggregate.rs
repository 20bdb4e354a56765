/// Combined precision/recall over a set of [`Measurement`]s.
///
/// `count` is the total weight for a weighted combination and the number of
/// samples for an average combination.
///
/// [`Measurement`]: crate::evaluation::Measurement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateResult {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub count: u64,
}

impl AggregateResult {
    /// Harmonic mean of precision and recall.
    ///
    /// Undefined when either side is undefined or both are zero.
    pub fn f1(&self) -> Option<f64> {
        f1_score(self.precision?, self.recall?)
    }
}

pub fn f1_score(precision: f64, recall: f64) -> Option<f64> {
    let s = precision + recall;
    if precision.is_finite() && recall.is_finite() && s > 0.0 {
        Some(2.0 * (precision * recall) / s)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f1_of_equal_halves() {
        let a = AggregateResult {
            precision: Some(0.5),
            recall: Some(0.5),
            count: 1,
        };
        assert!((a.f1().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn f1_undefined_when_both_zero() {
        let a = AggregateResult {
            precision: Some(0.0),
            recall: Some(0.0),
            count: 4,
        };
        assert_eq!(a.f1(), None);
    }

    #[test]
    fn f1_undefined_when_component_missing() {
        let a = AggregateResult {
            precision: Some(0.7),
            recall: None,
            count: 4,
        };
        assert_eq!(a.f1(), None);
        assert_eq!(AggregateResult::default().f1(), None);
    }
}
