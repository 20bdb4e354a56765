/// One evaluation sample: precision/recall measured on `count` test cases.
///
/// A metric that could not be computed (e.g. precision with no predicted
/// positives) is `None`, never `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub count: u64,
}

impl Measurement {
    /// Convenience constructor
    ///
    /// Non-finite values are stored as undefined.
    #[inline]
    pub fn new(precision: Option<f64>, recall: Option<f64>, count: u64) -> Self {
        Self {
            precision: precision.filter(|p| p.is_finite()),
            recall: recall.filter(|r| r.is_finite()),
            count,
        }
    }

    #[inline]
    pub fn defined(precision: f64, recall: f64, count: u64) -> Self {
        Self::new(Some(precision), Some(recall), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_becomes_undefined() {
        let m = Measurement::new(Some(f64::NAN), Some(0.5), 3);
        assert_eq!(m.precision, None);
        assert_eq!(m.recall, Some(0.5));
        assert_eq!(m.count, 3);
    }
}
