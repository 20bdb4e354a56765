use crate::evaluation::estimators::Estimator;

/// Weighted mean estimator: `mean = sum(v * w) / sum(w)`.
///
/// With every weight at 1 this is the plain arithmetic mean.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedMean {
    weight: f64,
    sum: f64,
}

impl Estimator for WeightedMean {
    #[inline]
    fn add(&mut self, value: f64, weight: f64) {
        if !value.is_finite() || weight < 0.0 {
            return;
        }
        self.weight += weight;
        self.sum += value * weight;
    }

    #[inline]
    fn estimation(&self) -> Option<f64> {
        if self.weight > 0.0 {
            Some(self.sum / self.weight)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_undefined() {
        assert_eq!(WeightedMean::default().estimation(), None);
    }

    #[test]
    fn zero_total_weight_is_undefined() {
        let mut e = WeightedMean::default();
        e.add(0.9, 0.0);
        e.add(0.1, 0.0);
        assert_eq!(e.estimation(), None);
    }

    #[test]
    fn weights_values() {
        let mut e = WeightedMean::default();
        e.add(1.0, 3.0);
        e.add(0.0, 1.0);
        assert!((e.estimation().unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn ignores_nan() {
        let mut e = WeightedMean::default();
        e.add(f64::NAN, 10.0);
        e.add(0.4, 1.0);
        assert!((e.estimation().unwrap() - 0.4).abs() < 1e-12);
    }
}
