use crate::evaluation::estimators::{Estimator, WeightedMean};
use crate::evaluation::{AggregateResult, Measurement};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Policy used to fold a set of measurements into one [`AggregateResult`].
///
/// - **weighted**: each sample weighs its own `count`, so frequent test
///   cases dominate; `count` of the result is the summed weight.
/// - **average**: every sample weighs 1; `count` of the result is the
///   number of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Combination {
    Weighted,
    Average,
}

impl Combination {
    #[inline]
    fn weight(self, m: &Measurement) -> f64 {
        match self {
            Combination::Weighted => m.count as f64,
            Combination::Average => 1.0,
        }
    }

    #[inline]
    fn contribution(self, m: &Measurement) -> u64 {
        match self {
            Combination::Weighted => m.count,
            Combination::Average => 1,
        }
    }
}

/// Folds the complete set of measurements under `policy`.
///
/// Precision and recall are estimated independently: a sample only feeds the
/// fields it has defined, and a field with no defined sample (or zero total
/// weight) is undefined in the result.
pub fn combine(policy: Combination, measurements: &[Measurement]) -> AggregateResult {
    let mut precision = WeightedMean::default();
    let mut recall = WeightedMean::default();
    let mut count = 0u64;

    for m in measurements {
        let w = policy.weight(m);
        if let Some(p) = m.precision {
            precision.add(p, w);
        }
        if let Some(r) = m.recall {
            recall.add(r, w);
        }
        count += policy.contribution(m);
    }

    AggregateResult {
        precision: precision.estimation(),
        recall: recall.estimation(),
        count,
    }
}

#[inline]
pub fn combine_weighted(measurements: &[Measurement]) -> AggregateResult {
    combine(Combination::Weighted, measurements)
}

#[inline]
pub fn combine_average(measurements: &[Measurement]) -> AggregateResult {
    combine(Combination::Average, measurements)
}
