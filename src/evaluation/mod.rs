mod aggregate;
mod combination;
mod estimators;
mod family;
mod measurement;

pub use aggregate::{AggregateResult, f1_score};
pub use combination::{Combination, combine, combine_average, combine_weighted};
pub use estimators::{Estimator, WeightedMean};
pub use family::MetricFamily;
pub use measurement::Measurement;
