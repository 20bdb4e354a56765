use crate::evaluation::{Combination, MetricFamily};
use crate::results::ConstraintSummary;
use std::fmt::{Display, Formatter, Result};
use strum::IntoEnumIterator;

/// Full-precision value, `undefined` when absent.
pub struct Value(pub Option<f64>);

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("undefined"),
        }
    }
}

fn label(family: MetricFamily, policy: Combination, metric: &str) -> String {
    match family {
        MetricFamily::Mined => format!("{policy} {metric}"),
        _ => format!("{family} {policy} {metric}"),
    }
}

/// A share printed as a float literal, so whole values keep their `.0`.
pub fn fraction(value: f64) -> String {
    format!("{value:?}")
}

/// One-line prose summary of a result file.
pub fn summary_line(s: &ConstraintSummary) -> String {
    let mut parts = vec![
        format!("{} constraints", s.constraints),
        format!("{} test cases", s.test_cases()),
        format!("{} current instances", s.property_instances),
        format!("{} current violations", s.current_violations),
        format!(
            "{} solved violations with one addition",
            s.corrections_with_addition
        ),
        format!(
            "{} solved violations with one deletion",
            s.corrections_with_deletion
        ),
        format!(
            "{} solved violations with one replacement",
            s.corrections_with_replacement
        ),
    ];

    for e in &s.evaluations {
        for policy in Combination::iter() {
            let agg = e.get(policy);
            parts.push(format!(
                "{} {}",
                Value(agg.precision),
                label(e.family, policy, "precision")
            ));
            parts.push(format!(
                "{} {}",
                Value(agg.recall),
                label(e.family, policy, "recall")
            ));
            parts.push(format!("{} {}", Value(agg.f1()), label(e.family, policy, "F-1")));
        }
    }

    format!("Aggregated stats: {}.", parts.join(", "))
}
