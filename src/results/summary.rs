use crate::error::Result;
use crate::evaluation::{AggregateResult, Combination, Measurement, MetricFamily, combine};
use crate::results::row::{
    CORRECTIONS_WITH_ADDITION, CORRECTIONS_WITH_DELETION, CORRECTIONS_WITH_REPLACEMENT,
    CURRENT_VIOLATIONS, PROPERTY_INSTANCES, ResultRow,
};
use strum::IntoEnumIterator;

/// Evaluation of one metric family under both combination policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyEvaluation {
    pub family: MetricFamily,
    pub weighted: AggregateResult,
    pub average: AggregateResult,
}

impl FamilyEvaluation {
    pub fn get(&self, policy: Combination) -> &AggregateResult {
        match policy {
            Combination::Weighted => &self.weighted,
            Combination::Average => &self.average,
        }
    }
}

/// Totals over every constraint of a result file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSummary {
    pub constraints: u64,
    pub property_instances: u64,
    pub current_violations: u64,
    pub corrections_with_addition: u64,
    pub corrections_with_deletion: u64,
    pub corrections_with_replacement: u64,
    pub evaluations: Vec<FamilyEvaluation>,
}

impl ConstraintSummary {
    /// Collects every measurement first, then folds each family once.
    pub fn from_rows(rows: &[ResultRow]) -> Result<Self> {
        let mut summary = Self {
            constraints: 0,
            property_instances: 0,
            current_violations: 0,
            corrections_with_addition: 0,
            corrections_with_deletion: 0,
            corrections_with_replacement: 0,
            evaluations: Vec::new(),
        };
        let mut samples: Vec<(MetricFamily, Vec<Measurement>)> = MetricFamily::iter()
            .map(|f| (f, Vec::with_capacity(rows.len())))
            .collect();

        for row in rows {
            summary.constraints += 1;
            summary.property_instances += row.count(PROPERTY_INSTANCES)?;
            summary.current_violations += row.count(CURRENT_VIOLATIONS)?;
            summary.corrections_with_addition += row.count(CORRECTIONS_WITH_ADDITION)?;
            summary.corrections_with_deletion += row.count(CORRECTIONS_WITH_DELETION)?;
            summary.corrections_with_replacement += row.count(CORRECTIONS_WITH_REPLACEMENT)?;
            for (family, ms) in samples.iter_mut() {
                ms.push(row.measurement(*family)?);
            }
        }

        summary.evaluations = samples
            .iter()
            .map(|(family, ms)| FamilyEvaluation {
                family: *family,
                weighted: combine(Combination::Weighted, ms),
                average: combine(Combination::Average, ms),
            })
            .collect();

        tracing::debug!(constraints = summary.constraints, "summarized result rows");
        Ok(summary)
    }

    pub fn evaluation(&self, family: MetricFamily) -> Option<&FamilyEvaluation> {
        self.evaluations.iter().find(|e| e.family == family)
    }

    /// Total test set size; identical for every family.
    pub fn test_cases(&self) -> u64 {
        self.evaluations.first().map_or(0, |e| e.weighted.count)
    }
}
