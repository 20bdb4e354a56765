use crate::evaluation::Combination;
use crate::game::GameSummary;
use crate::results::ConstraintSummary;
use strum::IntoEnumIterator;

/// Two-decimal cell; undefined values leave the cell empty.
fn cell(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.2}")).unwrap_or_default()
}

fn row(cells: &[String]) -> String {
    format!("{} \\\\", cells.join(" & "))
}

/// `family & policy & precision & recall & F-1 \\` per family and policy.
pub fn evaluation_rows(s: &ConstraintSummary) -> Vec<String> {
    let mut out = Vec::with_capacity(s.evaluations.len() * 2);
    for e in &s.evaluations {
        for policy in Combination::iter() {
            let agg = e.get(policy);
            out.push(row(&[
                e.family.to_string(),
                policy.to_string(),
                cell(agg.precision),
                cell(agg.recall),
                cell(agg.f1()),
            ]));
        }
    }
    out
}

/// `type & all & approved & rejected & obsolete & ratio \\` per constraint
/// type, then the distinct user count.
pub fn game_rows(summary: &GameSummary) -> Vec<String> {
    let mut out: Vec<String> = summary
        .tallies
        .iter()
        .map(|t| {
            row(&[
                t.label.clone(),
                t.total().to_string(),
                t.approved.to_string(),
                t.rejected.to_string(),
                t.obsolete.to_string(),
                cell(t.approval_ratio()),
            ])
        })
        .collect();
    out.push(format!("User: {}", summary.users));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{StatsDocument, summarize};
    use crate::results::rows_from_reader;
    use crate::testing::fixtures::{GAME_JSON, RESULTS_TSV};

    #[test]
    fn evaluation_table() {
        let rows = rows_from_reader(RESULTS_TSV.as_bytes()).unwrap();
        let s = ConstraintSummary::from_rows(&rows).unwrap();
        let lines = evaluation_rows(&s);

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "mined & weighted & 0.77 & 0.67 & 0.71 \\\\");
        assert_eq!(lines[1], "mined & average & 0.70 & 0.73 & 0.72 \\\\");
        assert_eq!(lines[2], "deletion baseline & weighted & 0.20 &  &  \\\\");
        assert_eq!(lines[5], "addition baseline & average &  &  &  \\\\");
    }

    #[test]
    fn game_table() {
        let doc = StatsDocument::from_json(GAME_JSON).unwrap();
        let lines = game_rows(&summarize(&doc));

        assert_eq!(lines[0], "Type & 0 & 0 & 0 & 0 &  \\\\");
        assert_eq!(lines[2], "One-of & 14 & 3 & 1 & 0 & 0.75 \\\\");
        assert_eq!(lines[6], "Inverse/Symmetric & 8 & 2 & 2 & 4 & 0.50 \\\\");
        assert_eq!(lines.last().unwrap(), "User: 4");
    }
}
