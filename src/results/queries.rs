use crate::error::{Result, StatsError};
use crate::results::ResultRow;
use crate::utils::file_parsing::parse_float;

pub const DEFAULT_THRESHOLD: u64 = 1_000_000;
pub const DEFAULT_TOP: usize = 10;

/// Share of rows whose integer `field` is strictly above `threshold`.
pub fn fraction_above(rows: &[ResultRow], field: &str, threshold: u64) -> Result<f64> {
    if rows.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let mut above = 0usize;
    for row in rows {
        if row.count(field)? > threshold {
            above += 1;
        }
    }
    Ok(above as f64 / rows.len() as f64)
}

/// Sort key of a rule record: its last two columns as numbers.
fn trailing_key(line: usize, record: &[String]) -> Result<(f64, f64)> {
    let len = record.len();
    if len < 2 {
        return Err(StatsError::ShortRecord {
            line,
            len,
            expected: 2,
        });
    }
    Ok((
        parse_float(&format!("column {}", len - 1), &record[len - 2])?,
        parse_float(&format!("column {len}"), &record[len - 1])?,
    ))
}

/// Highest `n` records by (second-to-last, last) column, descending.
///
/// Ties keep their input order.
pub fn top_rules(records: Vec<Vec<String>>, n: usize) -> Result<Vec<Vec<String>>> {
    let mut keyed = Vec::with_capacity(records.len());
    for (i, record) in records.into_iter().enumerate() {
        keyed.push((trailing_key(i + 1, &record)?, record));
    }

    keyed.sort_by(|(a, _), (b, _)| {
        b.0.total_cmp(&a.0).then_with(|| b.1.total_cmp(&a.1))
    });

    Ok(keyed.into_iter().take(n).map(|(_, r)| r).collect())
}
