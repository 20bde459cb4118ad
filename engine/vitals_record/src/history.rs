//! History ordering and aggregate analytics over stored predictions.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::record::Record;

/// Sort a history newest-first. Records without a timestamp go last and
/// otherwise keep their relative order.
pub fn newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Aggregate view over many predictions, as shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub total_predictions: usize,
    /// Mean of the stored scores rounded to two decimals; 0 when empty.
    pub average_risk_score: f64,
    /// Count per verbatim `risk_level` label.
    pub risk_distribution: BTreeMap<String, usize>,
}

impl RiskSummary {
    pub fn from_records(records: &[Record]) -> Self {
        let total_predictions = records.len();
        let average_risk_score = if records.is_empty() {
            0.0
        } else {
            let sum: f64 = records.iter().map(|r| r.risk_score).sum();
            round2(sum / total_predictions as f64)
        };

        let mut risk_distribution = BTreeMap::new();
        for record in records {
            *risk_distribution
                .entry(record.risk_level.clone())
                .or_insert(0usize) += 1;
        }

        Self {
            total_predictions,
            average_risk_score,
            risk_distribution,
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl fmt::Display for RiskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total predictions: {}", self.total_predictions)?;
        writeln!(f, "average risk score: {:.2}", self.average_risk_score)?;
        for (level, count) in &self.risk_distribution {
            writeln!(f, "  {level}: {count}")?;
        }
        Ok(())
    }
}
