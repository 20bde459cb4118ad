//! Library entry points used by the `vitals` binary and by embedders that
//! already hold a decoded record or raw JSON from the prediction service.

use serde::Serialize;
use serde_json::Value as JsonValue;
use vitals_eval::{evaluate, out_of_domain, ExplainError, ExplainResult};
use vitals_fuzzy::VariableKey;
use vitals_record::{newest_first, Record, RecordError, RiskSummary};
use vitals_viz::{risk_display, to_series, ChartSeries, RiskDisplay};

pub use vitals_eval as eval;
pub use vitals_fuzzy as fuzzy;
pub use vitals_record as record;
pub use vitals_viz as viz;

/// Everything needed to draw the membership charts of one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyReport {
    pub variables: Vec<ChartSeries>,
    pub risk: RiskDisplay,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub out_of_domain: Vec<VariableKey>,
}

pub fn explain(record: &Record) -> FuzzyReport {
    let variables = evaluate(record).iter().map(to_series).collect();
    FuzzyReport {
        variables,
        risk: risk_display(record),
        out_of_domain: out_of_domain(record),
    }
}

/// Explain a record given as JSON. `null` means there is no record and
/// nothing must be rendered.
pub fn explain_value(value: &JsonValue) -> ExplainResult<FuzzyReport> {
    if value.is_null() {
        return Err(ExplainError::MissingRecord);
    }
    let record: Record = serde_json::from_value(value.clone())?;
    Ok(explain(&record))
}

/// Explain a record from JSON text; blank input counts as a missing record.
pub fn explain_source(source: &str) -> ExplainResult<FuzzyReport> {
    if source.trim().is_empty() {
        return Err(ExplainError::MissingRecord);
    }
    let value: JsonValue = serde_json::from_str(source)?;
    explain_value(&value)
}

/// Decode a history array, order it newest-first and aggregate it.
pub fn summarize_source(source: &str) -> Result<(RiskSummary, Vec<Record>), RecordError> {
    let mut records = Record::list_from_json(source)?;
    newest_first(&mut records);
    let summary = RiskSummary::from_records(&records);
    log::info!(
        "summarized {} predictions, average score {}",
        summary.total_predictions,
        summary.average_risk_score
    );
    Ok((summary, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECORD: &str = r#"{"bmi":22,"heart_rate":75,"sleep_hours":8,"exercise_level":3,
        "risk_score":18.4,"risk_level":"LOW","recommendation":"You're in good health!"}"#;

    #[test]
    fn explains_json_record() {
        let report = explain_source(RECORD).unwrap();
        assert_eq!(report.variables.len(), 4);
        assert_eq!(report.variables[1].points[1].tooltip, "75.0%");
        assert_eq!(report.risk.score, 18.4);
        assert!(report.out_of_domain.is_empty());
    }

    #[test]
    fn null_and_blank_inputs_are_missing_records() {
        assert!(matches!(
            explain_source("null"),
            Err(ExplainError::MissingRecord)
        ));
        assert!(matches!(
            explain_source("  \n"),
            Err(ExplainError::MissingRecord)
        ));
        assert!(matches!(
            explain_value(&JsonValue::Null),
            Err(ExplainError::MissingRecord)
        ));
    }

    #[test]
    fn malformed_record_is_a_decode_error() {
        let err = explain_source(r#"{"bmi":"heavy"}"#).unwrap_err();
        assert!(matches!(err, ExplainError::Decode(_)));
        assert!(explain_source("{").is_err());
    }

    #[test]
    fn report_flags_out_of_domain_readings() {
        let report = explain_source(
            r#"{"bmi":45,"heart_rate":75,"sleep_hours":8,"exercise_level":9,
                "risk_score":70,"risk_level":"HIGH","recommendation":""}"#,
        )
        .unwrap();
        assert_eq!(
            report.out_of_domain,
            vec![VariableKey::Bmi, VariableKey::ExerciseLevel]
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["out_of_domain"][1], "exercise_level");
    }

    #[test]
    fn summarizes_history() {
        let source = format!(
            "[{},{}]",
            RECORD.replace("}", r#","timestamp":"2024-01-01T08:00:00"}"#),
            RECORD
                .replace("18.4", "60")
                .replace("\"LOW\"", "\"MEDIUM\"")
                .replace("}", r#","timestamp":"2024-02-01T08:00:00"}"#)
        );
        let (summary, records) = summarize_source(&source).unwrap();
        assert_eq!(summary.total_predictions, 2);
        assert_eq!(summary.average_risk_score, 39.2);
        assert_eq!(records[0].risk_level, "MEDIUM");
    }
}
