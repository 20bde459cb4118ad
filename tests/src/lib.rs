//! Shared fixtures for the workspace integration tests.

use vitals_record::Record;

/// A record as the prediction service would return it.
pub fn record(bmi: f64, heart_rate: f64, sleep_hours: f64, exercise_level: f64) -> Record {
    Record {
        id: Some("rec-1".into()),
        user_id: Some("user-1".into()),
        bmi,
        heart_rate,
        sleep_hours,
        exercise_level,
        risk_score: 21.75,
        risk_level: "LOW".into(),
        recommendation: "You're in good health! Maintain your current lifestyle.".into(),
        timestamp: None,
    }
}

pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
