//! Prediction records as returned by the risk service, plus history helpers.

pub mod history;
pub mod record;

pub use history::{newest_first, RiskSummary};
pub use record::{Record, RecordError, RiskLevel};
