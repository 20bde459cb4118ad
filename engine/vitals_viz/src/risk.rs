use serde::Serialize;
use vitals_record::{Record, RiskLevel};

/// Presentation tier for a service-assigned risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    /// Any label the service might add later.
    Neutral,
}

impl RiskTier {
    /// Total over every string; unknown labels fall back to `Neutral`.
    pub fn from_label(label: &str) -> Self {
        match RiskLevel::parse(label) {
            Some(RiskLevel::Low) => RiskTier::Low,
            Some(RiskLevel::Medium) => RiskTier::Medium,
            Some(RiskLevel::High) => RiskTier::High,
            None => {
                log::warn!("unrecognized risk level {label:?}, using neutral presentation");
                RiskTier::Neutral
            }
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#10b981",
            RiskTier::Medium => "#f59e0b",
            RiskTier::High => "#ef4444",
            RiskTier::Neutral => "#6b7280",
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            RiskTier::Low => Some("check-circle"),
            RiskTier::Medium => Some("alert-triangle"),
            RiskTier::High => Some("alert-circle"),
            RiskTier::Neutral => None,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RiskTier::Low => "bg-green-100 text-green-800",
            RiskTier::Medium => "bg-yellow-100 text-yellow-800",
            RiskTier::High => "bg-red-100 text-red-800",
            RiskTier::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

/// The service verdict ready for display. Score, level and recommendation
/// are copied verbatim; only the styling is chosen here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskDisplay {
    pub score: f64,
    pub level: String,
    pub recommendation: String,
    pub tier: RiskTier,
    pub color: &'static str,
    pub icon: Option<&'static str>,
    pub badge_class: &'static str,
    /// Gauge axis for the score.
    pub gauge_domain: [f64; 2],
}

pub fn risk_display(record: &Record) -> RiskDisplay {
    let tier = RiskTier::from_label(&record.risk_level);
    RiskDisplay {
        score: record.risk_score,
        level: record.risk_level.clone(),
        recommendation: record.recommendation.clone(),
        tier,
        color: tier.color(),
        icon: tier.icon(),
        badge_class: tier.badge_class(),
        gauge_domain: [0.0, 100.0],
    }
}
