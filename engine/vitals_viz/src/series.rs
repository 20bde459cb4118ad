use serde::Serialize;
use vitals_eval::MembershipResult;
use vitals_fuzzy::VariableKey;

/// Bar emphasis derived from a membership degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityTier {
    /// degree > 0.5
    Strong,
    /// 0 < degree <= 0.5
    Weak,
    /// degree == 0
    None,
}

impl IntensityTier {
    pub const STRONG_THRESHOLD: f64 = 0.5;

    pub fn from_degree(degree: f64) -> Self {
        let tier = if degree > Self::STRONG_THRESHOLD {
            IntensityTier::Strong
        } else if degree > 0.0 {
            IntensityTier::Weak
        } else {
            IntensityTier::None
        };
        log::trace!("degree {degree} -> {tier:?}");
        tier
    }

    /// Bar fill color.
    pub fn color(&self) -> &'static str {
        match self {
            IntensityTier::Strong => "#2563eb",
            IntensityTier::Weak => "#60a5fa",
            IntensityTier::None => "#e5e7eb",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityTier::Strong => "strong",
            IntensityTier::Weak => "weak",
            IntensityTier::None => "none",
        }
    }
}

/// One bar of a membership chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub degree: f64,
    pub tier: IntensityTier,
    pub color: &'static str,
    pub tooltip: String,
}

/// Bar chart for one variable; the value axis is fixed to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub variable_key: VariableKey,
    pub title: &'static str,
    pub raw_value: f64,
    pub axis_domain: [f64; 2],
    pub points: Vec<SeriesPoint>,
}

/// Degree as a percentage with one decimal, e.g. `0.75` -> `"75.0%"`.
///
/// Exact ties round up (`6.25` -> `"6.3%"`), matching the dashboard's
/// `toFixed(1)` rather than the round-half-even of `{:.1}`.
pub fn format_tooltip(degree: f64) -> String {
    let percent = degree * 100.0;
    let shown = if is_hundredths_tie(percent) {
        percent + 0.05
    } else {
        percent
    };
    format!("{shown:.1}%")
}

// True when the exact decimal value ends in a single `5` at the
// hundredths place. Fixed-precision float formatting is exact.
fn is_hundredths_tie(value: f64) -> bool {
    let exact = format!("{value:.40}");
    match exact.split_once('.') {
        Some((_, frac)) => {
            frac.as_bytes().get(1) == Some(&b'5') && frac.bytes().skip(2).all(|b| b == b'0')
        }
        None => false,
    }
}

pub fn to_series(result: &MembershipResult) -> ChartSeries {
    let points = result
        .memberships
        .iter()
        .map(|m| {
            let tier = IntensityTier::from_degree(m.degree);
            SeriesPoint {
                label: m.label,
                degree: m.degree,
                tier,
                color: tier.color(),
                tooltip: format_tooltip(m.degree),
            }
        })
        .collect();

    ChartSeries {
        variable_key: result.variable_key,
        title: result.display_name,
        raw_value: result.raw_value,
        axis_domain: [0.0, 1.0],
        points,
    }
}
