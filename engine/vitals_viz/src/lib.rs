//! Presentation adapter: turns membership results into bar-chart series
//! and picks colors/icons for the service-supplied risk verdict.
//!
//! Everything here is display-only. Tiers emphasize bars; they carry no
//! meaning for the risk computation, which lives outside this workspace.

pub mod ascii;
pub mod config;
pub mod risk;
pub mod series;

pub use ascii::{render_ascii, render_report, render_risk};
pub use config::RenderConfig;
pub use risk::{risk_display, RiskDisplay, RiskTier};
pub use series::{format_tooltip, to_series, ChartSeries, IntensityTier, SeriesPoint};
