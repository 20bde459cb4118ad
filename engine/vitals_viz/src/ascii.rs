//! Plain-text bar charts for terminals and logs.

use crate::config::RenderConfig;
use crate::risk::RiskDisplay;
use crate::series::ChartSeries;

/// Header line plus one bar per set: `Normal      ###############.....  75.0%`.
pub fn render_ascii(series: &ChartSeries, config: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(series.points.len() + 1);
    lines.push(format!("{} ({})", series.title, series.raw_value));

    let label_width = series
        .points
        .iter()
        .map(|p| p.label.len())
        .max()
        .unwrap_or(0);

    let width = config.effective_bar_width();
    for point in &series.points {
        let filled = ((point.degree * width as f64).round() as usize).min(width);
        let mut line = format!("  {:<label_width$} ", point.label);
        line.push_str(&"#".repeat(filled));
        line.push_str(&".".repeat(width - filled));
        line.push_str(&format!(" {:>6}", point.tooltip));
        if config.show_tiers {
            line.push_str(&format!(" [{}]", point.tier.as_str()));
        }
        lines.push(line);
    }
    lines
}

pub fn render_risk(risk: &RiskDisplay) -> Vec<String> {
    let mut lines = vec![format!("risk score: {} ({})", risk.score, risk.level)];
    if !risk.recommendation.is_empty() {
        lines.push(risk.recommendation.clone());
    }
    lines
}

/// Full text report: every chart, a blank line between them, then the
/// verdict when `config.show_risk` is set and one is given.
pub fn render_report(
    series: &[ChartSeries],
    risk: Option<&RiskDisplay>,
    config: &RenderConfig,
) -> String {
    let mut blocks: Vec<String> = series
        .iter()
        .map(|s| render_ascii(s, config).join("\n"))
        .collect();
    if config.show_risk {
        if let Some(risk) = risk {
            blocks.push(render_risk(risk).join("\n"));
        }
    }
    blocks.join("\n\n")
}
