/// Text rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of a full-membership bar, in characters.
    pub bar_width: usize,
    /// Append the risk verdict after the charts.
    pub show_risk: bool,
    /// Print the intensity tier after each bar.
    pub show_tiers: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bar_width: 20,
            show_risk: true,
            show_tiers: false,
        }
    }
}

impl RenderConfig {
    pub const BAR_WIDTH_ENV: &'static str = "VITALS_BAR_WIDTH";
    /// Widest bar the renderer will draw.
    pub const MAX_BAR_WIDTH: usize = 200;

    /// `bar_width` clamped to [`Self::MAX_BAR_WIDTH`].
    pub fn effective_bar_width(&self) -> usize {
        self.bar_width.min(Self::MAX_BAR_WIDTH)
    }

    /// Apply `VITALS_BAR_WIDTH` from the environment when it parses.
    pub fn with_env_overrides(self) -> Self {
        self.with_bar_width_var(std::env::var(Self::BAR_WIDTH_ENV).ok().as_deref())
    }

    fn with_bar_width_var(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.trim().parse::<usize>() {
                Ok(width) if width <= Self::MAX_BAR_WIDTH => self.bar_width = width,
                Ok(width) => log::warn!(
                    "ignoring {}={width}: wider than {}",
                    Self::BAR_WIDTH_ENV,
                    Self::MAX_BAR_WIDTH
                ),
                Err(e) => log::warn!(
                    "ignoring {}={raw:?}: {e}",
                    Self::BAR_WIDTH_ENV
                ),
            }
        }
        self
    }
}
