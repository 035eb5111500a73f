use serde::{Deserialize, Serialize};

use crate::core::{ColorPalette, DateLabelStyle};
use crate::error::{GanttError, GanttResult};
use crate::render::BarLayoutConfig;

/// Timeline builder configuration.
///
/// Serializable so host applications can ship view settings as JSON; every
/// field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub palette: ColorPalette,
    /// Compute overlap-free lanes instead of using caller lanes.
    #[serde(default)]
    pub auto_lanes: bool,
    #[serde(default)]
    pub bar_layout: BarLayoutConfig,
    #[serde(default)]
    pub date_label_style: DateLabelStyle,
    #[serde(default = "default_missing_date_label")]
    pub missing_date_label: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            palette: ColorPalette::default(),
            auto_lanes: false,
            bar_layout: BarLayoutConfig::default(),
            date_label_style: DateLabelStyle::default(),
            missing_date_label: default_missing_date_label(),
        }
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_auto_lanes(mut self, enabled: bool) -> Self {
        self.auto_lanes = enabled;
        self
    }

    #[must_use]
    pub fn with_bar_layout(mut self, layout: BarLayoutConfig) -> Self {
        self.bar_layout = layout;
        self
    }

    #[must_use]
    pub fn with_date_label_style(mut self, style: DateLabelStyle) -> Self {
        self.date_label_style = style;
        self
    }

    #[must_use]
    pub fn with_missing_date_label(mut self, label: impl Into<String>) -> Self {
        self.missing_date_label = label.into();
        self
    }

    pub fn validate(&self) -> GanttResult<()> {
        self.bar_layout.validate()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            GanttError::InvalidData(format!("failed to parse timeline config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> GanttResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GanttError::InvalidData(format!("failed to serialize timeline config: {e}"))
        })
    }
}

fn default_missing_date_label() -> String {
    "No date".to_owned()
}
