use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    BUTTON_ROW_ALLOWANCE, COLLAPSIBLE_HEADER_HEIGHT, EXPLORE_ROUTE, FALLBACK_SCREEN_HEIGHT,
    FOOTER_ALLOWANCE, LIST_HEADER_ALLOWANCE, MAP_BOTTOM_MARGIN,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("collapsible_header_height must be > 0")]
    ZeroHeaderHeight,

    #[error("explore_route cannot be empty")]
    EmptyExploreRoute,

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Layout knobs for the observation views. All lengths are in logical pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    pub collapsible_header_height: f64,
    pub list_header_allowance: f64,
    pub footer_allowance: f64,
    pub button_row_allowance: f64,
    pub map_bottom_margin: f64,
    pub fallback_screen_height: f64,
    pub explore_route: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            collapsible_header_height: COLLAPSIBLE_HEADER_HEIGHT,
            list_header_allowance: LIST_HEADER_ALLOWANCE,
            footer_allowance: FOOTER_ALLOWANCE,
            button_row_allowance: BUTTON_ROW_ALLOWANCE,
            map_bottom_margin: MAP_BOTTOM_MARGIN,
            fallback_screen_height: FALLBACK_SCREEN_HEIGHT,
            explore_route: EXPLORE_ROUTE.to_owned(),
        }
    }
}

impl ViewsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("collapsible_header_height", self.collapsible_header_height),
            ("list_header_allowance", self.list_header_allowance),
            ("footer_allowance", self.footer_allowance),
            ("button_row_allowance", self.button_row_allowance),
            ("map_bottom_margin", self.map_bottom_margin),
            ("fallback_screen_height", self.fallback_screen_height),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        if self.collapsible_header_height <= 0.0 {
            return Err(ConfigError::ZeroHeaderHeight);
        }
        if self.explore_route.trim().is_empty() {
            return Err(ConfigError::EmptyExploreRoute);
        }
        Ok(())
    }

    /// Parses a JSON document; missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Minimum height of the list/grid content, independent of item count,
    /// so the bottom sheet snap points keep working on short lists.
    #[must_use]
    pub fn min_content_height(&self, screen_height: f64) -> f64 {
        let allowances =
            self.list_header_allowance + self.footer_allowance + self.button_row_allowance;
        (screen_height - allowances).max(0.0)
    }

    #[must_use]
    pub fn map_height(&self, screen_height: f64) -> f64 {
        (screen_height - self.map_bottom_margin).max(0.0)
    }
}
