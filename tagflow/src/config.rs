//! Flow layout configuration.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::layout::{Alignment, Padding};

/// Row cap used by SHRINK mode unless configured otherwise.
pub const DEFAULT_MAX_ROWS: usize = 3;

/// Presentation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowMode {
    /// Cap rows and truncate behind a "more" indicator.
    #[default]
    Shrink,
    /// Show every item on as many rows as needed.
    Expand,
}

impl FlowMode {
    /// The other mode, as the "more" control switches between them.
    pub fn toggled(self) -> Self {
        match self {
            FlowMode::Shrink => FlowMode::Expand,
            FlowMode::Expand => FlowMode::Shrink,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub mode: FlowMode,
    pub alignment: Alignment,
    /// Visible row cap in SHRINK mode.
    pub max_rows: usize,
    /// Leading items kept out of the flow entirely (e.g. a fixed control
    /// that the host positions itself).
    pub reserved_leading: usize,
    pub padding: Padding,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            mode: FlowMode::default(),
            alignment: Alignment::default(),
            max_rows: DEFAULT_MAX_ROWS,
            reserved_leading: 0,
            padding: Padding::ZERO,
        }
    }
}

impl FlowConfig {
    /// Create a config with default settings (SHRINK, three rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the presentation mode.
    pub fn mode(mut self, mode: FlowMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set horizontal alignment of each row.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the visible row cap for SHRINK mode.
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set how many leading items stay out of the flow.
    pub fn reserved_leading(mut self, count: usize) -> Self {
        self.reserved_leading = count;
        self
    }

    /// Set padding around the content area.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Reject a zero row cap and negative or non-finite padding.
    pub fn validate(&self) -> Result<()> {
        if self.max_rows == 0 {
            return Err(LayoutError::InvalidConfig("max_rows must be at least 1".into()));
        }
        for (side, value) in self.padding.sides() {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!("{} = {}", side, value)));
            }
        }
        Ok(())
    }
}
