//! Shrink planning: how many tags fit under a row cap.
//!
//! Whether truncation is needed at all is only known after laying out every
//! item, but that layout reserves no room for the "more" indicator. So the
//! planner runs at most two passes:
//!
//! ```text
//! pass 1: plan_without_indicator  -> rows <= max_rows ? done
//! pass 2: plan_with_indicator     -> stop on the last row once item + indicator overflows
//! ```

use std::ops::Range;

use crate::error::{LayoutError, Result};
use crate::primitives::Size;

use super::item::Item;
use super::rows::{RowBuilder, content_size};

/// Passes allowed per planning call.
pub const MAX_PASSES: u8 = 2;

/// Outcome of measurement, before arrangement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPlan {
    /// Widest row by sum of row heights, padding excluded.
    pub content: Size,
    pub row_count: usize,
    /// Real items shown, the indicator excluded.
    pub max_show_count: usize,
    /// Exclusive slice index just past the last shown item.
    pub shown_end: usize,
    pub needs_indicator: bool,
}

/// One-shot guard against re-measuring more than [`MAX_PASSES`] times.
#[derive(Debug, Default)]
pub struct PassGuard {
    passes: u8,
}

impl PassGuard {
    /// A guard with no passes recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a pass; returns its 1-based number.
    pub fn begin(&mut self) -> Result<u8> {
        let attempted = self.passes + 1;
        if attempted > MAX_PASSES {
            return Err(LayoutError::PassLimitExceeded { attempted });
        }
        self.passes = attempted;
        Ok(attempted)
    }

    /// Passes started so far.
    pub fn passes(&self) -> u8 {
        self.passes
    }
}

/// Plans SHRINK mode for a fixed row width and row cap.
#[derive(Debug, Clone, Copy)]
pub struct ShrinkPlanner {
    max_row_width: f32,
    max_rows: usize,
}

impl ShrinkPlanner {
    /// Create a planner wrapping at `max_row_width` and showing at most
    /// `max_rows` rows.
    pub fn new(max_row_width: f32, max_rows: usize) -> Self {
        Self {
            max_row_width,
            max_rows,
        }
    }

    /// Run pass 1 and, if the cap is exceeded, pass 2.
    ///
    /// `indicator` is only consulted when truncation is needed; a missing
    /// indicator at that point is an error.
    pub fn plan(&self, items: &[Item], range: Range<usize>, indicator: Option<&Item>) -> Result<LayoutPlan> {
        let mut guard = PassGuard::new();

        guard.begin()?;
        let full = self.plan_without_indicator(items, range.clone());
        if full.row_count <= self.max_rows {
            tracing::debug!(
                "shrink: {} rows fit under cap {}, showing all {} items",
                full.row_count,
                self.max_rows,
                full.max_show_count
            );
            return Ok(full);
        }

        let indicator = indicator.ok_or(LayoutError::MissingIndicator)?;
        guard.begin()?;
        let plan = self.plan_with_indicator(items, range, indicator);
        tracing::debug!(
            "shrink: {} rows exceed cap {}, showing {} of {} items",
            full.row_count,
            self.max_rows,
            plan.max_show_count,
            full.max_show_count
        );
        Ok(plan)
    }

    /// Pass 1: every visible item, no indicator.
    pub fn plan_without_indicator(&self, items: &[Item], range: Range<usize>) -> LayoutPlan {
        let mut builder = RowBuilder::new(self.max_row_width);
        let mut shown = 0;
        for index in range.clone() {
            if items[index].is_visible() {
                builder.push(index, &items[index]);
                shown += 1;
            }
        }
        let rows = builder.finish();
        LayoutPlan {
            content: content_size(&rows),
            row_count: rows.len(),
            max_show_count: shown,
            shown_end: range.end,
            needs_indicator: false,
        }
    }

    /// Pass 2: rows before the last permitted one wrap normally; on the
    /// last row each item must fit together with the indicator.
    pub fn plan_with_indicator(&self, items: &[Item], range: Range<usize>, indicator: &Item) -> LayoutPlan {
        let reserve = indicator.outer_width();
        let mut builder = RowBuilder::new(self.max_row_width);
        let mut shown = 0;
        let mut shown_end = range.start;

        for index in range {
            let item = &items[index];
            if !item.is_visible() {
                continue;
            }
            let width = item.outer_width();
            if !self.on_last_row(&builder) && !builder.current().is_empty() && !builder.fits(width) {
                builder.break_row();
            }
            if self.on_last_row(&builder) && !builder.fits(width + reserve) {
                break;
            }
            builder.push(index, item);
            shown += 1;
            shown_end = index + 1;
        }

        builder.push_indicator(indicator);
        let rows = builder.finish();
        LayoutPlan {
            content: content_size(&rows),
            row_count: rows.len(),
            max_show_count: shown,
            shown_end,
            needs_indicator: true,
        }
    }

    #[inline]
    fn on_last_row(&self, builder: &RowBuilder) -> bool {
        builder.closed_rows() + 1 >= self.max_rows
    }
}
