//! Flow layout engine.
//!
//! ```text
//! items + constraints -> plan (pass 1, maybe pass 2) -> rows -> aligned placements
//! ```
//!
//! Nothing is kept between calls. [`FlowState`](super::cache::FlowState)
//! layers plan memoization on top when the host lays out repeatedly.

use std::ops::Range;

use crate::config::{FlowConfig, FlowMode};
use crate::error::{LayoutError, Result};
use crate::primitives::{Point, Rect, Size};

use super::align::place_row;
use super::constraints::ContainerConstraints;
use super::item::{Item, Measure};
use super::rows::{ItemSlot, Row, RowBuilder, build_rows, content_size};
use super::shrink::{LayoutPlan, ShrinkPlanner};

/// Final bounds of one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub slot: ItemSlot,
    /// Row index, top to bottom.
    pub row: usize,
    pub bounds: Rect,
}

/// Everything one layout call produces.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayoutResult {
    /// Reported container size, padding included.
    pub size: Size,
    pub plan: LayoutPlan,
    pub rows: Vec<Row>,
    /// Placements ordered by row, then left to right.
    pub placements: Vec<Placement>,
    /// Visible items truncated away in SHRINK mode.
    pub hidden: Vec<usize>,
}

impl FlowLayoutResult {
    /// Bounds of a slot, if it was placed.
    pub fn bounds_of(&self, slot: ItemSlot) -> Option<Rect> {
        self.placements.iter().find(|p| p.slot == slot).map(|p| p.bounds)
    }

    pub fn indicator_bounds(&self) -> Option<Rect> {
        self.bounds_of(ItemSlot::Indicator)
    }
}

/// Stateless two-pass flow layout.
#[derive(Debug, Clone, Default)]
pub struct FlowLayout {
    config: FlowConfig,
}

impl FlowLayout {
    /// Create a layout with the given config.
    pub fn new(config: FlowConfig) -> Self {
        Self { config }
    }

    /// Current config.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Replace the config; takes effect on the next call.
    pub fn set_config(&mut self, config: FlowConfig) {
        self.config = config;
    }

    /// Slice indices taking part in the flow: everything after the
    /// reserved leading slots.
    pub fn flow_range(&self, len: usize) -> Range<usize> {
        self.config.reserved_leading.min(len)..len
    }

    /// Measure only: how many items show and how big the content is.
    pub fn plan(
        &self,
        items: &[Item],
        indicator: Option<&Item>,
        constraints: ContainerConstraints,
    ) -> Result<LayoutPlan> {
        self.validate(items, indicator, constraints)?;
        self.plan_validated(items, indicator, constraints)
    }

    /// Measure and arrange.
    pub fn layout(
        &self,
        items: &[Item],
        indicator: Option<&Item>,
        constraints: ContainerConstraints,
    ) -> Result<FlowLayoutResult> {
        let plan = self.plan(items, indicator, constraints)?;
        self.arrange(items, indicator, constraints, &plan)
    }

    /// Ask `measurer` for every item (and the indicator in SHRINK mode),
    /// then lay them out.
    pub fn measure_and_layout<M: Measure>(
        &self,
        measurer: &mut M,
        count: usize,
        constraints: ContainerConstraints,
    ) -> Result<FlowLayoutResult> {
        let items: Vec<Item> = (0..count).map(|i| measurer.measure(i, constraints)).collect();
        let indicator = match self.config.mode {
            FlowMode::Shrink => measurer.measure_indicator(constraints),
            FlowMode::Expand => None,
        };
        self.layout(&items, indicator.as_ref(), constraints)
    }

    pub(crate) fn validate(
        &self,
        items: &[Item],
        indicator: Option<&Item>,
        constraints: ContainerConstraints,
    ) -> Result<()> {
        self.config.validate()?;
        constraints.validate()?;
        for index in self.flow_range(items.len()) {
            if items[index].is_visible() {
                items[index].validate(Some(index))?;
            }
        }
        if let Some(indicator) = indicator {
            indicator.validate(None)?;
        }
        Ok(())
    }

    pub(crate) fn plan_validated(
        &self,
        items: &[Item],
        indicator: Option<&Item>,
        constraints: ContainerConstraints,
    ) -> Result<LayoutPlan> {
        let range = self.flow_range(items.len());
        let planner = ShrinkPlanner::new(
            constraints.max_row_width(&self.config.padding),
            self.config.max_rows,
        );
        match self.config.mode {
            FlowMode::Expand => Ok(planner.plan_without_indicator(items, range)),
            FlowMode::Shrink => planner.plan(items, range, indicator),
        }
    }

    /// Partition the planned items into rows and place them.
    pub(crate) fn arrange(
        &self,
        items: &[Item],
        indicator: Option<&Item>,
        constraints: ContainerConstraints,
        plan: &LayoutPlan,
    ) -> Result<FlowLayoutResult> {
        let padding = self.config.padding;
        let max_row_width = constraints.max_row_width(&padding);
        let range = self.flow_range(items.len());

        let rows = if plan.needs_indicator {
            let indicator = indicator.ok_or(LayoutError::MissingIndicator)?;
            self.rows_with_indicator(items, range.start..plan.shown_end, max_row_width, indicator)
        } else {
            build_rows(items, range.clone(), max_row_width)
        };
        debug_assert_eq!(rows.len(), plan.row_count);

        let size = constraints.resolve(content_size(&rows), &padding);
        let available = (size.width - padding.horizontal()).max(0.0);

        let mut placements = Vec::with_capacity(rows.iter().map(Row::len).sum());
        let mut top = padding.top;
        for (row_index, row) in rows.iter().enumerate() {
            let origin = Point::new(padding.left, top);
            let placed = place_row(row, items, indicator, origin, available, self.config.alignment);
            placements.extend(placed.into_iter().map(|(slot, bounds)| Placement {
                slot,
                row: row_index,
                bounds,
            }));
            top += row.height;
        }

        let hidden: Vec<usize> = (plan.shown_end.max(range.start)..range.end)
            .filter(|&i| items[i].is_visible())
            .collect();

        tracing::debug!(
            "flow layout: {} rows, {} placements, {} hidden, size {}x{}",
            rows.len(),
            placements.len(),
            hidden.len(),
            size.width,
            size.height
        );

        Ok(FlowLayoutResult {
            size,
            plan: *plan,
            rows,
            placements,
            hidden,
        })
    }

    /// Rows over the shown prefix with the indicator on the last permitted
    /// row. If the prefix ends before that row, the indicator opens it.
    fn rows_with_indicator(
        &self,
        items: &[Item],
        shown: Range<usize>,
        max_row_width: f32,
        indicator: &Item,
    ) -> Vec<Row> {
        let mut builder = RowBuilder::new(max_row_width);
        for index in shown {
            builder.push(index, &items[index]);
        }
        if builder.closed_rows() + 1 < self.config.max_rows && !builder.current().is_empty() {
            builder.break_row();
        }
        builder.push_indicator(indicator);
        builder.finish()
    }
}
