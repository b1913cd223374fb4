//! Row building: greedy left-to-right partition of items into rows.
//!
//! An item wraps to a new row when it does not fit in the remaining width
//! and the current row already holds something. An item wider than the
//! whole row still gets a row of its own; it is never split or dropped.

use std::mem;
use std::ops::Range;

use crate::primitives::Size;

use super::item::Item;

/// Identifies what a placed slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSlot {
    /// Index into the caller's item slice.
    Item(usize),
    /// The trailing "more" indicator.
    Indicator,
}

/// One horizontal line of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Indices into the caller's item slice, in placement order.
    pub items: Vec<usize>,
    /// Sum of outer widths.
    pub width: f32,
    /// Max of outer heights.
    pub height: f32,
    /// Whether the indicator trails the items.
    pub indicator: bool,
}

impl Row {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.indicator
    }

    /// Number of slots, indicator included.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len() + usize::from(self.indicator)
    }

    /// Slots in placement order; the indicator, if any, comes last.
    pub fn slots(&self) -> impl Iterator<Item = ItemSlot> + '_ {
        self.items
            .iter()
            .map(|&i| ItemSlot::Item(i))
            .chain(self.indicator.then_some(ItemSlot::Indicator))
    }

    #[inline]
    fn accept(&mut self, width: f32, height: f32) {
        self.width += width;
        self.height = self.height.max(height);
    }
}

/// Incremental row accumulator.
///
/// Callers that need a custom stopping rule (the shrink planner) drive it
/// one item at a time; everyone else uses [`build_rows`].
#[derive(Debug)]
pub struct RowBuilder {
    max_row_width: f32,
    rows: Vec<Row>,
    current: Row,
}

impl RowBuilder {
    /// Start an empty builder wrapping at `max_row_width`.
    pub fn new(max_row_width: f32) -> Self {
        Self {
            max_row_width,
            rows: Vec::new(),
            current: Row::default(),
        }
    }

    /// The row currently being filled.
    #[inline]
    pub fn current(&self) -> &Row {
        &self.current
    }

    /// Rows already closed.
    #[inline]
    pub fn closed_rows(&self) -> usize {
        self.rows.len()
    }

    /// Closed rows plus the current row if it holds anything.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len() + usize::from(!self.current.is_empty())
    }

    /// Whether `width` more fits on the current row.
    #[inline]
    pub fn fits(&self, width: f32) -> bool {
        self.current.width + width <= self.max_row_width
    }

    /// Add an item, wrapping first if it doesn't fit.
    ///
    /// Returns `true` if the item opened a new row. Gone items are ignored.
    pub fn push(&mut self, index: usize, item: &Item) -> bool {
        if !item.is_visible() {
            return false;
        }
        let width = item.outer_width();
        let wrapped = !self.current.is_empty() && !self.fits(width);
        if wrapped {
            self.break_row();
        }
        self.current.items.push(index);
        self.current.accept(width, item.outer_height());
        wrapped
    }

    /// Append the indicator to the current row without a wrap check.
    pub fn push_indicator(&mut self, indicator: &Item) {
        self.current.indicator = true;
        self.current.accept(indicator.outer_width(), indicator.outer_height());
    }

    /// Close the current row and start an empty one.
    pub fn break_row(&mut self) {
        let row = mem::take(&mut self.current);
        self.rows.push(row);
    }

    /// Emit the final row (if it holds anything) and return all rows.
    pub fn finish(mut self) -> Vec<Row> {
        if !self.current.is_empty() {
            self.break_row();
        }
        self.rows
    }
}

/// Partition `items[range]` into rows no wider than `max_row_width`.
pub fn build_rows(items: &[Item], range: Range<usize>, max_row_width: f32) -> Vec<Row> {
    let mut builder = RowBuilder::new(max_row_width);
    for index in range {
        builder.push(index, &items[index]);
    }
    builder.finish()
}

/// Content size of a set of rows: widest row by total height.
pub fn content_size(rows: &[Row]) -> Size {
    rows.iter().fold(Size::ZERO, |acc, row| Size {
        width: acc.width.max(row.width),
        height: acc.height + row.height,
    })
}
