//! Pre-measured items and the measurement collaborator.
//!
//! The engine never computes intrinsic sizes. Every tag (and the "more"
//! indicator) arrives as an [`Item`] whose content size and margins were
//! already measured by whoever owns the widget.

use crate::error::{LayoutError, Result};

use super::constraints::ContainerConstraints;

/// Whether an item takes part in layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    /// Skipped entirely: no row, no space, no placement.
    Gone,
}

/// Outer margins of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Margins with explicit values for each side.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// A measured tag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Item {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
    pub visibility: Visibility,
}

impl Item {
    /// A visible item with no margins.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margins: Margins::ZERO,
            visibility: Visibility::Visible,
        }
    }

    /// Set the margins around the item.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Mark the item GONE: it takes no space and is never placed.
    pub fn gone(mut self) -> Self {
        self.visibility = Visibility::Gone;
        self
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Width including left and right margins.
    #[inline]
    pub fn outer_width(&self) -> f32 {
        self.width + self.margins.horizontal()
    }

    /// Height including top and bottom margins.
    #[inline]
    pub fn outer_height(&self) -> f32 {
        self.height + self.margins.vertical()
    }

    /// Reject negative or non-finite measurements.
    ///
    /// `index` is the item's slot in the caller's slice, `None` for the
    /// indicator.
    pub fn validate(&self, index: Option<usize>) -> Result<()> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("margin.left", self.margins.left),
            ("margin.top", self.margins.top),
            ("margin.right", self.margins.right),
            ("margin.bottom", self.margins.bottom),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidMeasurement { index, field, value });
            }
        }
        Ok(())
    }
}

/// Box-measurement collaborator.
///
/// Called once per item per layout invocation with the container's
/// constraints. Closures of the same shape implement it directly (and
/// supply no indicator).
pub trait Measure {
    fn measure(&mut self, index: usize, constraints: ContainerConstraints) -> Item;

    /// Measure the "more" indicator. Only asked in SHRINK mode.
    fn measure_indicator(&mut self, _constraints: ContainerConstraints) -> Option<Item> {
        None
    }
}

impl<F> Measure for F
where
    F: FnMut(usize, ContainerConstraints) -> Item,
{
    fn measure(&mut self, index: usize, constraints: ContainerConstraints) -> Item {
        self(index, constraints)
    }
}
