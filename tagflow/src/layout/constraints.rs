//! Container constraints.
//!
//! Each axis says whether the container must report an exact size, may
//! shrink to its content up to a limit, or is unconstrained. Rows wrap
//! against the width limit minus horizontal padding.

use crate::error::{LayoutError, Result};
use crate::primitives::Size;

use super::length::Padding;

/// Sizing rule for one container axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeSpec {
    /// The reported size equals this value regardless of content.
    Exact(f32),
    /// The reported size is the content size, capped at this value.
    AtMost(f32),
    /// The reported size is the content size.
    Unbounded,
}

impl SizeSpec {
    /// The space available to content on this axis, before padding.
    #[inline]
    pub fn limit(&self) -> f32 {
        match *self {
            SizeSpec::Exact(v) | SizeSpec::AtMost(v) => v,
            SizeSpec::Unbounded => f32::INFINITY,
        }
    }

    /// Resolve the reported size for `wanted` (content plus padding).
    #[inline]
    pub fn resolve(&self, wanted: f32) -> f32 {
        match *self {
            SizeSpec::Exact(v) => v,
            SizeSpec::AtMost(v) => wanted.min(v),
            SizeSpec::Unbounded => wanted,
        }
    }

    fn validate(&self, axis: &str) -> Result<()> {
        match *self {
            SizeSpec::Exact(v) | SizeSpec::AtMost(v) if v.is_nan() => Err(
                LayoutError::InvalidConfig(format!("container {} is NaN", axis)),
            ),
            SizeSpec::Exact(v) | SizeSpec::AtMost(v) if v < 0.0 => Err(
                LayoutError::InvalidConfig(format!("container {} must not be negative: {}", axis, v)),
            ),
            _ => Ok(()),
        }
    }
}

/// Constraints the surrounding framework places on the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerConstraints {
    pub width: SizeSpec,
    pub height: SizeSpec,
}

impl ContainerConstraints {
    /// Separate rules for the width and height axes.
    #[inline]
    pub fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self { width, height }
    }

    /// Exact size on both axes.
    #[inline]
    pub fn exact(width: f32, height: f32) -> Self {
        Self::new(SizeSpec::Exact(width), SizeSpec::Exact(height))
    }

    /// Shrink-to-content on both axes, capped.
    #[inline]
    pub fn at_most(width: f32, height: f32) -> Self {
        Self::new(SizeSpec::AtMost(width), SizeSpec::AtMost(height))
    }

    /// Wrap against `width`, grow vertically as needed.
    #[inline]
    pub fn with_max_width(width: f32) -> Self {
        Self::new(SizeSpec::AtMost(width), SizeSpec::Unbounded)
    }

    /// No limit on either axis.
    #[inline]
    pub fn unbounded() -> Self {
        Self::new(SizeSpec::Unbounded, SizeSpec::Unbounded)
    }

    /// Maximum row width: width limit minus horizontal padding, never negative.
    #[inline]
    pub fn max_row_width(&self, padding: &Padding) -> f32 {
        (self.width.limit() - padding.horizontal()).max(0.0)
    }

    /// Resolve the container's reported size from its content size.
    #[inline]
    pub fn resolve(&self, content: Size, padding: &Padding) -> Size {
        Size {
            width: self.width.resolve(content.width + padding.horizontal()),
            height: self.height.resolve(content.height + padding.vertical()),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.width.validate("width")?;
        self.height.validate("height")
    }
}

impl Default for ContainerConstraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
