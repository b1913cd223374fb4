//! tagflow: wrapping row layout for tags.
//!
//! Lays out pre-measured items left to right, wrapping into rows inside a
//! container of constrained width. Two presentation modes:
//!
//! - **Expand** shows every item on as many rows as it takes.
//! - **Shrink** caps the visible rows (3 by default). When the full layout
//!   would exceed the cap, the item list is truncated and a trailing
//!   "more" indicator is placed at the end of the last visible row.
//!
//! The engine is pure: measurement of individual items, painting and input
//! belong to the host.
//!
//! # Usage
//!
//! ```
//! use tagflow::{ContainerConstraints, FlowConfig, FlowLayout, Item};
//!
//! let tags: Vec<Item> = (5..15).map(|i| Item::new(i as f32 * 10.0, 20.0)).collect();
//! let more = Item::new(40.0, 20.0);
//!
//! let layout = FlowLayout::new(FlowConfig::default());
//! let result = layout
//!     .layout(&tags, Some(&more), ContainerConstraints::with_max_width(200.0))
//!     .unwrap();
//!
//! assert!(result.plan.needs_indicator);
//! assert_eq!(result.plan.max_show_count, 6);
//! assert_eq!(result.rows.len(), 3);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod layout;
pub mod primitives;

pub use config::{DEFAULT_MAX_ROWS, FlowConfig, FlowMode};
pub use error::{LayoutError, Result};
pub use layout::{
    Alignment, ContainerConstraints, FlowLayout, FlowLayoutResult, FlowState, Item, ItemSlot,
    LayoutPlan, Margins, Measure, Padding, Placement, Row, SizeSpec, Visibility,
};
pub use primitives::{Point, Rect, Size};
