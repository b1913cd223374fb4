//! Flow layout for tags.
//!
//! Items flow left to right and wrap into rows, like inline text. In SHRINK
//! mode the rows are capped and a trailing "more" indicator replaces
//! whatever does not fit.
//!
//! # Architecture
//!
//! ```text
//! rows    - greedy row partition (Row Builder)
//! shrink  - two-pass truncation plan (Shrink Planner)
//! align   - row offset + per-item bounds (Row Aligner)
//! engine  - plan -> rows -> placements (Layout Engine)
//! cache   - plan memoization across frames
//! ```

pub mod align;
pub mod cache;
pub mod constraints;
pub mod engine;
pub mod item;
pub mod length;
pub mod rows;
pub mod shrink;

// Re-export core types
pub use align::{place_row, row_offset};
pub use cache::{FlowState, PLAN_MAX_AGE, PlanCache, PlanKey, content_hash};
pub use constraints::{ContainerConstraints, SizeSpec};
pub use engine::{FlowLayout, FlowLayoutResult, Placement};
pub use item::{Item, Margins, Measure, Visibility};
pub use length::{Alignment, Padding};
pub use rows::{ItemSlot, Row, RowBuilder, build_rows, content_size};
pub use shrink::{LayoutPlan, MAX_PASSES, PassGuard, ShrinkPlanner};
