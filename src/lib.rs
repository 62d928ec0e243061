//! A segmented progress bar for egui.
//!
//! The track is split into coloured segments, one per sub-goal, whose widths follow their magnitudes.
//! Progress fills the segments left to right and steps between values with a short eased animation.

pub mod animation;
pub mod geometry;
pub mod progress;
pub mod segment;
pub mod slot;
pub mod style;
pub mod ui;

pub use segment::Segment;
pub use style::{BarStyle, BarVariant};
pub use ui::widgets::segment_progress_bar::SegmentProgressBar;
