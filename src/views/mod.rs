//! View builders
//!
//! Each builder reads the store and one settled [`SelectionState`] and
//! returns a renderable payload. Builders never mutate anything.
//!
//! [`SelectionState`]: crate::state::SelectionState

pub mod map;
pub mod palette;
pub mod stats;
pub mod timeline;
pub mod trend;

pub use map::{build_map, BorderOverlay, MapPayload, Region};
pub use palette::{ColorScale, Rgb};
pub use stats::{build_stats, StatsPayload};
pub use timeline::{build_timeline, TimelinePayload};
pub use trend::{build_trend, LineSeries, TrendPayload};
