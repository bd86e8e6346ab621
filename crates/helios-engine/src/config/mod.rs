//! Render-configuration resolution.
//!
//! Responsibilities:
//! - store the base rendering parameters ([`RenderSettings`])
//! - derive consistent secondary parameters on demand (absolute resolution,
//!   parallel-tile size, window scale) via the read-only [`RenderConfig`]
//!   registry
//! - keep the tile-size divisor search ([`divisor_tile_size`]) isolated and
//!   pure so the tiled renderer's partitioning guarantee is testable on its own

mod registry;
mod schedule;
mod settings;
mod tile;

pub use registry::RenderConfig;
pub use schedule::SampleSchedule;
pub use settings::{RenderSettings, SaveFormat, BASE_HEIGHT, BASE_WIDTH};
pub use tile::divisor_tile_size;
