//! # shoelace
//!
//! Polygon area with the shoelace formula, plus lattice-cell counting modes
//! for polygons whose integer vertices stand for grid cells.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! ## Logging
//!
//! The library never prints. Bounding boxes, adjusted vertices and sums go
//! through the `log` facade at `debug`/`trace` level; install any logger to
//! see them.

pub mod area;
pub mod dig_plan;
pub mod error;
pub mod geometry;

// Re-export common types at crate root for convenience.
pub use area::{
    cell_bump_edgewise, cell_bump_rounded, cell_bump_simplified, continuous_area,
    lattice_cell_count, polygon_area, AreaMode,
};
pub use dig_plan::{DigPlan, DigStep, Direction};
pub use error::{AreaError, DigPlanError};
pub use geometry::{BoundingBox, Point, Polygon};
