//! Error types for area computation and dig plan parsing.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` derives the
//! `Display` and `std::error::Error` impls we would otherwise write by hand,
//! straight from the `#[error("...")]` attributes.

use thiserror::Error;

/// Why an area could not be computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AreaError {
    #[error("a polygon needs at least 3 vertices, got {count}")]
    InvalidInput { count: usize },

    #[error("bounding box is degenerate ({width} x {height})")]
    DegenerateBoundingBox { width: f64, height: f64 },

    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("vertex {index} is not on the integer lattice")]
    NonLatticeVertex { index: usize },

    #[error("lattice cell count does not fit in 64 bits")]
    Overflow,
}

/// Why a dig plan could not be parsed. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DigPlanError {
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: unknown direction {found:?}")]
    UnknownDirection { line: usize, found: String },

    #[error("line {line}: invalid distance {found:?}")]
    InvalidDistance { line: usize, found: String },

    #[error("line {line}: invalid color code {found:?}")]
    InvalidColor { line: usize, found: String },

    #[error("dig plan has no steps")]
    Empty,

    #[error("dig plan ends at ({x}, {y}) instead of returning to its start")]
    NotClosed { x: i64, y: i64 },

    #[error(transparent)]
    Area(#[from] AreaError),
}
