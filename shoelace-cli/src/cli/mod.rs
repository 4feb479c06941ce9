//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `area` - Polygon area of a vertex list under one or all modes
//! - `dig` - Lagoon volume of a dig plan
//! - `modes` - List available area modes

pub mod area;
pub mod common;
pub mod dig;

pub use area::{cmd_area, cmd_modes};
pub use common::{CliError, InputFormat, OutputFormat};
pub use dig::cmd_dig;
