//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON) and stderr diagnostics
//!
//! ## Structure
//!
//! - `cli` - Argument model
//! - `output` - Output rendering and diagnostics

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, Section};
pub use output::Diagnostics;
