//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod entry_repository;

pub use entry_repository::{EntryRepository, LoadReport, SkippedLine};
