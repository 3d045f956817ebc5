//! Domain Layer
//!
//! The core of StarData: validated star entries and the coordinate
//! derivations computed from them, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - `StarEntry`, the clamped star observation
//! - `services/` - Pure coordinate derivations (A/B/C, X/Y/Z)
//! - `ports/` - Interface definitions for persistence
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
