//! Domain Services
//!
//! Stateless computations over entries.

pub mod coordinates;

pub use coordinates::{abc, round3, xyz, AbcRow, XyzRow};
