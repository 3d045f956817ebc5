//! Star lines shared across CLI tests.

#![allow(dead_code)]

pub const SIRIUS: &str = "10 20 30 40 50 60 25 5 Sirius";
pub const MINIMAL: &str = "1 2 3 4 5 6 7";
pub const ORIGIN: &str = "0 0 0 0 0 0 10 1 Origin";
pub const TOO_SHORT: &str = "1 2 3";
