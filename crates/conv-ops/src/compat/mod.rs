//! # Compatibility
//!
//! Bridges from ``burn`` layer configs to the cost model.

pub mod conv2d;
