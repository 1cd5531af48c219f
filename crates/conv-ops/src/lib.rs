#![warn(missing_docs)]
//!# conv-ops - Convolution Layer Operation Counts
//!
//! Output shape and scalar operation counts of a single 2D convolution layer.
//!
//! ## Notable Components
//!
//! * [`cost`] - the cost model.
//!   * [`cost::ConvLayerSpec`] - layer description; a ``burn`` config.
//!   * [`cost::compute`] - output shape and ``adds / muls / divs``.
//! * [`shape`] - per-axis output extent.
//! * [`report`] - integer-truncated rendering of a result.
//! * [`compat`] - bridges from ``burn`` layer configs.
//!   * [`compat::conv2d`] - ``Conv2dConfig`` to [`cost::ConvLayerSpec`].
//!
//! ## Example
//!
//! ```
//! use conv_ops::cost::{ConvLayerSpec, compute};
//!
//! let result = compute(&ConvLayerSpec::new(1, 5, 5, 1, 5, 5, 1, 0)).unwrap();
//! assert_eq!(result.muls, 25.0);
//! assert_eq!(result.adds, 24.0);
//! ```

/// Test-only macro import.
#[cfg(test)]
#[allow(unused_imports)]
#[macro_use]
extern crate hamcrest;

pub mod compat;
pub mod cost;
pub mod error;
pub mod report;
pub mod shape;

pub use cost::{ConvLayerResult, ConvLayerSpec, compute};
pub use error::ConvOpsError;
pub use report::ConvLayerReport;
