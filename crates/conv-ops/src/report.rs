//! # Result Report
//!
//! Integer rendering of a [`ConvLayerResult`]: one value per line, in the
//! order ``c_out, h_out, w_out, adds, muls, divs``.

use crate::cost::ConvLayerResult;
use core::fmt;

/// Truncate toward zero; never rounds.
///
/// Normalizes `-0.0` to `0.0` so it renders as `0`.
pub fn truncate(value: f64) -> f64 {
    value.trunc() + 0.0
}

/// Printable, integer-truncated view of a [`ConvLayerResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvLayerReport {
    values: [f64; 6],
}

impl ConvLayerReport {
    /// Number of report lines.
    pub const LINES: usize = 6;

    /// The truncated values, in print order.
    pub fn values(&self) -> [f64; 6] {
        self.values
    }
}

impl From<&ConvLayerResult> for ConvLayerReport {
    fn from(result: &ConvLayerResult) -> Self {
        Self {
            values: [
                result.c_out as f64,
                result.h_out,
                result.w_out,
                result.adds,
                result.muls,
                result.divs,
            ]
            .map(truncate),
        }
    }
}

impl From<ConvLayerResult> for ConvLayerReport {
    fn from(result: ConvLayerResult) -> Self {
        (&result).into()
    }
}

impl fmt::Display for ConvLayerReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        // Values are already integral; `{:.0}` prints every digit, past the i64 range too.
        for value in self.values {
            writeln!(f, "{value:.0}")?;
        }
        Ok(())
    }
}
