//! # Convolution Cost Model
//!
//! Closed-form output shape and scalar operation counts of a single 2D
//! convolution layer.
//!
//! ```text
//! h_out = (h_in - h_filt + 2*padding) / stride + 1
//! w_out = (w_in - w_filt + 2*padding) / stride + 1
//! c_out = n_filt
//!
//! muls = (c_in * h_filt * w_filt)     * h_out * w_out * n_filt
//! adds = (c_in * h_filt * w_filt - 1) * h_out * w_out * n_filt
//! divs = 0
//! ```
//!
//! Output extents are not floored; a fractional `h_out` or `w_out` flows
//! into the operation counts as-is.

use crate::error::ConvOpsError;
use crate::shape::conv_output_extent;
use burn::config::Config;
use serde::Serialize;

/// Single convolution layer description.
///
/// Stride and padding are uniform across both spatial axes.
#[derive(Config, Debug, PartialEq, Eq)]
pub struct ConvLayerSpec {
    /// Input channel count.
    pub c_in: i64,

    /// Input height.
    pub h_in: i64,

    /// Input width.
    pub w_in: i64,

    /// Number of filters; the output channel count.
    pub n_filt: i64,

    /// Filter height.
    pub h_filt: i64,

    /// Filter width.
    pub w_filt: i64,

    /// Stride along both spatial axes; must be non-zero.
    pub stride: i64,

    /// Zero-padding added to every side of both spatial axes.
    pub padding: i64,
}

impl ConvLayerSpec {
    /// Input shape as ``[c_in, h_in, w_in]``.
    pub fn input_shape(&self) -> [i64; 3] {
        [self.c_in, self.h_in, self.w_in]
    }

    /// Filter shape as ``[n_filt, c_in, h_filt, w_filt]``.
    pub fn filter_shape(&self) -> [i64; 4] {
        [self.n_filt, self.c_in, self.h_filt, self.w_filt]
    }
}

/// Output shape and operation counts of a [`ConvLayerSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvLayerResult {
    /// Output channel count; equal to `n_filt`.
    pub c_out: i64,

    /// Output height; may be fractional.
    pub h_out: f64,

    /// Output width; may be fractional.
    pub w_out: f64,

    /// Multiplications needed for one output value: ``c_in * h_filt * w_filt``.
    pub muls_per_filter: f64,

    /// Additions needed to reduce one output value: ``muls_per_filter - 1``.
    pub adds_per_filter: f64,

    /// Total additions across the output volume.
    pub adds: f64,

    /// Total multiplications across the output volume.
    pub muls: f64,

    /// Total divisions; always zero for a plain convolution.
    pub divs: f64,
}

impl ConvLayerResult {
    /// Output shape as ``[c_out, h_out, w_out]``.
    pub fn output_shape(&self) -> [f64; 3] {
        [self.c_out as f64, self.h_out, self.w_out]
    }
}

/// Per-output-value ``(muls, adds)``: ``c_in * h_filt * w_filt`` and one less.
///
/// Both are exact integers, converted to `f64` once; the `f64` product is
/// only used when the exact product overflows `i128`.
fn per_filter_counts(
    c_in: i64,
    h_filt: i64,
    w_filt: i64,
) -> (f64, f64) {
    let exact = i128::from(c_in)
        .checked_mul(i128::from(h_filt))
        .and_then(|n| n.checked_mul(i128::from(w_filt)));

    // Summing N products takes N - 1 additions.
    match exact.and_then(|n| Some((n, n.checked_sub(1)?))) {
        Some((muls, adds)) => (muls as f64, adds as f64),
        None => {
            let muls = c_in as f64 * h_filt as f64 * w_filt as f64;
            (muls, muls - 1.0)
        }
    }
}

/// Compute the output shape and operation counts of a convolution layer.
///
/// # Arguments
///
/// - `spec`: the layer description.
///
/// # Returns
///
/// The [`ConvLayerResult`]; or [`ConvOpsError::ZeroStride`] when `spec.stride == 0`.
#[tracing::instrument(level = "debug", ret, err)]
pub fn compute(spec: &ConvLayerSpec) -> Result<ConvLayerResult, ConvOpsError> {
    let h_out = conv_output_extent(spec.h_in, spec.h_filt, spec.stride, spec.padding)?;
    let w_out = conv_output_extent(spec.w_in, spec.w_filt, spec.stride, spec.padding)?;
    let c_out = spec.n_filt;

    let n_filt = spec.n_filt as f64;

    let (muls_per_filter, adds_per_filter) =
        per_filter_counts(spec.c_in, spec.h_filt, spec.w_filt);
    let muls = muls_per_filter * h_out * w_out * n_filt;
    let adds = adds_per_filter * h_out * w_out * n_filt;

    Ok(ConvLayerResult {
        c_out,
        h_out,
        w_out,
        muls_per_filter,
        adds_per_filter,
        adds,
        muls,
        divs: 0.0,
    })
}
