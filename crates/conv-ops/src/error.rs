//! # Errors

use thiserror::Error;

/// Errors raised while building or evaluating a convolution cost model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvOpsError {
    /// The stride is zero; the output extent divides by the stride.
    #[error("division by zero: stride must be non-zero")]
    ZeroStride,

    /// A burn `Conv2dConfig` describes a convolution the cost model does not cover.
    #[error("unsupported conv2d config: {reason}")]
    UnsupportedConv2d {
        /// What made the config unsupported.
        reason: String,
    },
}

impl ConvOpsError {
    /// Build an [`ConvOpsError::UnsupportedConv2d`] error.
    pub fn unsupported<S: Into<String>>(reason: S) -> Self {
        Self::UnsupportedConv2d {
            reason: reason.into(),
        }
    }
}
