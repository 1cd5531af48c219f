//! # Convolution Shape Utilities
//!
//! Output extent of a convolution along one spatial axis.

use crate::error::ConvOpsError;

/// Predict the output extent of a convolution along one axis.
///
/// ```text
/// out_size = ((in_size - kernel_size + 2*padding) / stride) + 1
/// ```
///
/// The division is true division; a configuration which does not evenly
/// tile the padded input yields a fractional extent. No flooring and no
/// clamping is applied, so degenerate configurations (kernel larger than
/// the padded input) produce values <= 0.
///
/// # Reference
///
/// - [conv_arithmetic diagram](https://github.com/vdumoulin/conv_arithmetic/blob/master/README.md)
///   visual explanations of these convolution parameters.
///
/// # Arguments
///
/// - `input_size`: The input dimension size.
/// - `kernel_size`: The kernel size.
/// - `stride`: The stride of the convolution, must be != 0.
/// - `padding`: The padding of the convolution, added evenly to both sides of the input.
///
/// # Returns
///
/// The (possibly fractional) output extent; or [`ConvOpsError::ZeroStride`].
pub fn conv_output_extent(
    input_size: i64,
    kernel_size: i64,
    stride: i64,
    padding: i64,
) -> Result<f64, ConvOpsError> {
    if stride == 0 {
        return Err(ConvOpsError::ZeroStride);
    }

    // i128 keeps the numerator exact for every i64 input.
    let span = i128::from(input_size) - i128::from(kernel_size) + 2 * i128::from(padding);

    Ok(span as f64 / stride as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamcrest::prelude::*;

    #[test]
    fn test_same_padding_preserves_extent() {
        assert_eq!(conv_output_extent(32, 3, 1, 1), Ok(32.0));
        assert_eq!(conv_output_extent(5, 5, 1, 0), Ok(1.0));
        assert_eq!(conv_output_extent(7, 3, 2, 0), Ok(3.0));
    }

    #[test]
    fn test_fractional_extent_is_not_floored() {
        assert_eq!(conv_output_extent(6, 3, 2, 0), Ok(2.5));
        assert_that!(
            conv_output_extent(10, 3, 3, 0).unwrap(),
            is(close_to(10.0 / 3.0, 1e-12))
        );
    }

    #[test]
    fn test_degenerate_extent_is_not_clamped() {
        assert_eq!(conv_output_extent(2, 5, 1, 0), Ok(-2.0));
    }

    #[test]
    fn test_zero_stride() {
        assert_eq!(
            conv_output_extent(32, 3, 0, 1),
            Err(ConvOpsError::ZeroStride)
        );
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let extent = conv_output_extent(i64::MAX, i64::MIN, 1, i64::MAX).unwrap();
        assert_eq!(extent, 2f64.powi(65));
    }

    #[test]
    fn test_matches_float_reference() {
        fn reference(
            input_size: i64,
            kernel_size: i64,
            stride: i64,
            padding: i64,
        ) -> f64 {
            let input_size = input_size as f64;
            let kernel_size = kernel_size as f64;
            let stride = stride as f64;
            let padding = padding as f64;

            (input_size - kernel_size + 2.0 * padding) / stride + 1.0
        }

        for input_size in 1..10 {
            for kernel_size in 1..4 {
                for stride in 1..4 {
                    for padding in 0..3 {
                        assert_eq!(
                            conv_output_extent(input_size, kernel_size, stride, padding),
                            Ok(reference(input_size, kernel_size, stride, padding)),
                        );
                    }
                }
            }
        }
    }
}
