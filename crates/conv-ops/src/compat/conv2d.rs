//! # burn `Conv2d` Bridge
//!
//! Build a [`ConvLayerSpec`] from a burn [`Conv2dConfig`].

use crate::cost::ConvLayerSpec;
use crate::error::ConvOpsError;
use burn::nn::PaddingConfig2d;
use burn::nn::conv::Conv2dConfig;

fn to_i64(
    name: &str,
    value: usize,
) -> Result<i64, ConvOpsError> {
    i64::try_from(value)
        .map_err(|_| ConvOpsError::unsupported(format!("{name}={value} exceeds i64")))
}

impl ConvLayerSpec {
    /// Describe a burn [`Conv2dConfig`] applied to an input.
    ///
    /// ## Arguments
    ///
    /// - `input_shape`: ``[channels, height, width]``; `channels` must match
    ///   ``config.channels[0]``.
    /// - `config`: the convolution config.
    ///
    /// ## Returns
    ///
    /// The equivalent [`ConvLayerSpec`]; or [`ConvOpsError::UnsupportedConv2d`]
    /// for grouped, dilated, non-uniformly strided or padded, or
    /// ``PaddingConfig2d::Same`` convolutions.
    pub fn from_conv2d_config(
        input_shape: [usize; 3],
        config: &Conv2dConfig,
    ) -> Result<Self, ConvOpsError> {
        let [channels, height, width] = input_shape;
        let [c_in, n_filt] = config.channels;
        let [h_filt, w_filt] = config.kernel_size;

        if channels != c_in {
            return Err(ConvOpsError::unsupported(format!(
                "input has {channels} channels, config expects {c_in}"
            )));
        }
        if config.groups != 1 {
            return Err(ConvOpsError::unsupported(format!(
                "groups={}",
                config.groups
            )));
        }
        if config.dilation != [1, 1] {
            return Err(ConvOpsError::unsupported(format!(
                "dilation={:?}",
                config.dilation
            )));
        }

        let [stride_h, stride_w] = config.stride;
        if stride_h != stride_w {
            return Err(ConvOpsError::unsupported(format!(
                "non-uniform stride={:?}",
                config.stride
            )));
        }

        let padding = match &config.padding {
            PaddingConfig2d::Valid => 0,
            PaddingConfig2d::Explicit(pad_h, pad_w) if pad_h == pad_w => *pad_h,
            other => {
                return Err(ConvOpsError::unsupported(format!("padding={other:?}")));
            }
        };

        Ok(ConvLayerSpec::new(
            to_i64("c_in", c_in)?,
            to_i64("h_in", height)?,
            to_i64("w_in", width)?,
            to_i64("n_filt", n_filt)?,
            to_i64("h_filt", h_filt)?,
            to_i64("w_filt", w_filt)?,
            to_i64("stride", stride_h)?,
            to_i64("padding", padding)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::compute;
    use hamcrest::prelude::*;

    #[test]
    fn test_from_conv2d_config() {
        let config = Conv2dConfig::new([3, 16], [3, 3])
            .with_stride([1, 1])
            .with_padding(PaddingConfig2d::Explicit(1, 1))
            .with_bias(false);

        let spec = ConvLayerSpec::from_conv2d_config([3, 32, 32], &config).unwrap();
        assert_eq!(spec, ConvLayerSpec::new(3, 32, 32, 16, 3, 3, 1, 1));

        let result = compute(&spec).unwrap();
        assert_eq!(result.muls, 442368.0);
    }

    #[test]
    fn test_valid_padding() {
        let config = Conv2dConfig::new([3, 2], [3, 3]).with_stride([2, 2]);

        let spec = ConvLayerSpec::from_conv2d_config([3, 7, 7], &config).unwrap();
        assert_eq!(spec, ConvLayerSpec::new(3, 7, 7, 2, 3, 3, 2, 0));
    }

    #[test]
    fn test_unsupported_configs() {
        let base = Conv2dConfig::new([4, 8], [3, 3]);

        let unsupported = [
            (base.clone().with_groups(2), [4, 8, 8]),
            (base.clone().with_dilation([2, 2]), [4, 8, 8]),
            (base.clone().with_stride([1, 2]), [4, 8, 8]),
            (base.clone().with_padding(PaddingConfig2d::Same), [4, 8, 8]),
            (
                base.clone().with_padding(PaddingConfig2d::Explicit(1, 2)),
                [4, 8, 8],
            ),
            (base.clone(), [3, 8, 8]),
        ];

        for (config, input_shape) in unsupported {
            let err = ConvLayerSpec::from_conv2d_config(input_shape, &config).unwrap_err();
            assert_that!(
                err.to_string().starts_with("unsupported conv2d config"),
                is(equal_to(true))
            );
        }
    }
}
