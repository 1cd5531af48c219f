//! `conv-ops`: output shape and operation counts of one 2D convolution layer.
//!
//! ```text
//! $ conv-ops 3 32 32 16 3 3 1 1
//! 16
//! 32
//! 32
//! 425984
//! 442368
//! 0
//! ```

mod args;

use crate::args::{Invocation, USAGE, parse_invocation};
use conv_ops::{ConvLayerReport, compute};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let invocation = parse_invocation(std::env::args_os())?;

    let stdout = std::io::stdout();
    run(invocation, &mut stdout.lock())
}

fn run<W: Write>(
    invocation: Invocation,
    out: &mut W,
) -> anyhow::Result<()> {
    let spec = match invocation {
        Invocation::Usage => {
            tracing::debug!("wrong argument count");
            writeln!(out, "{USAGE}")?;
            return Ok(());
        }
        Invocation::Run(spec) => spec,
    };
    tracing::debug!(?spec, "evaluating layer");

    let result = compute(&spec)?;
    write!(out, "{}", ConvLayerReport::from(result))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conv_ops::{ConvLayerSpec, ConvOpsError};

    fn run_to_string(invocation: Invocation) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(invocation, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_run_prints_report() {
        let spec = ConvLayerSpec::new(3, 7, 7, 2, 3, 3, 2, 0);
        let out = run_to_string(Invocation::Run(spec)).unwrap();
        assert_eq!(out, "2\n3\n3\n468\n486\n0\n");
    }

    #[test]
    fn test_run_prints_usage() {
        let out = run_to_string(Invocation::Usage).unwrap();
        assert_eq!(out, format!("{USAGE}\n"));
    }

    #[test]
    fn test_zero_stride_prints_nothing() {
        let mut out = Vec::new();
        let err = run(
            Invocation::Run(ConvLayerSpec::new(3, 32, 32, 16, 3, 3, 0, 1)),
            &mut out,
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConvOpsError>(),
            Some(&ConvOpsError::ZeroStride)
        );
        assert!(out.is_empty());
    }
}
