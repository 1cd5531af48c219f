//! # Argument Adapter
//!
//! Translates the eight positional arguments into a [`ConvLayerSpec`].

use clap::Parser;
use clap::error::ErrorKind;
use conv_ops::ConvLayerSpec;
use std::ffi::OsString;

/// Number of positional arguments a layer takes.
pub const ARG_COUNT: usize = 8;

/// One-line usage message, printed when the argument count is wrong.
pub const USAGE: &str = "Usage: conv-ops c_in h_in w_in n_filt h_filt w_filt s p";

/// Compute the output shape and operation count of a convolution layer.
///
/// Prints the output channel count, output height, output width, and the
/// number of additions, multiplications, and divisions performed; one
/// integer per line.
#[derive(Parser, Debug)]
#[command(
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Input channel count.
    #[arg(allow_negative_numbers = true)]
    c_in: i64,

    /// Input height.
    #[arg(allow_negative_numbers = true)]
    h_in: i64,

    /// Input width.
    #[arg(allow_negative_numbers = true)]
    w_in: i64,

    /// Number of filters in the convolution layer.
    #[arg(allow_negative_numbers = true)]
    n_filt: i64,

    /// Filter height.
    #[arg(allow_negative_numbers = true)]
    h_filt: i64,

    /// Filter width.
    #[arg(allow_negative_numbers = true)]
    w_filt: i64,

    /// Stride of the convolution filters.
    #[arg(allow_negative_numbers = true)]
    s: i64,

    /// Padding on each of the four input map sides.
    #[arg(allow_negative_numbers = true)]
    p: i64,
}

impl From<Args> for ConvLayerSpec {
    fn from(args: Args) -> Self {
        ConvLayerSpec::new(
            args.c_in, args.h_in, args.w_in, args.n_filt, args.h_filt, args.w_filt, args.s, args.p,
        )
    }
}

/// What a command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Evaluate a layer.
    Run(ConvLayerSpec),

    /// Wrong argument count; print [`USAGE`].
    Usage,
}

/// Parse a full command line, program name included.
///
/// The argument count is checked before any value is parsed: anything other
/// than [`ARG_COUNT`] arguments (``--help`` included) yields
/// [`Invocation::Usage`]. With the right count, values which are not
/// integers are errors.
pub fn parse_invocation<I, T>(argv: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() != ARG_COUNT + 1 {
        return Ok(Invocation::Usage);
    }

    match Args::try_parse_from(argv) {
        Ok(args) => Ok(Invocation::Run(args.into())),
        Err(err) => match err.kind() {
            ErrorKind::MissingRequiredArgument | ErrorKind::TooManyValues => Ok(Invocation::Usage),
            _ => Err(err),
        },
    }
}
