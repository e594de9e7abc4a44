use clap::{ErrorKind, Parser};

use crate::error::GenResult;

/// Print random points of the unit disk with their Gaussian density, followed by the
/// factor that normalizes the densities to sum to one.
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Cli {
    /// number of samples to generate
    #[clap(value_parser)]
    pub count: u64,
}

impl Cli {
    /// Parses arguments, exiting only for `--help` and `--version`.
    pub fn try_from_args<I, T>(args: I) -> GenResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => e.into(),
        })
    }
}
