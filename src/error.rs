//! Error types for sample generation.
use std::{error::Error, fmt::Display, io::Write};

pub type GenResult<T> = std::result::Result<T, GenError>;

#[derive(Debug)]
pub enum GenError {
    /// the sample count is missing or not a non-negative integer
    Argument(String),
    /// the densities summed to zero, so no scale factor exists
    DivisionByZero,
    /// writing the output failed
    Io(std::io::Error),
}

impl GenError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::Argument(_) => 2,
            GenError::DivisionByZero | GenError::Io(_) => 1,
        }
    }

    /// Writes the user-facing diagnostic, independent of the log filter.
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "gensamples: {}", self)?;
        out.flush()
    }
}

impl Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::Argument(m) => write!(f, "invalid argument: {}", m),
            GenError::DivisionByZero => {
                write!(f, "division by zero: density sum is 0, no scale factor")
            }
            GenError::Io(e) => write!(f, "output error: {}", e),
        }
    }
}

impl Error for GenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<clap::Error> for GenError {
    fn from(e: clap::Error) -> Self {
        Self::Argument(e.to_string())
    }
}
