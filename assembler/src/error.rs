use std::{io, path::PathBuf};
use thiserror::Error;

use crate::catalog::Mnemonic;

/// A problem that stops a single line from producing a word.
///
/// The line is skipped and assembly continues with the next one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AsmError {
    #[error("unknown opcode '{0}'")]
    UnknownOpcode(String),

    #[error("not enough operands for {0}")]
    NotEnoughOperands(Mnemonic),

    #[error("invalid register '{token}' in {mnemonic}")]
    InvalidRegister { mnemonic: Mnemonic, token: String },
}

/// Something suspicious that still lets the line be processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Warning {
    #[error("label '{0}' ignored (label support not implemented)")]
    LabelIgnored(String),

    #[error("immediate '{0}' parsed partially")]
    PartialImmediate(String),

    #[error("line longer than {limit} bytes truncated ({length} bytes)")]
    LineTruncated { limit: usize, length: usize },
}

/// Failures that end the whole run. The underlying I/O error is the
/// `source`, so print with `{:#}` (anyhow) to see it.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("unable to open input file `{}`", path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("unable to open output file `{}`", path.display())]
    OpenOutput { path: PathBuf, source: io::Error },

    #[error("error reading source")]
    Read(#[source] io::Error),

    #[error("error writing image")]
    Write(#[source] io::Error),
}
