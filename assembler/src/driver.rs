use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{Level, debug, error, event, span, warn};

use crate::{
    error::{FatalError, Warning},
    output::HexImageWriter,
    parser::assemble_line,
};

/// Longest line (in bytes, without its terminator) taken from the input.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Longer lines are cut to this many bytes; the rest is dropped.
    pub max_line_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { max_line_length: DEFAULT_MAX_LINE_LENGTH }
    }
}

/// What happened during a run. Line errors never fail the run, so this is
/// the only place they show up after the fact.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub lines:    usize,
    pub words:    usize,
    pub rejected: usize,
    pub warnings: usize,
}

fn report(line: usize, warnings: &mut Vec<Warning>, summary: &mut Summary) {
    for w in warnings.drain(..) {
        warn!(line, "{w}");
        summary.warnings += 1;
    }
}

/// Assemble every line of `input` into a hex image on `output`.
pub fn assemble_stream<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    options: &Options,
) -> Result<Summary, FatalError> {
    let mut image = HexImageWriter::new(output).map_err(FatalError::Write)?;
    let mut summary = Summary::default();
    let mut warnings = Vec::new();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw).map_err(FatalError::Read)? == 0 {
            break;
        }
        summary.lines += 1;
        let line_number = summary.lines;

        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        if raw.len() > options.max_line_length {
            warnings.push(Warning::LineTruncated {
                limit:  options.max_line_length,
                length: raw.len(),
            });
            raw.truncate(options.max_line_length);
        }
        let text = String::from_utf8_lossy(&raw);

        let result = assemble_line(&text, &mut warnings);
        report(line_number, &mut warnings, &mut summary);
        match result {
            Ok(Some(word)) => {
                debug!(line = line_number, "{word:05X}");
                image.push(word).map_err(FatalError::Write)?;
            }
            Ok(None) => (),
            Err(e) => {
                error!(line = line_number, "{e}");
                summary.rejected += 1;
            }
        }
    }

    summary.words = image.finish().map_err(FatalError::Write)?;
    Ok(summary)
}

/// Opens the input before creating the output, so a missing input never
/// leaves an empty image behind.
pub fn assemble_file(input: &Path, output: &Path, options: &Options) -> Result<Summary, FatalError> {
    let span = span!(Level::INFO, "assemble", input = %input.display());
    let _enter = span.enter();

    let source = OpenOptions::new()
        .read(true)
        .open(input)
        .map_err(|e| FatalError::OpenInput { path: input.to_owned(), source: e })?;
    let sink = File::create(output)
        .map_err(|e| FatalError::OpenOutput { path: output.to_owned(), source: e })?;

    let summary = assemble_stream(BufReader::new(source), BufWriter::new(sink), options)?;
    event!(
        Level::INFO,
        words = summary.words,
        rejected = summary.rejected,
        warnings = summary.warnings,
        "assembled {} lines",
        summary.lines
    );
    Ok(summary)
}
