//! Logisim "v2.0 raw" memory image writer.

use std::io::{self, Write};

use crate::encoder::Word;

pub const HEADER: &str = "v2.0 raw";
pub const WORDS_PER_LINE: usize = 8;

/// Streams words as `XXXXX ` groups, breaking the line after every
/// [`WORDS_PER_LINE`] words.
pub struct HexImageWriter<W: Write> {
    out:   W,
    count: usize,
}

impl<W: Write> HexImageWriter<W> {
    /// Writes the header straight away.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{HEADER}")?;
        Ok(HexImageWriter { out, count: 0 })
    }

    pub fn push(&mut self, word: Word) -> io::Result<()> {
        write!(self.out, "{word:05X} ")?;
        self.count += 1;
        if self.count % WORDS_PER_LINE == 0 {
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Closes a partial last line and flushes. Returns the word count.
    pub fn finish(mut self) -> io::Result<usize> {
        if self.count % WORDS_PER_LINE != 0 {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(self.count)
    }
}
