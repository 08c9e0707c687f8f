//! Assembler for an 18-bit, 16-register custom ISA.
//!
//! Each source line is assembled on its own into at most one word; the
//! words are written as a Logisim "v2.0 raw" hex image. There is no
//! symbol table, so labels are reported and skipped.

pub mod catalog;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod operand;
pub mod output;
pub mod parser;

pub use driver::{DEFAULT_MAX_LINE_LENGTH, Options, Summary, assemble_file, assemble_stream};
pub use encoder::Word;
pub use error::{AsmError, FatalError, Warning};
pub use parser::assemble_line;
