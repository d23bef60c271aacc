//! Transcript output for print-demonstration units

use std::io::{self, Write};

/// Write each line followed by a newline, then flush
pub fn write_transcript<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
