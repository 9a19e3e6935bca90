//! In-memory sort engine: gather every line, order, write

use crate::error::SortResult;
use crate::input::{Line, LineReader};
use crate::locale::Collator;
use std::io::Write;

/// Sorts the full contents of a set of sources in memory. The whole input
/// set is materialized at once; there is no streaming path.
pub struct SortEngine<'a> {
    collator: &'a Collator,
    line_limit: usize,
}

impl<'a> SortEngine<'a> {
    pub fn new(collator: &'a Collator, line_limit: usize) -> Self {
        Self {
            collator,
            line_limit,
        }
    }

    /// Drain every source, strictly in the order given, into one collection
    /// and sort it. A source that cannot be opened or read aborts the whole
    /// operation; partial input is never returned.
    pub fn collect_sorted(&self, inputs: &[String]) -> SortResult<Vec<Line>> {
        let mut lines = Vec::new();
        for name in inputs {
            let mut reader = LineReader::open(name, self.line_limit)?;
            while let Some(line) = reader.next_line()? {
                lines.push(line);
            }
        }

        // Stable: lines that collate equal keep the order they were read in.
        lines.sort_by(|a, b| self.collator.compare(a.as_bytes(), b.as_bytes()));
        Ok(lines)
    }

    /// Write lines in order, a single terminator after each, and flush.
    pub fn write_lines(&self, lines: &[Line], output: &mut dyn Write) -> SortResult<()> {
        for line in lines {
            output.write_all(line.as_bytes())?;
            output.write_all(b"\n")?;
        }
        output.flush()?;
        Ok(())
    }
}
