//! Line input: owned line buffers read from files or standard input

use crate::error::{SortContext, SortError, SortResult};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

/// One input record, stored without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line(Vec<u8>);

impl Line {
    pub fn new(bytes: Vec<u8>) -> Self {
        Line(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line(s.as_bytes().to_vec())
    }
}

/// Sequential reader over one named source. `"-"` binds standard input,
/// anything else is opened as a file path. Lines come back in file order,
/// terminator stripped, and are counted 1-based for diagnostics.
pub struct LineReader {
    name: String,
    reader: Box<dyn BufRead>,
    line_no: usize,
    limit: usize,
}

impl LineReader {
    /// Open the named source. A source that cannot be opened reports its
    /// own name, never another source's.
    pub fn open(name: &str, limit: usize) -> SortResult<Self> {
        let reader: Box<dyn BufRead> = if name == "-" {
            Box::new(io::stdin().lock())
        } else {
            let file = File::open(name).with_source(name)?;
            Box::new(BufReader::new(file))
        };

        Ok(Self {
            name: name.to_string(),
            reader,
            line_no: 0,
            limit,
        })
    }

    /// Source name for diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based number of the most recently read line
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Read the next line, or None at end of input. The terminator is
    /// stripped; a final line without one is returned as-is. A line whose
    /// content exceeds the limit is a hard error, detected without ever
    /// buffering more than limit + 1 bytes.
    pub fn next_line(&mut self) -> SortResult<Option<Line>> {
        let mut buf = Vec::new();
        let cap = (self.limit as u64).saturating_add(1);
        let n = self
            .reader
            .by_ref()
            .take(cap)
            .read_until(b'\n', &mut buf)
            .with_path(&self.name)?;

        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        } else if buf.len() > self.limit {
            // Stopped at the cap, not at a terminator.
            return Err(SortError::line_too_long(
                &self.name,
                self.line_no,
                self.limit,
            ));
        }

        Ok(Some(Line::new(buf)))
    }
}

// Not derivable over the boxed reader; report name and position instead.
impl fmt::Debug for LineReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("name", &self.name)
            .field("line_no", &self.line_no)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
