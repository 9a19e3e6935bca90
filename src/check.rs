//! Verification that a source is already in sorted order

use crate::error::{SortError, SortResult};
use crate::input::{Line, LineReader};
use crate::locale::Collator;
use std::cmp::Ordering;

/// Streaming order check over a single source
pub struct OrderChecker<'a> {
    collator: &'a Collator,
}

impl<'a> OrderChecker<'a> {
    pub fn new(collator: &'a Collator) -> Self {
        Self { collator }
    }

    /// Read the source once, comparing each line with its predecessor. The
    /// first line that collates below its predecessor fails the check with
    /// that line's 1-based number, and reading stops there. Equal adjacent
    /// lines are in order; an empty or single-line source is sorted.
    pub fn check(&self, reader: &mut LineReader) -> SortResult<()> {
        let mut prev: Option<Line> = None;

        while let Some(line) = reader.next_line()? {
            if let Some(ref p) = prev {
                if self.collator.compare(line.as_bytes(), p.as_bytes()) == Ordering::Less {
                    return Err(SortError::disorder(reader.name(), reader.line_no()));
                }
            }
            prev = Some(line);
        }

        Ok(())
    }
}
