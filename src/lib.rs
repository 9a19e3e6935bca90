//! POSIX sort implementation in Rust
//!
//! Sorts lines of text from files or standard input under the locale's
//! collation rules, with merge and order-check modes. The collation rule is
//! fixed once at startup and every ordering decision in a run goes through
//! it.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod check;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod locale;

// Re-export commonly used types
pub use config::{SortConfig, SortConfigBuilder};
pub use error::{SortError, SortResult};
pub use locale::Collator;

use crate::check::OrderChecker;
use crate::engine::SortEngine;
use crate::error::SortContext;
use crate::input::LineReader;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Exit codes. Failure is a single status, whatever went wrong.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Run one sort invocation under the given configuration
pub fn run(config: &SortConfig) -> SortResult<i32> {
    config.validate()?;
    let collator = Collator::from_env();

    if config.checking() {
        run_check(config, &collator)
    } else {
        run_sort(config, &collator)
    }
}

fn run_check(config: &SortConfig, collator: &Collator) -> SortResult<i32> {
    // validate() caps check mode at a single operand.
    let inputs = config.effective_inputs();
    let mut reader = LineReader::open(&inputs[0], config.line_limit)?;

    match OrderChecker::new(collator).check(&mut reader) {
        Ok(()) => Ok(EXIT_SUCCESS),
        // Quiet check keeps the failure status but says nothing.
        Err(SortError::Disorder { .. }) if config.check_quiet => Ok(EXIT_FAILURE),
        Err(e) => Err(e),
    }
}

fn run_sort(config: &SortConfig, collator: &Collator) -> SortResult<i32> {
    // Merge mode rides the same path: a stable full sort of pre-sorted
    // inputs produces the merged order.
    let engine = SortEngine::new(collator, config.line_limit);
    let lines = engine.collect_sorted(&config.effective_inputs())?;

    // The output file is created only after all input has been read, so
    // -o may name one of the inputs.
    let mut output: Box<dyn Write> = if let Some(output_file) = &config.output_file {
        Box::new(BufWriter::new(
            File::create(output_file).with_path(output_file)?,
        ))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    engine.write_lines(&lines, &mut output)?;
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).expect("Failed to write input");
        path.to_str().expect("path").to_string()
    }

    #[test]
    fn test_run_writes_sorted_output_to_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_file(temp_dir.path(), "input.txt", "banana\napple\ncherry\n");
        let output = temp_dir.path().join("output.txt");

        let config = SortConfig::default()
            .with_input_files(vec![input])
            .with_output_file(Some(output.to_str().expect("path").to_string()));

        let code = run(&config).expect("run failed");
        assert_eq!(code, EXIT_SUCCESS);

        let content = fs::read_to_string(&output).expect("Failed to read output");
        assert_eq!(content, "apple\nbanana\ncherry\n");
    }

    #[test]
    fn test_run_output_file_may_be_an_input() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_file(temp_dir.path(), "data.txt", "b\na\n");

        let config = SortConfig::default()
            .with_input_files(vec![input.clone()])
            .with_output_file(Some(input.clone()));

        let code = run(&config).expect("run failed");
        assert_eq!(code, EXIT_SUCCESS);

        let content = fs::read_to_string(&input).expect("Failed to read output");
        assert_eq!(content, "a\nb\n");
    }

    #[test]
    fn test_run_merge_mode_merges_sorted_inputs() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let first = write_file(temp_dir.path(), "first.txt", "a\nc\ne\n");
        let second = write_file(temp_dir.path(), "second.txt", "b\nd\nf\n");
        let output = temp_dir.path().join("output.txt");

        let config = SortConfig::default()
            .with_merge(true)
            .with_input_files(vec![first, second])
            .with_output_file(Some(output.to_str().expect("path").to_string()));

        let code = run(&config).expect("run failed");
        assert_eq!(code, EXIT_SUCCESS);

        let content = fs::read_to_string(&output).expect("Failed to read output");
        assert_eq!(content, "a\nb\nc\nd\ne\nf\n");
    }

    #[test]
    fn test_run_missing_input_creates_no_output() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir
            .path()
            .join("missing.txt")
            .to_str()
            .expect("path")
            .to_string();
        let output = temp_dir.path().join("output.txt");

        let config = SortConfig::default()
            .with_input_files(vec![missing])
            .with_output_file(Some(output.to_str().expect("path").to_string()));

        let err = run(&config).unwrap_err();
        assert!(matches!(err, SortError::SourceUnavailable { .. }));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(!output.exists());
    }

    #[test]
    fn test_run_check_sorted_input() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_file(temp_dir.path(), "sorted.txt", "a\nb\nc\n");

        let config = SortConfig::default()
            .with_check(true)
            .with_input_files(vec![input]);

        assert_eq!(run(&config).expect("run failed"), EXIT_SUCCESS);
    }

    #[test]
    fn test_run_check_reports_disorder() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_file(temp_dir.path(), "unsorted.txt", "b\na\n");

        let config = SortConfig::default()
            .with_check(true)
            .with_input_files(vec![input]);

        let err = run(&config).unwrap_err();
        match &err {
            SortError::Disorder { line, .. } => assert_eq!(*line, 2),
            other => panic!("expected Disorder, got {other:?}"),
        }
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_run_quiet_check_fails_silently() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_file(temp_dir.path(), "unsorted.txt", "b\na\n");

        let config = SortConfig {
            check_quiet: true,
            input_files: vec![input],
            ..Default::default()
        };

        // Disorder is a plain failure status, not a diagnostic.
        assert_eq!(run(&config).expect("run failed"), EXIT_FAILURE);
    }

    #[test]
    fn test_run_quiet_check_still_reports_missing_source() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir
            .path()
            .join("missing.txt")
            .to_str()
            .expect("path")
            .to_string();

        let config = SortConfig {
            check_quiet: true,
            input_files: vec![missing],
            ..Default::default()
        };

        let err = run(&config).unwrap_err();
        assert!(matches!(err, SortError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_run_rejects_check_with_merge() {
        let config = SortConfig {
            check: true,
            merge: true,
            ..Default::default()
        };

        let err = run(&config).unwrap_err();
        assert!(matches!(err, SortError::Usage(_)));
    }

    #[test]
    fn test_run_empty_input_writes_empty_output() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_file(temp_dir.path(), "empty.txt", "");
        let output = temp_dir.path().join("output.txt");

        let config = SortConfig::default()
            .with_input_files(vec![input])
            .with_output_file(Some(output.to_str().expect("path").to_string()));

        assert_eq!(run(&config).expect("run failed"), EXIT_SUCCESS);
        assert_eq!(fs::read_to_string(&output).expect("read"), "");
    }
}
