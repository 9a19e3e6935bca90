//! Configuration management for sort operations

use crate::error::{SortError, SortResult};

/// Default cap on the length of a single input line, in bytes. A line longer
/// than this is a hard error, never silently truncated.
pub const DEFAULT_LINE_LIMIT: usize = 16 * 1024 * 1024;

/// Main configuration structure for sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Check that input is already sorted instead of sorting (-c)
    pub check: bool,
    /// Like check, but without the disorder diagnostic (-C)
    pub check_quiet: bool,
    /// Merge already sorted files (-m)
    pub merge: bool,
    /// Reverse the sense of comparisons (-r, accepted but not applied)
    pub reverse: bool,
    /// Output only the first of equal lines (-u, accepted but not applied)
    pub unique: bool,
    /// Compare by numeric value (-n, accepted but not applied)
    pub numeric: bool,
    /// Fold lowercase into uppercase (-f, accepted but not applied)
    pub ignore_case: bool,
    /// Consider only blanks and alphanumerics (-d, accepted but not applied)
    pub dictionary_order: bool,
    /// Skip leading blanks in comparisons (-b, accepted but not applied)
    pub ignore_leading_blanks: bool,
    /// Ignore non-printing characters (-i, accepted but not applied)
    pub ignore_nonprinting: bool,
    /// Field separator character (-t, accepted but not applied)
    pub field_separator: Option<char>,
    /// Sort key definitions exactly as given on the command line (-k,
    /// accepted but not applied)
    pub keys: Vec<String>,
    /// Output file path (-o); None writes to stdout
    pub output_file: Option<String>,
    /// Input sources in command-line order; empty means stdin
    pub input_files: Vec<String>,
    /// Maximum accepted line length in bytes
    pub line_limit: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            check: false,
            check_quiet: false,
            merge: false,
            reverse: false,
            unique: false,
            numeric: false,
            ignore_case: false,
            dictionary_order: false,
            ignore_leading_blanks: false,
            ignore_nonprinting: false,
            field_separator: None,
            keys: Vec::new(),
            output_file: None,
            input_files: Vec::new(),
            line_limit: DEFAULT_LINE_LIMIT,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable check mode
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Enable merge mode
    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Set input files
    pub fn with_input_files(mut self, files: Vec<String>) -> Self {
        self.input_files = files;
        self
    }

    /// True when either check flag is set
    pub fn checking(&self) -> bool {
        self.check || self.check_quiet
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        self.input_files.is_empty() || (self.input_files.len() == 1 && self.input_files[0] == "-")
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }

    /// Input sources to read, with the stdin fallback applied
    pub fn effective_inputs(&self) -> Vec<String> {
        if self.input_files.is_empty() {
            vec!["-".to_string()]
        } else {
            self.input_files.clone()
        }
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.checking() && self.merge {
            return Err(SortError::usage("cannot use both --check and --merge"));
        }

        // The checker addresses exactly one source.
        if self.checking() && self.input_files.len() > 1 {
            return Err(SortError::usage(&format!(
                "extra operand '{}' not allowed with -c",
                self.input_files[1]
            )));
        }

        if self.line_limit == 0 {
            return Err(SortError::usage("line length limit must be positive"));
        }

        Ok(())
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    /// Enable check mode
    pub fn check(mut self) -> Self {
        self.config.check = true;
        self
    }

    /// Enable quiet check mode
    pub fn check_quiet(mut self) -> Self {
        self.config.check_quiet = true;
        self
    }

    /// Enable merge mode
    pub fn merge(mut self) -> Self {
        self.config.merge = true;
        self
    }

    /// Enable reverse ordering
    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    /// Enable unique output
    pub fn unique(mut self) -> Self {
        self.config.unique = true;
        self
    }

    /// Enable numeric comparison
    pub fn numeric(mut self) -> Self {
        self.config.numeric = true;
        self
    }

    /// Fold case in comparisons
    pub fn ignore_case(mut self) -> Self {
        self.config.ignore_case = true;
        self
    }

    /// Restrict comparisons to dictionary characters
    pub fn dictionary_order(mut self) -> Self {
        self.config.dictionary_order = true;
        self
    }

    /// Skip leading blanks in comparisons
    pub fn ignore_leading_blanks(mut self) -> Self {
        self.config.ignore_leading_blanks = true;
        self
    }

    /// Ignore non-printing characters
    pub fn ignore_nonprinting(mut self) -> Self {
        self.config.ignore_nonprinting = true;
        self
    }

    /// Set field separator
    pub fn field_separator(mut self, separator: char) -> Self {
        self.config.field_separator = Some(separator);
        self
    }

    /// Add a sort key definition
    pub fn key(mut self, keydef: String) -> Self {
        self.config.keys.push(keydef);
        self
    }

    /// Set output file
    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    /// Set input files
    pub fn input_files(mut self, files: Vec<String>) -> Self {
        self.config.input_files = files;
        self
    }

    /// Set the line length limit
    pub fn line_limit(mut self, limit: usize) -> Self {
        self.config.line_limit = limit;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
