//! Settings for a single lex-and-parse run.

use crate::{
    lexer::scanners::{ExternalScanner, Scanners},
    parser::parser::DEFAULT_MAX_DEPTH,
};

#[derive(Debug)]
pub struct ParseOptions {
    /// Name used in positions and diagnostics; `shell` when unset.
    pub file_name: Option<String>,
    pub scanners: Scanners,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            file_name: None,
            scanners: Scanners::none(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        ParseOptions::default()
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn comment_scanner<S: ExternalScanner + 'static>(mut self, scanner: S) -> Self {
        self.scanners = self.scanners.with_comment(scanner);
        self
    }

    pub fn long_string_scanner<S: ExternalScanner + 'static>(mut self, scanner: S) -> Self {
        self.scanners = self.scanners.with_long_string(scanner);
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
