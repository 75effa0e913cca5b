//! Hooks for the scanners the lexer does not implement itself.
//!
//! Comments and long-bracket strings are recognised by the embedding system.
//! Both hooks share one contract: given the whole source and a byte offset,
//! return the byte offset where the recognised construct ends, or `None`.

use std::fmt::Debug;

pub trait ExternalScanner {
    fn scan(&self, source: &str, pos: usize) -> Option<usize>;
}

impl<F> ExternalScanner for F
where
    F: Fn(&str, usize) -> Option<usize>,
{
    fn scan(&self, source: &str, pos: usize) -> Option<usize> {
        self(source, pos)
    }
}

/// The pair of external scanners consulted at every token boundary.
#[derive(Default)]
pub struct Scanners {
    comment: Option<Box<dyn ExternalScanner>>,
    long_string: Option<Box<dyn ExternalScanner>>,
}

impl Debug for Scanners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanners")
            .field("comment", &self.comment.is_some())
            .field("long_string", &self.long_string.is_some())
            .finish()
    }
}

impl Scanners {
    /// Scanners that never match anything.
    pub fn none() -> Self {
        Scanners::default()
    }

    pub fn with_comment<S: ExternalScanner + 'static>(mut self, scanner: S) -> Self {
        self.comment = Some(Box::new(scanner));
        self
    }

    pub fn with_long_string<S: ExternalScanner + 'static>(mut self, scanner: S) -> Self {
        self.long_string = Some(Box::new(scanner));
        self
    }

    pub fn scan_comment(&self, source: &str, pos: usize) -> Option<usize> {
        run_scanner(self.comment.as_deref(), source, pos)
    }

    pub fn scan_long_string(&self, source: &str, pos: usize) -> Option<usize> {
        run_scanner(self.long_string.as_deref(), source, pos)
    }
}

// A result must advance and land on a char boundary inside the source.
fn run_scanner(scanner: Option<&dyn ExternalScanner>, source: &str, pos: usize) -> Option<usize> {
    let end = scanner?.scan(source, pos)?;

    if end > pos && end <= source.len() && source.is_char_boundary(end) {
        Some(end)
    } else {
        log::debug!("ignoring external scanner result {} at offset {}", end, pos);
        None
    }
}
