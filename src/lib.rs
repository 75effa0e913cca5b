#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::{
    ast::ast::{Chunk, Expr},
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize_with_scanners,
    options::ParseOptions,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod options;
pub mod parser;

extern crate regex;

/// A byte offset into a source, plus the source's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses `source` as exactly one expression.
pub fn parse_expression(source: &str) -> Result<Expr, Error> {
    parse_expression_with(source, &ParseOptions::default())
}

pub fn parse_expression_with(source: &str, options: &ParseOptions) -> Result<Expr, Error> {
    let file = options.file_name.clone();
    let tokens = tokenize_with_scanners(String::from(source), file.clone(), &options.scanners)?;
    parser::parser::parse_with_depth(tokens, file_rc(file), options.max_depth)
}

/// Parses `source` as a chunk of zero or more expressions.
pub fn parse_chunk(source: &str) -> Result<Chunk, Error> {
    parse_chunk_with(source, &ParseOptions::default())
}

pub fn parse_chunk_with(source: &str, options: &ParseOptions) -> Result<Chunk, Error> {
    let file = options.file_name.clone();
    let tokens = tokenize_with_scanners(String::from(source), file.clone(), &options.scanners)?;
    parser::parser::parse_chunk_with_depth(tokens, file_rc(file), options.max_depth)
}

fn file_rc(file: Option<String>) -> Rc<String> {
    Rc::new(file.unwrap_or_else(|| String::from("shell")))
}

/// Finds the line holding byte offset `position`.
///
/// Returns the 1-based line number, the line's text and the 0-based column.
/// Offsets at or past the end of the source resolve to the end of the last line.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(content.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    // End of input: either just after a newline or at the end of the last line
    match content.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: DanglingOperator (Operator `+` is missing its right operand)
/// -> shell
///   |
/// 1 | a +
///   | --^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
