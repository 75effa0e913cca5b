//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Lua expression
//! source into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using an ordered table of regex patterns
//! - Reclassification of `nil`, `true`, `false`, `and` and `or`
//! - Numeric and quoted string literals, captured as raw text
//! - Whitespace, plus comments and long strings via external scanners

pub mod lexer;
pub mod scanners;
pub mod tokens;

#[cfg(test)]
mod tests;
