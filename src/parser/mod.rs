//! Parser module for building expression trees.
//!
//! This module contains the parser that transforms a stream of tokens into
//! an expression tree. It uses precedence climbing over NUD (null
//! denotation) and LED (left denotation) lookup tables:
//!
//! - Primary expressions: identifiers, literals, `nil`/`true`/`false`, `...`
//! - Binary expressions, bound by the fixed precedence table in `lookups`
//! - Single expressions, or chunks of juxtaposed expressions
//!
//! Parsing stops at the first error; no partial tree is produced.

pub mod expr;
pub mod lookups;
pub mod parser;
