//! Parser implementation for building expression trees.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! Expressions are parsed by precedence climbing driven by NUD/LED lookup
//! tables that are filled from the fixed precedence table.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::{Chunk, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        PrecedenceEntry,
    },
};

/// Default bound on how deeply operands may nest.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// The main parser structure that maintains parsing state.
///
/// The parser exclusively owns its token stream. It tracks the current
/// position in that stream and the lookup tables that drive expression
/// parsing.
pub struct Parser {
    /// The list of tokens to parse, always terminated by a single EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for operator precedence entries
    binding_power_lookup: BPLookup,
    /// Current nesting depth of `parse_expr`
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.0)
                .unwrap_or(0);
            let at = Position(end, Rc::clone(&file));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span { start: at.clone(), end: at },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The position never moves past the trailing EOF token.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedTrailingToken {
                        found: token.describe(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Returns true if the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, entry: PrecedenceEntry, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, entry);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Enters one level of operand nesting.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.current_token().span.start.clone(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the current position in the source.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

fn new_parser(tokens: Vec<Token>, file: Rc<String>, max_depth: usize) -> Parser {
    let mut parser = Parser::new(tokens, file).with_max_depth(max_depth);
    create_token_lookups(&mut parser);
    parser
}

/// Parses a stream of tokens as exactly one expression.
///
/// Anything left over after the expression is an error; no partial tree is
/// ever returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Expr, Error> {
    parse_with_depth(tokens, file, DEFAULT_MAX_DEPTH)
}

pub fn parse_with_depth(tokens: Vec<Token>, file: Rc<String>, max_depth: usize) -> Result<Expr, Error> {
    let mut parser = new_parser(tokens, file, max_depth);
    log::debug!("parsing expression from {}", parser.file);

    let result = parse_expr(&mut parser, BindingPower::Default.level()).and_then(|expr| {
        parser.expect(TokenKind::EOF)?;
        Ok(expr)
    });

    match &result {
        Ok(expr) => log::debug!("parsed {}", expr),
        Err(error) => log::debug!("parsing failed: {}", error),
    }

    result
}

/// Parses a stream of tokens as a chunk: zero or more expressions written
/// one after another until EOF.
pub fn parse_chunk(tokens: Vec<Token>, file: Rc<String>) -> Result<Chunk, Error> {
    parse_chunk_with_depth(tokens, file, DEFAULT_MAX_DEPTH)
}

pub fn parse_chunk_with_depth(
    tokens: Vec<Token>,
    file: Rc<String>,
    max_depth: usize,
) -> Result<Chunk, Error> {
    let mut parser = new_parser(tokens, Rc::clone(&file), max_depth);
    log::debug!("parsing chunk from {}", parser.file);

    let mut body = vec![];

    while parser.has_tokens() {
        match parse_expr(&mut parser, BindingPower::Default.level()) {
            Ok(expr) => body.push(expr),
            Err(error) => {
                log::debug!("parsing failed: {}", error);
                return Err(error);
            }
        }
    }

    log::debug!("parsed chunk of {} expressions", body.len());

    Ok(Chunk {
        body,
        span: Span {
            start: Position(0, file),
            end: parser.get_position(),
        },
    })
}
