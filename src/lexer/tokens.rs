use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Words that scan as identifiers but are classified as something else.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("nil", TokenKind::Nil);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("or", TokenKind::Operator(Operator::Or));
        map.insert("and", TokenKind::Operator(Operator::And));
        map
    };
}

/// Binary operator symbols.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Or,
    And,

    Less,
    LessEquals,
    Equals,    // ==
    NotEquals, // ~=
    GreaterEquals,
    Greater,

    Pipe,      // |
    Tilde,     // ~
    Ampersand, // &
    ShiftLeft,
    ShiftRight,

    DotDot,

    Plus,
    Dash,
    Star,
    Slash,
    SlashSlash,
    Percent,

    Caret,
}

impl Operator {
    pub const ALL: [Operator; 21] = [
        Operator::Or,
        Operator::And,
        Operator::Less,
        Operator::LessEquals,
        Operator::Equals,
        Operator::NotEquals,
        Operator::GreaterEquals,
        Operator::Greater,
        Operator::Pipe,
        Operator::Tilde,
        Operator::Ampersand,
        Operator::ShiftLeft,
        Operator::ShiftRight,
        Operator::DotDot,
        Operator::Plus,
        Operator::Dash,
        Operator::Star,
        Operator::Slash,
        Operator::SlashSlash,
        Operator::Percent,
        Operator::Caret,
    ];

    /// The operator as it is spelled in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Or => "or",
            Operator::And => "and",
            Operator::Less => "<",
            Operator::LessEquals => "<=",
            Operator::Equals => "==",
            Operator::NotEquals => "~=",
            Operator::GreaterEquals => ">=",
            Operator::Greater => ">",
            Operator::Pipe => "|",
            Operator::Tilde => "~",
            Operator::Ampersand => "&",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::DotDot => "..",
            Operator::Plus => "+",
            Operator::Dash => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::SlashSlash => "//",
            Operator::Percent => "%",
            Operator::Caret => "^",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    Nil,
    True,
    False,

    Spread, // ...

    Operator(Operator),
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Operator(op) => write!(f, "Operator({})", op),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// The operator carried by this token, if it is an operator token.
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Text used when this token shows up in a diagnostic.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EOF {
            String::from("end of input")
        } else {
            format!("`{}`", self.value)
        }
    }
}
