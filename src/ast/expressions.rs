use crate::{lexer::tokens::Operator, Span};

// LITERALS

/// Number Expression
/// Represents a numeric literal exactly as written; the value is never computed.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: String,
    pub span: Span,
}

impl NumberExpr {
    pub fn is_hex(&self) -> bool {
        self.value.starts_with("0x") || self.value.starts_with("0X")
    }
}

/// Which delimiter a string literal was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Single,
    Double,
    LongBracket,
}

impl QuoteKind {
    pub fn of_lexeme(lexeme: &str) -> QuoteKind {
        match lexeme.chars().next() {
            Some('\'') => QuoteKind::Single,
            Some('"') => QuoteKind::Double,
            _ => QuoteKind::LongBracket,
        }
    }
}

/// String Expression
/// Represents a string literal, delimiters and escapes included.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub quote: QuoteKind,
    pub span: Span,
}

impl StringExpr {
    /// The text between the quotes, escapes left undecoded.
    ///
    /// Long-bracket strings are returned whole since their delimiters are
    /// owned by the external scanner.
    pub fn contents(&self) -> &str {
        match self.quote {
            QuoteKind::Single | QuoteKind::Double if self.value.len() >= 2 => {
                &self.value[1..self.value.len() - 1]
            }
            _ => &self.value,
        }
    }
}

/// Symbol Expression
/// Represents an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents an infix operation. Each node owns both of its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<super::ast::Expr>,
    pub operator: Operator,
    pub right: Box<super::ast::Expr>,
    pub span: Span,
}
