use std::fmt::Display;

use crate::Span;

use super::expressions::{BinaryExpr, NumberExpr, StringExpr, SymbolExpr};

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Number,
    String,
    Nil,
    True,
    False,
    Spread,
    Binary,
}

/// An expression tree. Subtrees are owned, never shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(SymbolExpr),
    Number(NumberExpr),
    String(StringExpr),
    Nil(Span),
    True(Span),
    False(Span),
    Spread(Span),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Number(_) => ExprType::Number,
            Expr::String(_) => ExprType::String,
            Expr::Nil(_) => ExprType::Nil,
            Expr::True(_) => ExprType::True,
            Expr::False(_) => ExprType::False,
            Expr::Spread(_) => ExprType::Spread,
            Expr::Binary(_) => ExprType::Binary,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(symbol) => &symbol.span,
            Expr::Number(number) => &number.span,
            Expr::String(string) => &string.span,
            Expr::Nil(span) | Expr::True(span) | Expr::False(span) | Expr::Spread(span) => span,
            Expr::Binary(binary) => &binary.span,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryExpr> {
        match self {
            Expr::Binary(binary) => Some(binary),
            _ => None,
        }
    }

    /// Number of binary operator nodes in the tree.
    pub fn operator_count(&self) -> usize {
        match self {
            Expr::Binary(binary) => 1 + binary.left.operator_count() + binary.right.operator_count(),
            _ => 0,
        }
    }
}

// Renders as an S-expression: `a + b * c` becomes `(+ a (* b c))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(symbol) => write!(f, "{}", symbol.value),
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::String(string) => write!(f, "{}", string.value),
            Expr::Nil(_) => write!(f, "nil"),
            Expr::True(_) => write!(f, "true"),
            Expr::False(_) => write!(f, "false"),
            Expr::Spread(_) => write!(f, "..."),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.operator, binary.left, binary.right)
            }
        }
    }
}

/// A sequence of juxtaposed expressions, as accepted at the top level of a chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub body: Vec<Expr>,
    pub span: Span,
}

impl Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self.body.iter().map(|expr| expr.to_string()).collect::<Vec<_>>();
        write!(f, "{}", rendered.join("\n"))
    }
}
