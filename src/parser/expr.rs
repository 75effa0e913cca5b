use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, NumberExpr, QuoteKind, StringExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::PrecedenceEntry, parser::Parser};

/// Precedence climbing: parse a primary, then absorb every operator whose
/// level is at least `min_precedence`.
pub fn parse_expr(parser: &mut Parser, min_precedence: u8) -> Result<Expr, Error> {
    parser.enter()?;
    let result = parse_expr_inner(parser, min_precedence);
    parser.leave();
    result
}

fn parse_expr_inner(parser: &mut Parser, min_precedence: u8) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression { found: parser.current_token().describe() },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // Keep folding while the next operator binds at least as tightly as allowed here
    loop {
        let token_kind = parser.current_token_kind();
        let entry = match parser.get_bp_lookup().get(&token_kind) {
            Some(entry) if entry.level() >= min_precedence => *entry,
            _ => break,
        };

        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => break,
        };

        left = led(parser, left, entry)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let expr = match token.kind {
        TokenKind::Identifier => Expr::Identifier(SymbolExpr { value: token.value, span: token.span }),
        TokenKind::Number => Expr::Number(NumberExpr { value: token.value, span: token.span }),
        TokenKind::String => Expr::String(StringExpr {
            quote: QuoteKind::of_lexeme(&token.value),
            value: token.value,
            span: token.span,
        }),
        TokenKind::Nil => Expr::Nil(token.span),
        TokenKind::True => Expr::True(token.span),
        TokenKind::False => Expr::False(token.span),
        TokenKind::Spread => Expr::Spread(token.span),
        _ => {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression { found: token.describe() },
                token.span.start,
            ))
        }
    };

    parser.advance();
    Ok(expr)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, entry: PrecedenceEntry) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    if parser.current_token_kind() == TokenKind::EOF {
        return Err(Error::new(
            ErrorImpl::DanglingOperator {
                operator: operator_token.value,
                found: parser.current_token().describe(),
            },
            operator_token.span.start,
        ));
    }

    let right = parse_expr(parser, entry.right_operand_threshold())?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: entry.operator,
        right: Box::new(right),
    }))
}
