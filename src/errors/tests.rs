//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.lua".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_kind(), ErrorKind::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            found: "`*`".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.lua");
}

#[test]
fn test_error_kinds() {
    let lex = [
        ErrorImpl::UnrecognisedToken { token: "$".to_string() },
        ErrorImpl::UnterminatedString { token: "'abc".to_string() },
    ];
    let parse = [
        ErrorImpl::ExpectedExpression { found: "end of input".to_string() },
        ErrorImpl::DanglingOperator { operator: "..".to_string(), found: "end of input".to_string() },
        ErrorImpl::UnexpectedTrailingToken { found: "`b`".to_string() },
        ErrorImpl::NestingTooDeep { limit: 8 },
    ];

    for error_impl in lex {
        assert_eq!(Error::new(error_impl, at(0)).get_kind(), ErrorKind::Lex);
    }
    for error_impl in parse {
        assert_eq!(Error::new(error_impl, at(0)).get_kind(), ErrorKind::Parse);
    }
}

#[test]
fn test_expected_and_found() {
    let error = Error::new(
        ErrorImpl::DanglingOperator {
            operator: "^".to_string(),
            found: "end of input".to_string(),
        },
        at(3),
    );
    assert_eq!(error.expected(), "a right operand");
    assert_eq!(error.found(), "end of input");

    let error = Error::new(ErrorImpl::UnterminatedString { token: "\"abc".to_string() }, at(0));
    assert_eq!(error.expected(), "a closing quote");
    assert_eq!(error.found(), "\"abc");

    let error = Error::new(ErrorImpl::UnexpectedTrailingToken { found: "`c`".to_string() }, at(0));
    assert_eq!(error.expected(), "end of input");

    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 4 }, at(0));
    assert_eq!(error.found(), "more than 4 levels");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedTrailingToken {
            found: "`c`".to_string(),
        },
        at(6),
    );

    assert_eq!(error.to_string(), "expected end of input, found `c` at test.lua:6");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 1 }, at(0));
    takes_error(&error);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::DanglingOperator {
            operator: "+".to_string(),
            found: "end of input".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Operator `+` is missing its right operand"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
