use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {}:{}", .position.1, .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which stage of the front end rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnterminatedString { .. } => {
                ErrorKind::Lex
            }
            ErrorImpl::ExpectedExpression { .. }
            | ErrorImpl::DanglingOperator { .. }
            | ErrorImpl::UnexpectedTrailingToken { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Parse,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::DanglingOperator { .. } => "DanglingOperator",
            ErrorImpl::UnexpectedTrailingToken { .. } => "UnexpectedTrailingToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// What the lexer or parser was looking for when it failed.
    pub fn expected(&self) -> &'static str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "a token",
            ErrorImpl::UnterminatedString { .. } => "a closing quote",
            ErrorImpl::ExpectedExpression { .. } => "an expression",
            ErrorImpl::DanglingOperator { .. } => "a right operand",
            ErrorImpl::UnexpectedTrailingToken { .. } => "end of input",
            ErrorImpl::NestingTooDeep { .. } => "shallower nesting",
        }
    }

    /// What was actually found at the error position.
    pub fn found(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token }
            | ErrorImpl::UnterminatedString { token } => token.clone(),
            ErrorImpl::ExpectedExpression { found }
            | ErrorImpl::DanglingOperator { found, .. }
            | ErrorImpl::UnexpectedTrailingToken { found } => found.clone(),
            ErrorImpl::NestingTooDeep { limit } => format!("more than {} levels", limit),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "Strings must be closed with a matching quote before the end of the line",
            )),
            ErrorImpl::ExpectedExpression { found } => {
                ErrorTip::Suggestion(format!("Expected an expression, found {}", found))
            }
            ErrorImpl::DanglingOperator { operator, .. } => ErrorTip::Suggestion(format!(
                "Operator `{}` is missing its right operand",
                operator
            )),
            ErrorImpl::UnexpectedTrailingToken { found } => ErrorTip::Suggestion(format!(
                "Unexpected {} after the end of the expression",
                found
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string: {token:?}")]
    UnterminatedString { token: String },
    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: String },
    #[error("operator {operator:?} has no right operand, found {found}")]
    DanglingOperator { operator: String, found: String },
    #[error("expected end of input, found {found}")]
    UnexpectedTrailingToken { found: String },
    #[error("expression nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
