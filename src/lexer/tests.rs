//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Decimal and hexadecimal numeric literals
//! - Quoted string literals and escapes
//! - Operators and the spread marker
//! - External comment and long-string scanners
//! - Error cases

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, tokenize_with_scanners},
    scanners::Scanners,
    tokens::{Operator, Token, TokenKind},
};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn lex(source: &str) -> Vec<Token> {
    tokenize(source.to_string(), Some("test.lua".to_string())).unwrap()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|token| token.kind).collect()
}

fn values(source: &str) -> Vec<String> {
    lex(source).into_iter().map(|token| token.value).collect()
}

// `--` to end of line
fn line_comment(source: &str, pos: usize) -> Option<usize> {
    let rest = &source[pos..];
    if rest.starts_with("--") {
        Some(pos + rest.find('\n').unwrap_or(rest.len()))
    } else {
        None
    }
}

// `[[` ... `]]`, level zero only
fn long_string(source: &str, pos: usize) -> Option<usize> {
    let rest = &source[pos..];
    if rest.starts_with("[[") {
        rest.find("]]").map(|end| pos + end + 2)
    } else {
        None
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = lex("nil true false and or");

    assert_eq!(tokens[0].kind, TokenKind::Nil);
    assert_eq!(tokens[1].kind, TokenKind::True);
    assert_eq!(tokens[2].kind, TokenKind::False);
    assert_eq!(tokens[3].kind, TokenKind::Operator(Operator::And));
    assert_eq!(tokens[4].kind, TokenKind::Operator(Operator::Or));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    let tokens = lex("niles truthy falsehood android oracle _nil");

    for token in &tokens[..6] {
        assert_eq!(token.kind, TokenKind::Identifier, "{}", token.value);
    }
    assert_eq!(tokens[0].value, "niles");
}

#[test]
fn test_other_lua_keywords_stay_identifiers() {
    assert_eq!(
        kinds("not local function"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_identifiers() {
    assert_eq!(
        values("foo bar baz_123 _underscore CamelCase"),
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "EOF"]
    );
}

#[test]
fn test_tokenize_decimal_numbers() {
    let source = "0 42 3.14 5. .5 1e10 1E-3 2.5e+7 .25e2 7.e1";
    let tokens = lex(source);

    assert_eq!(
        tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>(),
        vec!["0", "42", "3.14", "5.", ".5", "1e10", "1E-3", "2.5e+7", ".25e2", "7.e1", "EOF"]
    );
    assert!(tokens[..10].iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn test_tokenize_hex_numbers() {
    let tokens = lex("0xFF 0X1a 0x1A.8p2 0xA.Bp-3 0x10P+4");

    assert_eq!(
        tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>(),
        vec!["0xFF", "0X1a", "0x1A.8p2", "0xA.Bp-3", "0x10P+4", "EOF"]
    );
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn test_leading_zero_is_its_own_number() {
    assert_eq!(values("007"), vec!["0", "0", "7", "EOF"]);
    assert_eq!(values("01.5"), vec!["0", "1.5", "EOF"]);
}

#[test]
fn test_incomplete_exponent_is_not_consumed() {
    assert_eq!(
        kinds("1e"),
        vec![TokenKind::Number, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(values("1e"), vec!["1", "e", "EOF"]);
}

#[test]
fn test_tokenize_strings() {
    let tokens = lex(r#""hello" 'world' "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "'world'");
    assert_eq!(tokens[2].value, "\"multiple words\"");
    assert_eq!(tokens[3].value, "\"\"");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_escaped_quote_in_string() {
    let tokens = lex(r#""a\"b""#);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r#""a\"b""#);
}

#[test]
fn test_escapes_are_not_validated() {
    let tokens = lex(r"'\q\z\\' '\''");

    assert_eq!(tokens[0].value, r"'\q\z\\'");
    assert_eq!(tokens[1].value, r"'\''");
}

#[test]
fn test_other_quote_inside_string() {
    assert_eq!(values(r#""it's" 'say "hi"'"#), vec![r#""it's""#, r#"'say "hi"'"#, "EOF"]);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("x .. \"abc".to_string(), None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(error.get_position().0, 5);
    assert_eq!(error.get_error(), &ErrorImpl::UnterminatedString { token: "\"abc".to_string() });
}

#[test]
fn test_newline_terminates_string_scan() {
    let error = tokenize("'abc\ndef'".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().0, 0);

    let error = tokenize("\"abc\\\ndef\"".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_tokenize_operators() {
    let source = "or and < <= == ~= >= > | ~ & << >> .. + - * / // % ^";
    let tokens = lex(source);

    let operators = tokens
        .iter()
        .filter_map(|token| token.operator())
        .collect::<Vec<_>>();

    assert_eq!(operators, Operator::ALL.to_vec());
    assert_eq!(tokens.len(), Operator::ALL.len() + 1);
    for token in &tokens[..tokens.len() - 1] {
        assert_eq!(token.value, token.operator().unwrap().symbol());
    }
}

#[test]
fn test_operators_match_greedily_without_spaces() {
    assert_eq!(
        kinds("a<=b<<c//d~=e>>f"),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Operator::LessEquals),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::ShiftLeft),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::SlashSlash),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::NotEquals),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::ShiftRight),
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_spread() {
    assert_eq!(kinds("..."), vec![TokenKind::Spread, TokenKind::EOF]);
    assert_eq!(
        kinds("a.....b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Spread,
            TokenKind::Operator(Operator::DotDot),
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_concat_between_numbers() {
    // `1..2` is the decimal `1.` followed by `.2`, as in longest-match lexing
    assert_eq!(values("1 .. 2"), vec!["1", "..", "2", "EOF"]);
    assert_eq!(values("1..2"), vec!["1.", ".2", "EOF"]);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = lex("  a\t+\r\n\n  b  ");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].span.start.0, 2);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[2].span.start.0, 10);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
    assert_eq!(tokens[3].span.start.0, 13);
}

#[test]
fn test_token_spans_cover_lexemes() {
    for token in lex("alpha .. 0x1p4 ~= 'q'") {
        assert_eq!(
            (token.span.end.0 - token.span.start.0) as usize,
            if token.kind == TokenKind::EOF { 0 } else { token.value.len() }
        );
    }
}

#[test]
fn test_tokenize_unrecognized_token() {
    for source in ["a = b", "a # b", "(a)", "a.b", "a ! b", "a @ b"] {
        let result = tokenize(source.to_string(), None);
        let error = result.unwrap_err();
        assert_eq!(error.get_kind(), ErrorKind::Lex, "{}", source);
        assert_eq!(error.get_error_name(), "UnrecognisedToken");
    }

    let error = tokenize("a + é".to_string(), None).unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::UnrecognisedToken { token: "é".to_string() });
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("a".to_string(), None).unwrap();
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_without_scanners_comments_are_operators() {
    assert_eq!(
        kinds("a --b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Dash),
            TokenKind::Operator(Operator::Dash),
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comment_scanner_skips_comments() {
    let scanners = Scanners::none().with_comment(line_comment);
    let tokens = tokenize_with_scanners("a -- the left side\n+ b--tail".to_string(), None, &scanners).unwrap();

    assert_eq!(
        tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>(),
        vec!["a", "+", "b", "EOF"]
    );
}

#[test]
fn test_long_string_scanner_yields_string_token() {
    let scanners = Scanners::none().with_long_string(long_string);
    let tokens = tokenize_with_scanners("s .. [[two\nlines]]".to_string(), None, &scanners).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "[[two\nlines]]");
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 18);
}

#[test]
fn test_unclosed_long_string_falls_through() {
    let scanners = Scanners::none().with_long_string(long_string);
    let error = tokenize_with_scanners("[[open".to_string(), None, &scanners).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnrecognisedToken { token: "[".to_string() });
}

#[test]
fn test_scanner_results_must_advance() {
    let stuck = |_: &str, pos: usize| Some(pos);
    let past_end = |source: &str, _: usize| Some(source.len() + 10);
    let scanners = Scanners::none().with_comment(stuck).with_long_string(past_end);

    assert_eq!(
        tokenize_with_scanners("a".to_string(), None, &scanners)
            .unwrap()
            .iter()
            .map(|t| t.kind)
            .collect::<Vec<_>>(),
        vec![TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_comment_only_source() {
    let scanners = Scanners::none().with_comment(line_comment);
    let tokens = tokenize_with_scanners("-- nothing here".to_string(), None, &scanners).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_describe() {
    let tokens = lex("x");
    assert_eq!(tokens[0].describe(), "`x`");
    assert_eq!(tokens[1].describe(), "end of input");
}
