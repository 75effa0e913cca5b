use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{scanners::Scanners, tokens::{Operator, Token, TokenKind, RESERVED_LOOKUP}};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern { regex: Regex::new(pattern).unwrap(), handler }
    }
}

// Decimal integer part: `0` alone, or a nonzero digit followed by any digits.
const NUMBER_PATTERN: &str = concat!(
    "^(?:",
    "0[xX][a-fA-F0-9]+(?:\\.[a-fA-F0-9]+)?(?:[pP][+-]?[0-9]+)?",
    "|(?:0|[1-9][0-9]*)\\.[0-9]*(?:[eE][+-]?[0-9]+)?",
    "|\\.[0-9]+(?:[eE][+-]?[0-9]+)?",
    "|(?:0|[1-9][0-9]*)(?:[eE][+-]?[0-9]+)?",
    ")"
);

lazy_static! {
    // First match wins, so longer spellings come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^\\s+", skip_handler),
        RegexPattern::new(NUMBER_PATTERN, number_handler),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^\"(?:[^\"\\\\\\n]|\\\\.)*\"", string_handler),
        RegexPattern::new("^'(?:[^'\\\\\\n]|\\\\.)*'", string_handler),
        RegexPattern::new("^[\"']", unterminated_string_handler),
        RegexPattern::new("^\\.\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::Spread, "...")),
        RegexPattern::new("^\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::DotDot), "..")),
        RegexPattern::new("^<<", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::ShiftLeft), "<<")),
        RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::LessEquals), "<=")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Less), "<")),
        RegexPattern::new("^>>", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::ShiftRight), ">>")),
        RegexPattern::new("^>=", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::GreaterEquals), ">=")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Greater), ">")),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Equals), "==")),
        RegexPattern::new("^~=", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::NotEquals), "~=")),
        RegexPattern::new("^~", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Tilde), "~")),
        RegexPattern::new("^\\|", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Pipe), "|")),
        RegexPattern::new("^&", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Ampersand), "&")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Plus), "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Dash), "-")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Star), "*")),
        RegexPattern::new("^//", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::SlashSlash), "//")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Slash), "/")),
        RegexPattern::new("^%", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Percent), "%")),
        RegexPattern::new("^\\^", MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Caret), "^")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        log::trace!("token {} {:?} at {}", token.kind, token.value, token.span.start.0);
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span from the current position covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched_len(&self, regex: &Regex) -> Result<usize, Error> {
        match regex.find(self.remainder()) {
            Some(found) => Ok(found.end()),
            None => Err(self.unrecognised()),
        }
    }

    fn unrecognised(&self) -> Error {
        let token = self.at().map(String::from).unwrap_or_default();
        Error::new(ErrorImpl::UnrecognisedToken { token }, self.position())
    }

    // Comments are extras; long strings become ordinary string tokens.
    fn run_external_scanners(&mut self, scanners: &Scanners) -> bool {
        if let Some(end) = scanners.scan_comment(&self.source, self.pos) {
            self.pos = end;
            return true;
        }

        if let Some(end) = scanners.scan_long_string(&self.source, self.pos) {
            let len = end - self.pos;
            let value = String::from(&self.source[self.pos..end]);
            let span = self.span_of(len);
            self.push(MK_TOKEN!(TokenKind::String, value, span));
            self.pos = end;
            return true;
        }

        false
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let len = lexer.matched_len(regex)?;
    let matched = String::from(&lexer.remainder()[..len]);

    let span = lexer.span_of(len);
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
    lexer.advance_n(len);
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let len = lexer.matched_len(regex)?;
    lexer.advance_n(len);
    Ok(())
}

// The lexeme keeps its quotes and escapes exactly as written.
fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let len = lexer.matched_len(regex)?;
    let string_literal = String::from(&lexer.remainder()[..len]);

    let span = lexer.span_of(len);
    lexer.push(MK_TOKEN!(TokenKind::String, string_literal, span));
    lexer.advance_n(len);
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let line_end = lexer.remainder().find('\n').unwrap_or(lexer.remainder().len());
    let token = String::from(&lexer.remainder()[..line_end]);

    Err(Error::new(ErrorImpl::UnterminatedString { token }, lexer.position()))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let len = lexer.matched_len(regex)?;
    let value = String::from(&lexer.remainder()[..len]);
    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);

    let span = lexer.span_of(len);
    lexer.push(MK_TOKEN!(kind, value, span));
    lexer.advance_n(len);
    Ok(())
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with_scanners(source, file, &Scanners::none())
}

pub fn tokenize_with_scanners(
    source: String,
    file: Option<String>,
    scanners: &Scanners,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    log::debug!("tokenizing {} ({} bytes)", lex.file, lex.source.len());

    while !lex.at_eof() {
        if lex.run_external_scanners(scanners) {
            continue;
        }

        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => {
                if let Err(error) = (pattern.handler)(&mut lex, &pattern.regex) {
                    log::debug!("lexing failed: {}", error);
                    return Err(error);
                }
            }
            None => {
                let error = lex.unrecognised();
                log::debug!("lexing failed: {}", error);
                return Err(error);
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    log::debug!("tokenized {} tokens", lex.tokens.len());
    Ok(lex.tokens)
}
