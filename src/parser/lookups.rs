use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::{Operator, TokenKind}};

use super::{expr::*, parser::Parser};

/// Precedence tiers, loosest first. The discriminant is the tier's level.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default = 0,
    Or = 1,
    And = 2,
    Comparison = 3,
    BitOr = 4,
    BitXor = 5,
    BitAnd = 6,
    Shift = 7,
    Concat = 8,
    Additive = 9,
    Multiplicative = 10,
    // Reserved for prefix operators, which this grammar does not parse.
    Unary = 11,
    Power = 12,
}

impl BindingPower {
    pub fn level(self) -> u8 {
        self as u8
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PrecedenceEntry {
    pub operator: Operator,
    pub binding_power: BindingPower,
    pub associativity: Associativity,
}

impl PrecedenceEntry {
    const fn new(operator: Operator, binding_power: BindingPower, associativity: Associativity) -> Self {
        PrecedenceEntry { operator, binding_power, associativity }
    }

    pub fn level(&self) -> u8 {
        self.binding_power.level()
    }

    /// Minimum level an operator must have to be absorbed into this
    /// operator's right operand.
    pub fn right_operand_threshold(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.level() + 1,
            Associativity::Right => self.level(),
        }
    }
}

use Associativity::{Left, Right};

pub static PRECEDENCE_TABLE: [PrecedenceEntry; 21] = [
    PrecedenceEntry::new(Operator::Or, BindingPower::Or, Left),
    PrecedenceEntry::new(Operator::And, BindingPower::And, Left),
    PrecedenceEntry::new(Operator::Less, BindingPower::Comparison, Left),
    PrecedenceEntry::new(Operator::LessEquals, BindingPower::Comparison, Left),
    PrecedenceEntry::new(Operator::Equals, BindingPower::Comparison, Left),
    PrecedenceEntry::new(Operator::NotEquals, BindingPower::Comparison, Left),
    PrecedenceEntry::new(Operator::GreaterEquals, BindingPower::Comparison, Left),
    PrecedenceEntry::new(Operator::Greater, BindingPower::Comparison, Left),
    PrecedenceEntry::new(Operator::Pipe, BindingPower::BitOr, Left),
    PrecedenceEntry::new(Operator::Tilde, BindingPower::BitXor, Left),
    PrecedenceEntry::new(Operator::Ampersand, BindingPower::BitAnd, Left),
    PrecedenceEntry::new(Operator::ShiftLeft, BindingPower::Shift, Left),
    PrecedenceEntry::new(Operator::ShiftRight, BindingPower::Shift, Left),
    PrecedenceEntry::new(Operator::DotDot, BindingPower::Concat, Right),
    PrecedenceEntry::new(Operator::Plus, BindingPower::Additive, Left),
    PrecedenceEntry::new(Operator::Dash, BindingPower::Additive, Left),
    PrecedenceEntry::new(Operator::Star, BindingPower::Multiplicative, Left),
    PrecedenceEntry::new(Operator::Slash, BindingPower::Multiplicative, Left),
    PrecedenceEntry::new(Operator::SlashSlash, BindingPower::Multiplicative, Left),
    PrecedenceEntry::new(Operator::Percent, BindingPower::Multiplicative, Left),
    PrecedenceEntry::new(Operator::Caret, BindingPower::Power, Right),
];

pub fn lookup_precedence(operator: Operator) -> Option<&'static PrecedenceEntry> {
    PRECEDENCE_TABLE.iter().find(|entry| entry.operator == operator)
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, PrecedenceEntry) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Every binary operator
    for entry in PRECEDENCE_TABLE.iter() {
        parser.led(TokenKind::Operator(entry.operator), *entry, parse_binary_expr);
    }

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Nil, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Spread, parse_primary_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, PrecedenceEntry>;
