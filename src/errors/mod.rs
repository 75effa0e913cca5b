//! Error types and error handling.
//!
//! This module defines the errors produced while lexing and parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexing and parsing stages
//! - The expected construct and the token actually found
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
