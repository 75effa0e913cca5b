/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Expr` enum, expression kinds and chunks
/// - expressions: The node structs each `Expr` variant carries
pub mod ast;
pub mod expressions;
