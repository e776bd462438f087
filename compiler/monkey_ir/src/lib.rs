//! Monkey IR - tokens, spans and the syntax tree.
//!
//! This crate contains the data structures shared by every phase:
//! - `Span` for source locations
//! - `Token`, `TokenKind` and the `TokenSource` seam between lexer and parser
//! - AST nodes (`Program`, `Statement`, `Expression`, ...)
//!
//! # Design Philosophy
//!
//! - **Closed sum types**: statements, expressions and operators are enums, so
//!   every consumer matches them exhaustively.
//! - **Owned trees**: each node owns its children. There is no sharing and no
//!   cycles, so a `Program` can be evaluated any number of times.
//! - **Round-trippable rendering**: `Display` on any node produces source text
//!   that parses back to an equivalent tree.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BlockStatement, Expression, FunctionLiteral, Identifier, IfExpression, InfixOperator, Node,
    PrefixOperator, Program, Statement,
};
pub use span::{LineCol, Span};
pub use token::{Token, TokenKind, TokenSource};
