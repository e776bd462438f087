//! Parser tests.
//!
//! - `parser`: statements, expressions and operator precedence
//! - `errors`: syntax error messages and recovery

mod errors;
