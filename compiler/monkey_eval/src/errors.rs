//! Centralized error constructors for the evaluator.
//!
//! Runtime errors travel as `Err(EvalError)` inside the evaluator and are
//! turned into `Object::Error` at the public boundary. The message text of
//! every error is user-facing and stable.
//!
//! # Usage
//!
//! ```ignore
//! use crate::errors::{identifier_not_found, type_mismatch};
//! ```

use monkey_ir::{InfixOperator, PrefixOperator};

use crate::Object;

/// Result of every evaluation step.
pub type EvalResult<T = Object> = Result<T, EvalError>;

/// Structured category of a runtime error.
///
/// `Display` produces the exact message shown to users.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Operators
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: InfixOperator,
        right: &'static str,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: PrefixOperator,
        operand: &'static str,
    },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: InfixOperator,
        right: &'static str,
    },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow: {left} {op} {right}")]
    IntegerOverflow {
        left: i64,
        op: InfixOperator,
        right: i64,
    },
    #[error("integer overflow: -({operand})")]
    NegationOverflow { operand: i64 },

    // Names and calls
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },

    // Collections
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: &'static str },
    #[error("unusable as hash key: {type_name}")]
    UnusableHashKey { type_name: &'static str },

    // Builtins
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: usize },
    #[error("argument to '{builtin}' not supported, got {type_name}")]
    UnsupportedArgument {
        builtin: &'static str,
        type_name: &'static str,
    },
    #[error("argument to '{builtin}' must be {expected}, got {type_name}")]
    ArgumentTypeMismatch {
        builtin: &'static str,
        expected: &'static str,
        type_name: &'static str,
    },
}

/// A runtime error raised during evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Rendered from `kind` once, at construction.
    pub message: String,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        tracing::debug!(%message, "runtime error");
        EvalError { kind, message }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Operator errors

#[cold]
pub fn type_mismatch(left: &Object, op: InfixOperator, right: &Object) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn unknown_prefix_operator(op: PrefixOperator, operand: &Object) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn unknown_infix_operator(left: &Object, op: InfixOperator, right: &Object) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(left: i64, op: InfixOperator, right: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { left, op, right })
}

#[cold]
pub fn negation_overflow(operand: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegationOverflow { operand })
}

// Name and call errors

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_function(callee: &Object) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        type_name: callee.type_name(),
    })
}

// Collection errors

#[cold]
pub fn index_not_supported(collection: &Object) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported {
        type_name: collection.type_name(),
    })
}

#[cold]
pub fn unusable_hash_key(key: &Object) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnusableHashKey {
        type_name: key.type_name(),
    })
}

// Builtin errors

#[cold]
pub fn wrong_argument_count(got: usize, want: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentCount { got, want })
}

#[cold]
pub fn unsupported_argument(builtin: &'static str, arg: &Object) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedArgument {
        builtin,
        type_name: arg.type_name(),
    })
}

#[cold]
pub fn argument_type_mismatch(
    builtin: &'static str,
    expected: &'static str,
    arg: &Object,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentTypeMismatch {
        builtin,
        expected,
        type_name: arg.type_name(),
    })
}
