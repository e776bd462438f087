//! Prefix and infix operator semantics.
//!
//! Dispatch order for infix operators:
//! 1. both integers: arithmetic and comparison
//! 2. both strings: concatenation only
//! 3. differing types: type mismatch
//! 4. `==` / `!=`: identity
//! 5. anything else: unknown operator

use monkey_ir::{InfixOperator, PrefixOperator};

use crate::errors::{
    division_by_zero, integer_overflow, negation_overflow, type_mismatch, unknown_infix_operator,
    unknown_prefix_operator, EvalResult,
};
use crate::Object;

pub(crate) fn eval_prefix(op: PrefixOperator, operand: &Object) -> EvalResult {
    match op {
        PrefixOperator::Bang => Ok(Object::from_bool(!operand.is_truthy())),
        PrefixOperator::Minus => match operand {
            Object::Integer(value) => value
                .checked_neg()
                .map(Object::Integer)
                .ok_or_else(|| negation_overflow(*value)),
            other => Err(unknown_prefix_operator(op, other)),
        },
    }
}

pub(crate) fn eval_infix(op: InfixOperator, left: &Object, right: &Object) -> EvalResult {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Object::String(l), Object::String(r)) => match op {
            InfixOperator::Plus => {
                let mut joined = String::with_capacity(l.len() + r.len());
                joined.push_str(l);
                joined.push_str(r);
                Ok(Object::String(joined))
            }
            _ => Err(unknown_infix_operator(left, op, right)),
        },
        _ if left.type_name() != right.type_name() => Err(type_mismatch(left, op, right)),
        _ => match op {
            InfixOperator::Eq => Ok(Object::from_bool(left.identical(right))),
            InfixOperator::NotEq => Ok(Object::from_bool(!left.identical(right))),
            _ => Err(unknown_infix_operator(left, op, right)),
        },
    }
}

fn eval_integer_infix(op: InfixOperator, l: i64, r: i64) -> EvalResult {
    let checked = |result: Option<i64>| {
        result
            .map(Object::Integer)
            .ok_or_else(|| integer_overflow(l, op, r))
    };

    match op {
        InfixOperator::Plus => checked(l.checked_add(r)),
        InfixOperator::Minus => checked(l.checked_sub(r)),
        InfixOperator::Asterisk => checked(l.checked_mul(r)),
        InfixOperator::Slash => {
            if r == 0 {
                Err(division_by_zero())
            } else {
                checked(l.checked_div(r))
            }
        }
        InfixOperator::Lt => Ok(Object::from_bool(l < r)),
        InfixOperator::Gt => Ok(Object::from_bool(l > r)),
        InfixOperator::Eq => Ok(Object::from_bool(l == r)),
        InfixOperator::NotEq => Ok(Object::from_bool(l != r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn error_message(result: EvalResult) -> String {
        match result {
            Err(error) => error.to_string(),
            Ok(value) => panic!("expected error, got {value}"),
        }
    }

    #[test]
    fn test_integer_arithmetic() {
        let cases = [
            (InfixOperator::Plus, 7, 2, 9),
            (InfixOperator::Minus, 7, 9, -2),
            (InfixOperator::Asterisk, -3, 4, -12),
            (InfixOperator::Slash, 7, 2, 3),
            (InfixOperator::Slash, -7, 2, -3),
        ];
        for (op, l, r, expected) in cases {
            assert_eq!(
                eval_infix(op, &Object::Integer(l), &Object::Integer(r)),
                Ok(Object::Integer(expected)),
                "{l} {op} {r}"
            );
        }
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(
            error_message(eval_infix(
                InfixOperator::Slash,
                &Object::Integer(1),
                &Object::Integer(0)
            )),
            "division by zero"
        );
        assert_eq!(
            error_message(eval_infix(
                InfixOperator::Plus,
                &Object::Integer(i64::MAX),
                &Object::Integer(1)
            )),
            "integer overflow: 9223372036854775807 + 1"
        );
        assert_eq!(
            error_message(eval_infix(
                InfixOperator::Slash,
                &Object::Integer(i64::MIN),
                &Object::Integer(-1)
            )),
            "integer overflow: -9223372036854775808 / -1"
        );
        assert_eq!(
            error_message(eval_prefix(PrefixOperator::Minus, &Object::Integer(i64::MIN))),
            "integer overflow: -(-9223372036854775808)"
        );
    }

    #[test]
    fn test_type_mismatch_precedes_identity() {
        assert_eq!(
            error_message(eval_infix(InfixOperator::Eq, &Object::Integer(1), &Object::TRUE)),
            "type mismatch: INTEGER == BOOLEAN"
        );
    }

    #[test]
    fn test_strings_only_concatenate() {
        let a = Object::String("foo".into());
        let b = Object::String("bar".into());
        assert_eq!(
            eval_infix(InfixOperator::Plus, &a, &b),
            Ok(Object::String("foobar".into()))
        );
        assert_eq!(
            error_message(eval_infix(InfixOperator::Eq, &a, &b)),
            "unknown operator: STRING == STRING"
        );
    }

    #[test]
    fn test_boolean_and_null_identity() {
        assert_eq!(
            eval_infix(InfixOperator::Eq, &Object::TRUE, &Object::TRUE),
            Ok(Object::TRUE)
        );
        assert_eq!(
            eval_infix(InfixOperator::NotEq, &Object::NULL, &Object::NULL),
            Ok(Object::FALSE)
        );
        assert_eq!(
            error_message(eval_infix(InfixOperator::Plus, &Object::TRUE, &Object::FALSE)),
            "unknown operator: BOOLEAN + BOOLEAN"
        );
    }

    #[test]
    fn test_prefix_operators() {
        assert_eq!(eval_prefix(PrefixOperator::Bang, &Object::NULL), Ok(Object::TRUE));
        assert_eq!(
            eval_prefix(PrefixOperator::Bang, &Object::Integer(0)),
            Ok(Object::FALSE)
        );
        assert_eq!(
            error_message(eval_prefix(PrefixOperator::Minus, &Object::TRUE)),
            "unknown operator: -BOOLEAN"
        );
    }
}
