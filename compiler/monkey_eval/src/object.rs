//! Runtime values.
//!
//! `Object` is a closed sum type. Arrays, hashes and functions are shared
//! behind `Rc` and never mutated after construction, so cloning an object is
//! cheap and `push` and `rest` build new arrays instead of editing old ones.

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Identifier};
use rustc_hash::FxHashMap;

use crate::environment::Env;
use crate::errors::EvalResult;
use crate::print_handler::PrintHandlerImpl;

/// Native implementation of a builtin function.
pub type BuiltinFn = fn(&[Object], &PrintHandlerImpl) -> EvalResult;

/// A runtime value.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Array(Rc<Vec<Object>>),
    Hash(Rc<HashObject>),
    Function(Rc<FunctionObject>),
    Builtin(Builtin),
    Null,
    /// Carries a `return` value up through enclosing blocks. Never escapes a
    /// function call or a program.
    ReturnValue(Box<Object>),
    Error(String),
}

impl Object {
    pub const TRUE: Object = Object::Boolean(true);
    pub const FALSE: Object = Object::Boolean(false);
    pub const NULL: Object = Object::Null;

    #[inline]
    pub fn from_bool(value: bool) -> Object {
        if value {
            Object::TRUE
        } else {
            Object::FALSE
        }
    }

    pub fn array(elements: Vec<Object>) -> Object {
        Object::Array(Rc::new(elements))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }

    /// Only `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    /// Key under which this value is stored in a hash, if it is hashable.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(value) => Some(HashKey::Integer(*value)),
            Object::Boolean(value) => Some(HashKey::Boolean(*value)),
            Object::String(value) => Some(HashKey::String(value.clone())),
            _ => None,
        }
    }

    /// Identity comparison used by `==` and `!=` on same-typed operands.
    ///
    /// Scalars compare by value; arrays, hashes and functions by reference.
    pub fn identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
            (Object::Hash(a), Object::Hash(b)) => Rc::ptr_eq(a, b),
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

/// Structural equality for tests and assertions.
///
/// Functions compare by identity: their captured environment may contain
/// the function itself.
impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => a == b,
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => self.identical(other),
        }
    }
}

/// The inspect form.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::String(value) => write!(f, "\"{value}\""),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Object::Hash(hash) => write!(f, "{hash}"),
            Object::Function(function) => write!(f, "{function}"),
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Null => f.write_str("null"),
            Object::ReturnValue(value) => write!(f, "{value}"),
            Object::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

// Not derived: a function's environment can reach the function again.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Object::Boolean(value) => f.debug_tuple("Boolean").field(value).finish(),
            Object::String(value) => f.debug_tuple("String").field(value).finish(),
            Object::Array(elements) => f.debug_tuple("Array").field(elements).finish(),
            Object::Hash(hash) => f.debug_tuple("Hash").field(&hash.pairs).finish(),
            Object::Function(function) => write!(f, "Function({function})"),
            Object::Builtin(builtin) => write!(f, "Builtin({})", builtin.name),
            Object::Null => f.write_str("Null"),
            Object::ReturnValue(value) => f.debug_tuple("ReturnValue").field(value).finish(),
            Object::Error(message) => f.debug_tuple("Error").field(message).finish(),
        }
    }
}

/// Hash key derived from the content of a hashable value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// Hash contents in insertion order.
#[derive(Clone, Default, PartialEq)]
pub struct HashObject {
    pairs: Vec<HashPair>,
    index: FxHashMap<HashKey, usize>,
}

impl HashObject {
    pub fn new() -> Self {
        HashObject::default()
    }

    /// Insert a pair. A key that is already present keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, hash_key: HashKey, key: Object, value: Object) {
        if let Some(&slot) = self.index.get(&hash_key) {
            self.pairs[slot] = HashPair { key, value };
        } else {
            self.index.insert(hash_key, self.pairs.len());
            self.pairs.push(HashPair { key, value });
        }
    }

    pub fn get(&self, hash_key: &HashKey) -> Option<&Object> {
        self.index.get(hash_key).map(|&slot| &self.pairs[slot].value)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for HashObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", pair.key, pair.value)?;
        }
        f.write_str("}")
    }
}

/// A closure: parameters and body plus the environment it was created in.
pub struct FunctionObject {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Env,
}

impl fmt::Display for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, ") {{\n{}\n}}", self.body)
    }
}

/// A named native function.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}
