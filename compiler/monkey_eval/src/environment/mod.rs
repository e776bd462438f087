//! Environments for variable scoping in the interpreter.
//!
//! An environment is a map of bindings plus an optional link to the
//! environment it is enclosed by. The global environment is created once per
//! program run; every function call creates one more, enclosed by the
//! function's captured environment. Blocks do not create environments.
//!
//! Environments are shared: closures keep their defining environment alive.
//! A function bound in the environment it captured forms a reference cycle
//! that is never reclaimed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Object;

/// Bindings of a single environment.
#[derive(Default)]
pub struct Environment {
    store: FxHashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Look up `name` here, then in each enclosing environment.
    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` in this environment, replacing any previous binding here.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Shared handle to an [`Environment`].
///
/// Single-threaded (`Rc<RefCell<_>>`). Borrows are held only for the
/// duration of one `get` or `set`, never across evaluation.
#[derive(Clone, Default)]
pub struct Env(Rc<RefCell<Environment>>);

impl Env {
    /// A fresh top-level environment.
    pub fn new() -> Self {
        Env::default()
    }

    /// A fresh environment enclosed by `outer`.
    pub fn enclosed(outer: &Env) -> Self {
        Env(Rc::new(RefCell::new(Environment {
            store: FxHashMap::default(),
            outer: Some(outer.clone()),
        })))
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Object> {
        self.0.borrow().get(name)
    }

    #[inline]
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.0.borrow_mut().set(name, value);
    }

    /// Number of bindings in this environment, excluding enclosing ones.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Whether both handles refer to the same environment.
    pub fn ptr_eq(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env = self.0.borrow();
        let mut names: Vec<_> = env.store.keys().collect();
        names.sort();
        f.debug_struct("Env")
            .field("names", &names)
            .field("has_outer", &env.outer.is_some())
            .finish()
    }
}
