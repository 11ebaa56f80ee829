use std::{cell::RefCell, rc::Rc};

use rustc_hash::FxHashMap;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Shared handle to a scope frame.
///
/// Frames are shared between the evaluator and every closure that captured
/// them, so a binding updated through one handle is visible through all.
pub type Env = Rc<RefCell<Environment>>;

/// A single scope frame: the names bound in it and a link to the frame it is
/// nested in.
///
/// Lookups and assignments walk outward through the `outer` links; `let`
/// always binds in the frame it runs in.
#[derive(Debug, Default)]
pub struct Environment {
    store: FxHashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates the top-level frame of a program or REPL session.
    #[must_use]
    pub fn new_root() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a frame nested inside `outer`.
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: FxHashMap::default(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Resolves `name`, searching this frame first and then each enclosing
    /// frame in turn.
    ///
    /// # Example
    /// ```
    /// use tlang::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let root = Environment::new_root();
    /// root.borrow_mut().set("x", Value::Integer(1));
    /// let inner = Environment::enclosed(&root);
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(inner.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }

        let mut frame = self.outer.clone();
        while let Some(env) = frame {
            let env = env.borrow();
            if let Some(value) = env.store.get(name) {
                return Some(value.clone());
            }
            frame = env.outer.clone();
        }
        None
    }

    /// Binds `name` in this frame, shadowing any outer binding of the same
    /// name.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Whether `name` is bound directly in this frame.
    #[cfg(test)]
    fn contains_local(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Rebinds `name` in the nearest frame that already holds it.
    ///
    /// # Errors
    /// `UnknownIdentifier` if no frame in the chain binds `name`; nothing is
    /// modified in that case.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.store.get_mut(name) {
            *slot = value;
            return Ok(());
        }

        let mut frame = self.outer.clone();
        while let Some(env) = frame {
            let mut env = env.borrow_mut();
            if let Some(slot) = env.store.get_mut(name) {
                *slot = value;
                return Ok(());
            }
            frame = env.outer.clone();
        }

        Err(RuntimeError::UnknownIdentifier { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inner_binding_shadows_outer() {
        let root = Environment::new_root();
        root.borrow_mut().set("x", Value::Integer(1));
        let inner = Environment::enclosed(&root);
        inner.borrow_mut().set("x", Value::Integer(2));

        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
        assert_eq!(root.borrow().get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn assign_updates_the_frame_that_holds_the_name() {
        let root = Environment::new_root();
        root.borrow_mut().set("count", Value::Integer(0));
        let middle = Environment::enclosed(&root);
        let inner = Environment::enclosed(&middle);

        inner.borrow_mut()
             .assign("count", Value::Integer(5))
             .expect("count is bound in the root frame");

        assert!(!inner.borrow().contains_local("count"));
        assert!(!middle.borrow().contains_local("count"));
        assert_eq!(root.borrow().get("count"), Some(Value::Integer(5)));
    }

    #[test]
    fn assign_to_unbound_name_fails() {
        let root = Environment::new_root();
        let inner = Environment::enclosed(&root);

        let result = inner.borrow_mut().assign("ghost", Value::Null);
        assert_eq!(result,
                   Err(RuntimeError::UnknownIdentifier { name: "ghost".to_string() }));
        assert_eq!(root.borrow().get("ghost"), None);
    }

    #[test]
    fn frames_are_shared_between_handles() {
        let root = Environment::new_root();
        let alias = Rc::clone(&root);
        alias.borrow_mut().set("shared", Value::Boolean(true));

        assert_eq!(root.borrow().get("shared"), Some(Value::Boolean(true)));
    }
}
