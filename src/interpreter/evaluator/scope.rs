use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// A single block scope: variable names mapped to their values.
pub type Scope = HashMap<String, Value>;

/// The variables of one function invocation, or of the top level.
///
/// A frame owns a base scope, which holds the parameters of the call, and a
/// stack of block scopes opened by the blocks currently executing inside it.
#[derive(Debug, Default)]
pub struct CallFrame {
    base:   Scope,
    blocks: Vec<Scope>,
}

impl CallFrame {
    /// Creates a frame whose base scope binds each parameter to its argument.
    pub(crate) fn with_bindings(bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self { base:   bindings.into_iter().collect(),
               blocks: Vec::new(), }
    }

    /// Scopes from innermost to outermost.
    fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.blocks.iter().rev().chain(std::iter::once(&self.base))
    }

    fn scopes_mut(&mut self) -> impl Iterator<Item = &mut Scope> {
        self.blocks.iter_mut().rev().chain(std::iter::once(&mut self.base))
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        self.blocks.last_mut().unwrap_or(&mut self.base)
    }

    /// Number of scopes in this frame, the base scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.blocks.len() + 1
    }
}

impl Context {
    /// The frame statements are currently executing in.
    fn current_frame(&self) -> &CallFrame {
        self.frames.last().unwrap_or(&self.global)
    }

    fn current_frame_mut(&mut self) -> &mut CallFrame {
        self.frames.last_mut().unwrap_or(&mut self.global)
    }

    /// Looks a variable up.
    ///
    /// The scopes of the current frame are searched from innermost to
    /// outermost, then the scopes of the global frame the same way. Scopes of
    /// the callers in between are never visible.
    ///
    /// # Example
    /// ```
    /// use seta::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.decl_var("x", Value::Number(5.0));
    ///
    /// assert_eq!(context.find_var("x"), Some(&Value::Number(5.0)));
    /// assert_eq!(context.find_var("y"), None);
    /// ```
    #[must_use]
    pub fn find_var(&self, name: &str) -> Option<&Value> {
        self.frames
            .last()
            .into_iter()
            .flat_map(CallFrame::scopes)
            .chain(self.global.scopes())
            .find_map(|scope| scope.get(name))
    }

    /// Declares a variable in the innermost scope of the current frame.
    ///
    /// An existing binding with the same name in an outer scope is shadowed
    /// until that scope is left. Redeclaring in the same scope replaces the
    /// value.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Initial value. The binding's type is the value's kind.
    pub fn decl_var(&mut self, name: &str, value: Value) {
        self.current_frame_mut()
            .innermost_mut()
            .insert(name.to_string(), value);
    }

    /// Assigns to an existing variable.
    ///
    /// The binding is located with the same search as [`Context::find_var`] and
    /// updated in place.
    ///
    /// # Errors
    /// Returns `NotFoundVar` if no visible binding has this name.
    ///
    /// # Example
    /// ```
    /// use seta::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// assert!(context.set_var("x", Value::Nil, 0).is_err());
    ///
    /// context.decl_var("x", Value::Number(1.0));
    /// context.set_var("x", Value::Number(2.0), 0).unwrap();
    /// assert_eq!(context.find_var("x"), Some(&Value::Number(2.0)));
    /// ```
    pub fn set_var(&mut self, name: &str, value: Value, position: usize) -> EvalResult<()> {
        let slot = self.frames
                       .last_mut()
                       .into_iter()
                       .flat_map(CallFrame::scopes_mut)
                       .chain(self.global.scopes_mut())
                       .find_map(|scope| scope.get_mut(name));

        match slot {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::NotFoundVar { name: name.to_string(),
                                                    position }),
        }
    }

    /// Pushes a new local scope onto the current frame.
    ///
    /// # Example
    /// ```
    /// use seta::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// let initial = context.scope_depth();
    ///
    /// context.push_scope();
    ///
    /// assert_eq!(context.scope_depth(), initial + 1);
    /// ```
    pub fn push_scope(&mut self) {
        self.current_frame_mut().blocks.push(Scope::new());
    }

    /// Removes the innermost block scope of the current frame. The base scope
    /// of a frame is never removed.
    pub fn pop_scope(&mut self) {
        self.current_frame_mut().blocks.pop();
    }

    /// Pushes a frame for a function call.
    pub(crate) fn push_frame(&mut self, frame: CallFrame) {
        self.frames.push(frame);
    }

    /// Pops the frame of the innermost function call.
    pub(crate) fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Number of call frames, the global frame included.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len() + 1
    }

    /// Number of scopes in the current frame.
    #[must_use]
    pub fn scope_depth(&self) -> usize {
        self.current_frame().depth()
    }
}
