//! Lexical scopes for resolving identifiers during the build.

use indexmap::IndexMap;

use crate::expr::RightValue;
use crate::value::Value;

/// Stack of name to [`Value`] frames.
///
/// A frame is pushed on entering a function body, operation body, rule
/// alternative, conditional branch or loop body. Lookups search innermost first.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<IndexMap<String, Value>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.frames.push(IndexMap::new());
        log::trace!("push scope (depth {})", self.frames.len());
    }

    /// Pop the innermost frame.
    ///
    /// # Panics
    ///
    /// If the stack is empty: pushes and pops must nest.
    pub fn pop(&mut self) {
        if self.frames.pop().is_none() {
            panic!("pop on an empty scope stack");
        }
        log::trace!("pop scope (depth {})", self.frames.len());
    }

    /// Bind a value in the innermost frame.
    ///
    /// Returns `false` if the innermost frame already binds the name. Shadowing an
    /// outer frame's binding is allowed.
    ///
    /// # Panics
    ///
    /// If no frame has been pushed.
    pub fn declare(&mut self, value: Value) -> bool {
        let Some(frame) = self.frames.last_mut() else {
            panic!("declare `{}` outside of any scope", value.name());
        };
        if frame.contains_key(value.name()) {
            return false;
        }
        frame.insert(value.name().to_owned(), value);
        true
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.get_mut(name))
    }

    /// Contents of every binding, frame by frame in declaration order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(
            self.frames
                .iter()
                .map(|frame| frame.values().map(|v| v.content().clone()).collect())
                .collect(),
        )
    }

    /// Rebind the bindings recorded in `snapshot` to their recorded contents.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        for (value, content) in self.recorded_mut(snapshot) {
            value.set_content(content.clone());
        }
    }

    /// Forget the content of every binding that disagrees with `snapshot`.
    ///
    /// Two contents agree when they are the same expression or fold to the same
    /// constant. Returns the names of the forgotten bindings.
    pub fn merge(&mut self, snapshot: &Snapshot) -> Vec<String> {
        let mut forgotten = Vec::new();
        for (value, content) in self.recorded_mut(snapshot) {
            if !value.content().agrees_with(content) {
                value.forget_content();
                forgotten.push(value.name().to_owned());
            }
        }
        forgotten
    }

    fn recorded_mut<'a>(
        &'a mut self,
        snapshot: &'a Snapshot,
    ) -> impl Iterator<Item = (&'a mut Value, &'a RightValue)> {
        self.frames
            .iter_mut()
            .zip(&snapshot.0)
            .flat_map(|(frame, contents)| frame.values_mut().zip(contents))
    }

    /// Number of frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Binding contents recorded by [`ScopeStack::snapshot`].
///
/// Only meaningful for the stack it was taken from, while none of the recorded
/// frames has been popped.
#[derive(Debug)]
pub struct Snapshot(Vec<Vec<RightValue>>);
