//! Scope frames and binding bookkeeping.
//!
//! Every function body (and the program itself) sits on exactly one frame
//! with `is_function_scope` set; block frames stack above it until the next
//! function boundary. `var` declarations propagate into every enclosing
//! non-function frame up to and including the function frame, which is what
//! makes a `var` in a loop body clash with a `let` in the loop head.

use rustc_hash::FxHashSet;

/// The outcome of declaring a name in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Declare {
    /// The name was recorded.
    Ok,
    /// The name clashes with an existing declaration.
    Redeclared,
}

/// One scope frame.
#[derive(Debug, Default)]
pub(crate) struct ScopeFrame {
    /// `let`, `const`, `class` and import bindings.
    pub(crate) lexical: FxHashSet<Box<str>>,
    /// `var` bindings, including hoisted ones from inner frames.
    pub(crate) var: FxHashSet<Box<str>>,
    /// All function declarations.
    pub(crate) function: FxHashSet<Box<str>>,
    /// Non-generator, non-async function declarations, which sloppy mode
    /// tolerates declaring twice.
    pub(crate) plain_function: FxHashSet<Box<str>>,
    /// Whether this frame is the base frame of a function body or program.
    pub(crate) is_function_scope: bool,
}

/// The stack of scope frames of a parse.
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Pushes the base frame of a function body or program.
    pub(crate) fn push_function(&mut self) {
        self.frames.push(ScopeFrame {
            is_function_scope: true,
            ..ScopeFrame::default()
        });
    }

    /// Pushes a block-level frame.
    pub(crate) fn push_block(&mut self) {
        self.frames.push(ScopeFrame::default());
    }

    /// Pops the innermost frame.
    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    /// The number of open frames.
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    fn current(&mut self) -> &mut ScopeFrame {
        self.frames.last_mut().expect("no scope frame open")
    }

    /// Declares a `let`/`const`/`class`/import binding in the innermost
    /// frame.
    pub(crate) fn declare_lexical(&mut self, name: &str) -> Declare {
        let frame = self.current();
        if frame.lexical.contains(name)
            || frame.var.contains(name)
            || frame.function.contains(name)
        {
            return Declare::Redeclared;
        }
        frame.lexical.insert(name.into());
        Declare::Ok
    }

    /// Declares a function declaration in the innermost frame. Two plain
    /// function declarations of the same name coexist in sloppy mode.
    pub(crate) fn declare_function(&mut self, name: &str, plain: bool, sloppy: bool) -> Declare {
        let frame = self.current();
        if frame.lexical.contains(name) {
            return Declare::Redeclared;
        }
        if frame.function.contains(name) {
            let tolerated = plain && sloppy && frame.plain_function.contains(name);
            if !tolerated {
                return Declare::Redeclared;
            }
        }
        frame.function.insert(name.into());
        if plain {
            frame.plain_function.insert(name.into());
        }
        Declare::Ok
    }

    /// Declares a `var` binding, hoisting it into every enclosing frame up
    /// to and including the function frame.
    pub(crate) fn declare_var(&mut self, name: &str) -> Declare {
        for frame in self.frames.iter_mut().rev() {
            if frame.lexical.contains(name) {
                return Declare::Redeclared;
            }
            frame.var.insert(name.into());
            if frame.is_function_scope {
                break;
            }
        }
        Declare::Ok
    }

    /// Whether the outermost frame binds `name` in any of its sets. Used to
    /// resolve `export { name }` specifiers against the module top level.
    pub(crate) fn is_bound_at_top_level(&self, name: &str) -> bool {
        self.frames.first().is_some_and(|frame| {
            frame.lexical.contains(name)
                || frame.var.contains(name)
                || frame.function.contains(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Declare, ScopeStack};

    #[test]
    fn lexical_redeclaration() {
        let mut scopes = ScopeStack::new();
        scopes.push_function();
        assert_eq!(scopes.declare_lexical("x"), Declare::Ok);
        assert_eq!(scopes.declare_lexical("x"), Declare::Redeclared);
    }

    #[test]
    fn var_hoists_through_blocks() {
        let mut scopes = ScopeStack::new();
        scopes.push_function();
        scopes.push_block();
        assert_eq!(scopes.declare_lexical("x"), Declare::Ok);
        scopes.push_block();
        // The inner `var x` propagates outwards and hits the `let x`.
        assert_eq!(scopes.declare_var("x"), Declare::Redeclared);
        assert_eq!(scopes.declare_var("y"), Declare::Ok);
        scopes.pop();
        scopes.pop();
        // The hoisted `var y` reached the function frame.
        assert_eq!(scopes.declare_lexical("y"), Declare::Redeclared);
    }

    #[test]
    fn var_stops_at_function_boundary() {
        let mut scopes = ScopeStack::new();
        scopes.push_function();
        assert_eq!(scopes.declare_lexical("x"), Declare::Ok);
        scopes.push_function();
        assert_eq!(scopes.declare_var("x"), Declare::Ok);
    }

    #[test]
    fn duplicate_plain_functions_tolerated_in_sloppy() {
        let mut scopes = ScopeStack::new();
        scopes.push_function();
        assert_eq!(scopes.declare_function("f", true, true), Declare::Ok);
        assert_eq!(scopes.declare_function("f", true, true), Declare::Ok);
        assert_eq!(scopes.declare_function("f", true, false), Declare::Redeclared);
        assert_eq!(scopes.declare_function("g", false, true), Declare::Ok);
        assert_eq!(scopes.declare_function("g", false, true), Declare::Redeclared);
    }

    #[test]
    fn function_clashes_with_lexical() {
        let mut scopes = ScopeStack::new();
        scopes.push_function();
        assert_eq!(scopes.declare_lexical("f"), Declare::Ok);
        assert_eq!(scopes.declare_function("f", true, true), Declare::Redeclared);
    }

    #[test]
    fn top_level_binding_lookup() {
        let mut scopes = ScopeStack::new();
        scopes.push_function();
        scopes.declare_lexical("a");
        scopes.declare_var("b");
        scopes.declare_function("c", true, true);
        assert!(scopes.is_bound_at_top_level("a"));
        assert!(scopes.is_bound_at_top_level("b"));
        assert!(scopes.is_bound_at_top_level("c"));
        assert!(!scopes.is_bound_at_top_level("d"));
    }
}
