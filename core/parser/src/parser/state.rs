//! The mutable context a parse threads through every production.
//!
//! The boolean context cluster lives in a [`ContextFlags`] set so that
//! entering a function, class, static block or for-head can snapshot the
//! whole cluster in one copy and restore it on the way out, error or not.

use super::scope::ScopeStack;
use bitflags::bitflags;
use rustc_hash::{FxHashMap, FxHashSet};
use sparrow_ast::{Position, Span};

bitflags! {
    /// The boolean context flags of the parser.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct ContextFlags: u32 {
        /// Strict mode code.
        const STRICT = 1 << 0;
        /// Inside a function body (of any kind, including arrows).
        const IN_FUNCTION = 1 << 1;
        /// Inside a generator, where `yield` is an expression keyword.
        const IN_GENERATOR = 1 << 2;
        /// Inside an async function, where `await` is an expression keyword.
        const IN_ASYNC = 1 << 3;
        /// `new.target` is accessible.
        const ALLOW_NEW_TARGET = 1 << 4;
        /// `super.property` is accessible.
        const ALLOW_SUPER_PROPERTY = 1 << 5;
        /// `super(…)` is accessible.
        const ALLOW_SUPER_CALL = 1 << 6;
        /// Inside a class with an `extends` heritage.
        const IN_DERIVED_CLASS = 1 << 7;
        /// Inside a `static { … }` block.
        const IN_STATIC_BLOCK = 1 << 8;
        /// Inside a class field initializer.
        const IN_CLASS_FIELD_INIT = 1 << 9;
        /// Inside a formal parameter list, where `yield` and `await`
        /// expressions are forbidden in defaults.
        const IN_FORMAL_PARAMETERS = 1 << 10;
        /// `in` is an operator. Off only in the init clause of a `for` head.
        const ALLOW_IN = 1 << 11;
        /// The current operator ladder contains `??`.
        const IN_COALESCE_CHAIN = 1 << 12;
        /// The current operator ladder contains `&&` or `||`.
        const IN_LOGICAL_CHAIN = 1 << 13;
        /// At the top level of a module, where `await` is an expression
        /// keyword and `import`/`export` declarations are admitted.
        const AT_MODULE_TOP_LEVEL = 1 << 14;
    }
}

/// A label visible to `break`/`continue` at the current cursor position.
#[derive(Debug)]
pub(crate) struct Label {
    pub(crate) name: Box<str>,
    /// Whether the label names an iteration statement, which is what a
    /// labeled `continue` requires.
    pub(crate) iteration: bool,
}

/// A `#name` reference held until its enclosing class body (or the program)
/// completes.
#[derive(Debug)]
pub(crate) struct PendingPrivateReference {
    pub(crate) name: Box<str>,
    pub(crate) span: Span,
    /// `private_frames.len()` at record time; references recorded inside a
    /// class carry a depth greater than the surrounding frames.
    pub(crate) depth: usize,
}

/// An `export { x }` specifier local name, resolved against the module's top
/// level at end of parse.
#[derive(Debug)]
pub(crate) struct PendingExportBinding {
    pub(crate) name: Box<str>,
    pub(crate) span: Span,
}

/// A deferred cover-grammar error: recorded while parsing an object or array
/// literal, cleared if the literal is converted to a destructuring pattern,
/// fatal at the end of the statement otherwise.
#[derive(Debug)]
pub(crate) struct CoverError {
    /// Byte offset of the offending construct, used for containment checks
    /// when a literal is converted.
    pub(crate) offset: u32,
    pub(crate) position: Position,
    pub(crate) message: &'static str,
}

/// How a private name is used inside its class, for duplicate detection.
/// A getter and a setter of the same name complement each other; everything
/// else clashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrivateKind {
    Getter,
    Setter,
    Other,
}

/// The mutable state of a parse.
#[derive(Debug)]
pub(crate) struct ParserState {
    pub(crate) flags: ContextFlags,
    pub(crate) scopes: ScopeStack,
    /// Labels lexically enclosing the cursor; swapped out at function
    /// boundaries.
    pub(crate) labels: Vec<Label>,
    pub(crate) loop_depth: u32,
    pub(crate) switch_depth: u32,
    /// Private-name environments, innermost class last.
    pub(crate) private_frames: Vec<FxHashMap<Box<str>, PrivateKind>>,
    pub(crate) pending_private: Vec<PendingPrivateReference>,
    /// Every name exported so far, for duplicate detection.
    pub(crate) exported_names: FxHashSet<Box<str>>,
    pub(crate) pending_exports: Vec<PendingExportBinding>,
    /// Start offset of the most recent parenthesized expression that is not
    /// a simple assignment target.
    pub(crate) paren_non_simple_target: Option<u32>,
    /// Span of the expression most recently wrapped in parentheses, for the
    /// `(-a) ** b` and `({a}) = x` distinctions.
    pub(crate) last_parenthesized: Option<(u32, u32)>,
    pub(crate) cover_errors: Vec<CoverError>,
    /// Start offsets of array/object literals with a trailing comma after a
    /// spread element, which a conversion to a pattern must reject.
    pub(crate) spread_trailing_commas: FxHashSet<u32>,
}

impl ParserState {
    pub(crate) fn new() -> Self {
        Self {
            flags: ContextFlags::ALLOW_IN,
            scopes: ScopeStack::new(),
            labels: Vec::new(),
            loop_depth: 0,
            switch_depth: 0,
            private_frames: Vec::new(),
            pending_private: Vec::new(),
            exported_names: FxHashSet::default(),
            pending_exports: Vec::new(),
            paren_non_simple_target: None,
            last_parenthesized: None,
            cover_errors: Vec::new(),
            spread_trailing_commas: FxHashSet::default(),
        }
    }

    pub(crate) fn strict(&self) -> bool {
        self.flags.contains(ContextFlags::STRICT)
    }

    pub(crate) fn has(&self, flags: ContextFlags) -> bool {
        self.flags.contains(flags)
    }

    /// Whether a label with the given name is currently visible.
    pub(crate) fn label_visible(&self, name: &str) -> Option<&Label> {
        self.labels.iter().rev().find(|label| &*label.name == name)
    }

    /// Records a pending private-name reference at the current class depth.
    pub(crate) fn record_private_reference(&mut self, name: Box<str>, span: Span) {
        let depth = self.private_frames.len();
        self.pending_private
            .push(PendingPrivateReference { name, span, depth });
    }

    /// Whether `name` is declared in any currently visible private frame.
    pub(crate) fn private_name_visible(&self, name: &str) -> bool {
        self.private_frames
            .iter()
            .any(|frame| frame.contains_key(name))
    }

    /// Drops cover errors and trailing-comma records within the given span,
    /// after the covering literal was committed to being a pattern.
    pub(crate) fn clear_cover_range(&mut self, span: Span) {
        self.cover_errors
            .retain(|e| e.offset < span.start || e.offset >= span.end);
    }
}
