//! Environment for name resolution in the interpreter.
//!
//! Scopes live in an arena (`Vec<Scope>`) and refer to their parent by
//! index. The arena doubles as the stack of active scopes: the last entry
//! is the innermost scope and index 0 is the global scope. Scopes are
//! strictly LIFO, so popping truncates the arena; closures never keep a
//! scope alive because they capture a snapshot of values instead.

use rustc_hash::FxHashMap;

use crate::Object;

/// Index of a scope in the environment's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, always at the bottom of the arena.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

/// Whether a binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// Declared with `:=`.
    Mutable,
    /// Declared with `::`.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Why `Environment::assign` refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No visible binding has this name.
    Undefined,
    /// The innermost binding is immutable.
    Immutable,
    /// The binding is visible but lives in an enclosing scope.
    Enclosing,
}

#[derive(Clone, Debug)]
struct Binding {
    value: Object,
    mutability: Mutability,
}

/// A single scope containing bindings.
#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<ScopeId>,
}

/// Scope arena plus the chain of active scopes.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create an environment holding only the global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
        }
    }

    /// Number of active scopes, the global scope included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The innermost active scope.
    pub fn current(&self) -> ScopeId {
        // The arena never drops below the global scope.
        ScopeId(self.scopes.len() - 1)
    }

    /// Enter a block scope nested in the current one.
    pub fn push_scope(&mut self) {
        let parent = self.current();
        self.push(parent);
    }

    /// Enter a function body scope. Its parent is the global scope, not the
    /// caller's scope, so callers' locals are invisible inside.
    pub fn push_function_scope(&mut self) {
        self.push(ScopeId::GLOBAL);
    }

    fn push(&mut self, parent: ScopeId) {
        self.scopes.push(Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        });
    }

    /// Leave the innermost scope. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Bind `name` in the innermost scope, replacing any binding of the
    /// same name there.
    pub fn define(&mut self, name: impl Into<String>, value: Object, mutability: Mutability) {
        let scope = self.innermost_mut();
        scope
            .bindings
            .insert(name.into(), Binding { value, mutability });
    }

    /// Does the innermost scope already bind `name`?
    pub fn declared_here(&self, name: &str) -> bool {
        self.innermost().bindings.contains_key(name)
    }

    /// Resolve `name`, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<&Object> {
        self.resolve(name).map(|(_, binding)| &binding.value)
    }

    /// Reassign an existing mutable binding of the innermost scope.
    pub fn assign(&mut self, name: &str, value: Object) -> Result<(), AssignError> {
        let current = self.current();
        match self.resolve(name) {
            None => return Err(AssignError::Undefined),
            Some((owner, _)) if owner != current => return Err(AssignError::Enclosing),
            Some((_, binding)) if !binding.mutability.is_mutable() => {
                return Err(AssignError::Immutable)
            }
            Some(_) => {}
        }
        if let Some(binding) = self.innermost_mut().bindings.get_mut(name) {
            binding.value = value;
        }
        Ok(())
    }

    /// Snapshot every visible binding. Inner bindings shadow outer ones.
    pub fn capture(&self) -> FxHashMap<String, Object> {
        let mut captures = FxHashMap::default();
        let mut next = Some(self.current());
        while let Some(id) = next {
            let scope = &self.scopes[id.index()];
            for (name, binding) in &scope.bindings {
                captures
                    .entry(name.clone())
                    .or_insert_with(|| binding.value.clone());
            }
            next = scope.parent;
        }
        captures
    }

    fn resolve(&self, name: &str) -> Option<(ScopeId, &Binding)> {
        let mut next = Some(self.current());
        while let Some(id) = next {
            let scope = &self.scopes[id.index()];
            if let Some(binding) = scope.bindings.get(name) {
                return Some((id, binding));
            }
            next = scope.parent;
        }
        None
    }

    fn innermost(&self) -> &Scope {
        &self.scopes[self.scopes.len() - 1]
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
