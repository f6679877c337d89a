//! Runtime values.
//!
//! `Object` is a closed enum; every evaluation step produces one. Booleans
//! and null are handed out as copies of the [`TRUE`], [`FALSE`] and
//! [`NULL`] statics. They carry no heap data, so a copy is
//! indistinguishable from the static itself.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use zip_ir::{BlockStatement, DebugRender, DebugTree, Identifier};

pub static TRUE: Object = Object::Boolean(true);
pub static FALSE: Object = Object::Boolean(false);
pub static NULL: Object = Object::Null;

#[derive(Clone, Debug)]
pub enum Object {
    Number(i64),
    String(String),
    Boolean(bool),
    Null,
    /// A value travelling out of a function body via `return`.
    ReturnValue(Box<Object>),
    /// A language-level error, produced only at the top of evaluation.
    Error(String),
    /// Result of a prefix operator. Operators look through the wrapper.
    Prefix(Box<Object>),
    Function(Arc<FunctionObject>),
}

/// A function literal together with the bindings it could see when it
/// was evaluated.
#[derive(Debug)]
pub struct FunctionObject {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub captures: FxHashMap<String, Object>,
}

impl Object {
    /// One of the two boolean constants.
    #[inline]
    pub fn from_bool(value: bool) -> Object {
        if value {
            TRUE.clone()
        } else {
            FALSE.clone()
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Object::Number(_) => "NUMBER",
            Object::String(_) => "STRING",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Prefix(_) => "PREFIX",
            Object::Function(_) => "FUNCTION",
        }
    }

    /// The value under any `Prefix` wrappers.
    pub fn peeled(&self) -> &Object {
        let mut object = self;
        while let Object::Prefix(inner) = object {
            object = inner;
        }
        object
    }

    /// Owned version of [`Object::peeled`].
    pub fn into_peeled(self) -> Object {
        let mut object = self;
        while let Object::Prefix(inner) = object {
            object = *inner;
        }
        object
    }

    /// `false` and null are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self.peeled() {
            Object::Boolean(value) => *value,
            Object::Null => false,
            _ => true,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// User-facing rendering.
    pub fn inspect(&self) -> String {
        match self {
            Object::Number(n) => n.to_string(),
            Object::String(s) => s.clone(),
            Object::Boolean(b) => b.to_string(),
            Object::Null => "null".to_string(),
            Object::ReturnValue(inner) | Object::Prefix(inner) => inner.inspect(),
            Object::Error(message) => format!("ERROR: {message}"),
            Object::Function(function) => {
                let names: Vec<&str> = function
                    .parameters
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect();
                format!("fn({}) {{ ... }}", names.join(", "))
            }
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Number(a), Object::Number(b)) => a == b,
            (Object::String(a), Object::String(b)) | (Object::Error(a), Object::Error(b)) => {
                a == b
            }
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::ReturnValue(a), Object::ReturnValue(b))
            | (Object::Prefix(a), Object::Prefix(b)) => a == b,
            // Functions are equal only to themselves.
            (Object::Function(a), Object::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Object {}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl DebugRender for Object {
    fn render(&self, tree: &mut DebugTree) {
        match self {
            Object::Number(n) => {
                tree.open("Number");
                tree.scalar("Value", n);
            }
            Object::String(s) => {
                tree.open("String");
                tree.scalar("Value", s);
            }
            Object::Boolean(b) => {
                tree.open("Boolean");
                tree.scalar("Value", b);
            }
            Object::Null => tree.open("Null"),
            Object::ReturnValue(inner) => {
                tree.open("ReturnValue");
                tree.child("Value", inner);
            }
            Object::Error(message) => {
                tree.open("Error");
                tree.scalar("Message", message);
            }
            Object::Prefix(inner) => {
                tree.open("Prefix");
                tree.child("Value", inner);
            }
            Object::Function(function) => {
                tree.open("Function");
                tree.list("Parameters", &function.parameters);
                tree.child("Body", &function.body);
                tree.scalar("Captures", function.captures.len());
            }
        }
        tree.close();
    }
}
