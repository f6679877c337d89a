//! Structural debug dumps.
//!
//! Every node, token and runtime object renders as an indented
//! `TypeName { Field: value, ... }` block. The output is deterministic so
//! tests can compare two dumps after stripping whitespace.
//!
//! ```text
//! NumberExpression {
//!   Token: Token {
//!     Type: NUMBER,
//!     Value: 1,
//!     Line: 1,
//!   },
//!   Value: 1,
//! }
//! ```

use std::fmt::{self, Write};

const INDENT: &str = "  ";

/// Something that can write itself into a [`DebugTree`].
pub trait DebugRender {
    /// Write `self` at the current position, starting with the type name
    /// and ending with the closing brace. Callers add separators.
    fn render(&self, tree: &mut DebugTree);

    fn debug_string(&self) -> String {
        let mut tree = DebugTree::new();
        self.render(&mut tree);
        tree.finish()
    }
}

impl<T: DebugRender + ?Sized> DebugRender for Box<T> {
    fn render(&self, tree: &mut DebugTree) {
        (**self).render(tree);
    }
}

/// Indentation-tracking string builder for debug dumps.
#[derive(Debug, Default)]
pub struct DebugTree {
    out: String,
    depth: usize,
}

impl DebugTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a `Name {` block.
    pub fn open(&mut self, name: &str) {
        self.out.push_str(name);
        self.out.push_str(" {\n");
        self.depth += 1;
    }

    /// End the innermost block.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.out.push('}');
    }

    /// `Field: value,` on its own line.
    pub fn scalar(&mut self, field: &str, value: impl fmt::Display) {
        self.indent();
        let _ = writeln!(self.out, "{field}: {value},");
    }

    /// `Field: <nested node>,`
    pub fn child<T: DebugRender + ?Sized>(&mut self, field: &str, node: &T) {
        self.indent();
        self.out.push_str(field);
        self.out.push_str(": ");
        node.render(self);
        self.out.push_str(",\n");
    }

    /// A nested node without a field label (sequence members).
    pub fn item<T: DebugRender + ?Sized>(&mut self, node: &T) {
        self.indent();
        node.render(self);
        self.out.push_str(",\n");
    }

    /// `Field: [ <node>, ... ],`
    pub fn list<'a, T, I>(&mut self, field: &str, nodes: I)
    where
        T: DebugRender + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.indent();
        self.out.push_str(field);
        let mut nodes = nodes.into_iter().peekable();
        if nodes.peek().is_none() {
            self.out.push_str(": [],\n");
            return;
        }
        self.out.push_str(": [\n");
        self.depth += 1;
        for node in nodes {
            self.item(node);
        }
        self.depth -= 1;
        self.indent();
        self.out.push_str("],\n");
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }
}

/// Strip all whitespace from a dump so two renderings can be compared
/// regardless of layout.
pub fn normalize_dump(dump: &str) -> String {
    dump.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Leaf(i64);

    impl DebugRender for Leaf {
        fn render(&self, tree: &mut DebugTree) {
            tree.open("Leaf");
            tree.scalar("Value", self.0);
            tree.close();
        }
    }

    struct Branch(Vec<Leaf>);

    impl DebugRender for Branch {
        fn render(&self, tree: &mut DebugTree) {
            tree.open("Branch");
            tree.list("Leaves", &self.0);
            tree.close();
        }
    }

    #[test]
    fn nested_blocks_are_indented() {
        let dump = Branch(vec![Leaf(1), Leaf(2)]).debug_string();
        assert_eq!(
            dump,
            "Branch {\n  Leaves: [\n    Leaf {\n      Value: 1,\n    },\n    Leaf {\n      Value: 2,\n    },\n  ],\n}"
        );
    }

    #[test]
    fn empty_list_stays_on_one_line() {
        assert_eq!(Branch(vec![]).debug_string(), "Branch {\n  Leaves: [],\n}");
    }

    #[test]
    fn normalize_drops_layout() {
        assert_eq!(normalize_dump("Leaf {\n  Value: 1,\n}"), "Leaf{Value:1,}");
    }
}
