//! Syntax tree for Zip programs.
//!
//! The tree is a closed set of statement and expression variants. Each
//! node owns its children outright; nothing is shared and nothing is
//! mutated once the parser has returned.
//!
//! Every node keeps the token that introduced it, so diagnostics and the
//! debug dump can point back at the source line.

use crate::debug::{DebugRender, DebugTree};
use crate::token::{Token, TokenKind};

/// Capability shared by all nodes.
pub trait Node: DebugRender {
    /// Text of the token that introduced this node.
    fn token_value(&self) -> &str;
}

/// Root of a parsed source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_value(&self) -> &str {
        self.statements.first().map_or("", Node::token_value)
    }
}

impl DebugRender for Program {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("Program");
        for statement in &self.statements {
            tree.item(statement);
        }
        tree.close();
    }
}

// Statements

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Expression(ExpressionStatement),
    Return(ReturnStatement),
    Binding(BindingStatement),
    Block(BlockStatement),
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Expression(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Binding(s) => &s.token,
            Statement::Block(s) => &s.token,
        }
    }
}

impl Node for Statement {
    fn token_value(&self) -> &str {
        &self.token().text
    }
}

impl DebugRender for Statement {
    fn render(&self, tree: &mut DebugTree) {
        match self {
            Statement::Expression(s) => s.render(tree),
            Statement::Return(s) => s.render(tree),
            Statement::Binding(s) => s.render(tree),
            Statement::Block(s) => s.render(tree),
        }
    }
}

/// An expression used as a statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl DebugRender for ExpressionStatement {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("ExpressionStatement");
        tree.child("Token", &self.token);
        tree.child("Expression", &self.expression);
        tree.close();
    }
}

/// `return <value>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Expression,
}

impl DebugRender for ReturnStatement {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("ReturnStatement");
        tree.child("Token", &self.token);
        tree.child("Value", &self.value);
        tree.close();
    }
}

/// Which binding operator followed the identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// `name :: value`
    DeclareConst,
    /// `name := value`
    DeclareVar,
    /// `name = value`
    Reassign,
}

impl BindingKind {
    /// Map a binding operator token kind to its binding kind.
    pub const fn from_operator(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Const => Some(Self::DeclareConst),
            TokenKind::Var => Some(Self::DeclareVar),
            TokenKind::Assign => Some(Self::Reassign),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeclareConst => "declare-constant",
            Self::DeclareVar => "declare-variable",
            Self::Reassign => "reassign",
        }
    }
}

/// `name :: value`, `name := value` or `name = value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingStatement {
    /// The identifier token.
    pub token: Token,
    pub name: String,
    pub kind: BindingKind,
    /// The `::`, `:=` or `=` token.
    pub operator: Token,
    pub value: Expression,
}

impl DebugRender for BindingStatement {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("BindingStatement");
        tree.child("Token", &self.token);
        tree.scalar("Kind", self.kind.as_str());
        tree.child("Operator", &self.operator);
        tree.child("Value", &self.value);
        tree.close();
    }
}

/// `{ statement* }`, used as function bodies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockStatement {
    /// The `{` token.
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Node for BlockStatement {
    fn token_value(&self) -> &str {
        &self.token.text
    }
}

impl DebugRender for BlockStatement {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("BlockStatement");
        tree.child("Token", &self.token);
        tree.list("Statements", &self.statements);
        tree.close();
    }
}

// Expressions

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Number(NumberLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Identifier(Identifier),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    /// A hole left where the parser recorded an error.
    Invalid(InvalidExpression),
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Expression::Number(e) => &e.token,
            Expression::String(e) => &e.token,
            Expression::Boolean(e) => &e.token,
            Expression::Identifier(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Infix(e) => &e.token,
            Expression::Function(e) => &e.token,
            Expression::Call(e) => &e.token,
            Expression::Invalid(e) => &e.token,
        }
    }

    /// Name of the variant as it appears in debug dumps.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Expression::Number(_) => "NumberExpression",
            Expression::String(_) => "StringExpression",
            Expression::Boolean(_) => "BooleanExpression",
            Expression::Identifier(_) => "IdentifierExpression",
            Expression::Prefix(_) => "PrefixExpression",
            Expression::Infix(_) => "InfixExpression",
            Expression::Function(_) => "FunctionExpression",
            Expression::Call(_) => "CallExpression",
            Expression::Invalid(_) => "InvalidExpression",
        }
    }

    pub fn invalid(token: Token) -> Self {
        Expression::Invalid(InvalidExpression { token })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Expression::Invalid(_))
    }
}

impl Node for Expression {
    fn token_value(&self) -> &str {
        &self.token().text
    }
}

impl DebugRender for Expression {
    fn render(&self, tree: &mut DebugTree) {
        match self {
            Expression::Number(e) => e.render(tree),
            Expression::String(e) => e.render(tree),
            Expression::Boolean(e) => e.render(tree),
            Expression::Identifier(e) => e.render(tree),
            Expression::Prefix(e) => e.render(tree),
            Expression::Infix(e) => e.render(tree),
            Expression::Function(e) => e.render(tree),
            Expression::Call(e) => e.render(tree),
            Expression::Invalid(e) => e.render(tree),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberLiteral {
    pub token: Token,
    pub value: i64,
}

impl DebugRender for NumberLiteral {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("NumberExpression");
        tree.child("Token", &self.token);
        tree.scalar("Value", self.value);
        tree.close();
    }
}

/// A string literal. The token keeps the quotes; `value` is the contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl DebugRender for StringLiteral {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("StringExpression");
        tree.child("Token", &self.token);
        tree.scalar("Value", &self.value);
        tree.close();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl DebugRender for BooleanLiteral {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("BooleanExpression");
        tree.child("Token", &self.token);
        tree.scalar("Value", self.value);
        tree.close();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Self {
        let name = token.text.clone();
        Identifier { token, name }
    }
}

impl DebugRender for Identifier {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("IdentifierExpression");
        tree.child("Token", &self.token);
        tree.scalar("Value", &self.name);
        tree.close();
    }
}

/// `<operator><right>` for unary `-` and `!`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: Token,
    pub right: Box<Expression>,
}

impl DebugRender for PrefixExpression {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("PrefixExpression");
        tree.child("Token", &self.token);
        tree.child("Operator", &self.operator);
        tree.child("Right", &self.right);
        tree.close();
    }
}

/// `<left> <operator> <right>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixExpression {
    /// The operator token.
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
}

impl DebugRender for InfixExpression {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("InfixExpression");
        tree.child("Token", &self.token);
        tree.child("Left", &self.left);
        tree.child("Operator", &self.operator);
        tree.child("Right", &self.right);
        tree.close();
    }
}

/// `fn(<parameters>) { <body> }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl DebugRender for FunctionLiteral {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("FunctionExpression");
        tree.child("Token", &self.token);
        tree.list("Parameters", &self.parameters);
        tree.child("Body", &self.body);
        tree.close();
    }
}

/// `<function>(<arguments>)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression {
    /// The `(` token.
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl DebugRender for CallExpression {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("CallExpression");
        tree.child("Token", &self.token);
        tree.child("Function", &self.function);
        tree.list("Arguments", &self.arguments);
        tree.close();
    }
}

/// Placeholder for a sub-expression that failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidExpression {
    /// The token the parser was looking at when it gave up.
    pub token: Token,
}

impl DebugRender for InvalidExpression {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("InvalidExpression");
        tree.child("Token", &self.token);
        tree.close();
    }
}

#[cfg(test)]
mod tests;
