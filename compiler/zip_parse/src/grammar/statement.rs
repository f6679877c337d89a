//! Statement parsing.

use zip_ir::{
    BindingKind, BindingStatement, BlockStatement, ExpressionStatement, ReturnStatement,
    Statement, TokenKind,
};

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse one statement starting at the current token. Leaves the last
    /// token of the statement as current.
    pub(crate) fn parse_statement(&mut self) -> Statement {
        tracing::trace!(kind = %self.current.kind, line = self.current.line, "statement");
        match self.current.kind {
            TokenKind::Identifier => match BindingKind::from_operator(self.peek.kind) {
                Some(kind) => Statement::Binding(self.parse_binding_statement(kind)),
                None => Statement::Expression(self.parse_expression_statement()),
            },
            TokenKind::Return => Statement::Return(self.parse_return_statement()),
            _ => Statement::Expression(self.parse_expression_statement()),
        }
    }

    fn parse_expression_statement(&mut self) -> ExpressionStatement {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);
        self.eat_semicolon();
        ExpressionStatement { token, expression }
    }

    fn parse_return_statement(&mut self) -> ReturnStatement {
        let token = self.current.clone();
        self.advance();
        let value = self.parse_expression(Precedence::Lowest);
        self.eat_semicolon();
        ReturnStatement { token, value }
    }

    /// `name <op> value` where the operator has already been classified.
    fn parse_binding_statement(&mut self, kind: BindingKind) -> BindingStatement {
        let token = self.current.clone();
        let name = token.text.clone();
        self.advance();
        let operator = self.current.clone();
        self.advance();
        let value = self.parse_expression(Precedence::Lowest);
        self.eat_semicolon();
        BindingStatement {
            token,
            name,
            kind,
            operator,
            value,
        }
    }

    /// `{ statement* }`. The current token is `{`; on return it is `}`
    /// (or `Eof` if the block was never closed).
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();
        self.advance();

        while !self.current.is(TokenKind::RBrace) && !self.current.is(TokenKind::Eof) {
            statements.push(self.parse_statement());
            self.advance();
        }

        if self.current.is(TokenKind::Eof) {
            let error = ParseError::unclosed_block(&token);
            self.record(error);
        }

        BlockStatement { token, statements }
    }
}
