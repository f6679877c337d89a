//! Expression parsing.
//!
//! `parse_expression` looks up the prefix rule for the current token, then
//! keeps folding infix rules into the left operand while the lookahead
//! binds tighter than the caller's threshold.

use zip_ir::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, InfixExpression,
    NumberLiteral, PrefixExpression, StringLiteral, TokenKind,
};
use zip_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot
    /// overflow the native stack.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Expression {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Expression {
        let Some(&prefix) = self.prefix_rules.get(&self.current.kind) else {
            return self.no_prefix_rule();
        };
        tracing::trace!(kind = %self.current.kind, ?precedence, "prefix");
        let mut left = prefix(self);

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let Some(&infix) = self.infix_rules.get(&self.peek.kind) else {
                return left;
            };
            self.advance();
            tracing::trace!(kind = %self.current.kind, "infix");
            left = infix(self, left);
        }

        left
    }

    #[cold]
    fn no_prefix_rule(&mut self) -> Expression {
        let error = if self.current.is(TokenKind::Illegal) {
            ParseError::illegal(&self.current)
        } else {
            ParseError::missing_prefix(&self.current)
        };
        self.record(error);
        Expression::invalid(self.current.clone())
    }

    // Prefix rules

    pub(crate) fn parse_number_literal(&mut self) -> Expression {
        let token = self.current.clone();
        match token.text.parse::<i64>() {
            Ok(value) => Expression::Number(NumberLiteral { token, value }),
            Err(_) => {
                self.record(ParseError::invalid_integer(&token));
                Expression::invalid(token)
            }
        }
    }

    /// The token keeps its quotes; the literal's value does not.
    pub(crate) fn parse_string_literal(&mut self) -> Expression {
        let token = self.current.clone();
        let value = token
            .text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(token.text.as_str())
            .to_owned();
        Expression::String(StringLiteral { token, value })
    }

    pub(crate) fn parse_identifier(&mut self) -> Expression {
        Expression::Identifier(Identifier::from_token(self.current.clone()))
    }

    pub(crate) fn parse_boolean_literal(&mut self) -> Expression {
        let token = self.current.clone();
        let value = token.is(TokenKind::True);
        Expression::Boolean(BooleanLiteral { token, value })
    }

    /// `-x` and `!x`. The operand binds at `Prefix`, so `-a * b` is
    /// `(-a) * b`.
    pub(crate) fn parse_prefix_expression(&mut self) -> Expression {
        let token = self.current.clone();
        let operator = token.clone();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix);
        Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        })
    }

    /// `( expr )`. The grouping itself leaves no node behind.
    pub(crate) fn parse_grouped_expression(&mut self) -> Expression {
        self.advance();
        let inner = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RParen) {
            return Expression::invalid(self.current.clone());
        }
        inner
    }

    /// `fn ( params ) { body }`
    pub(crate) fn parse_function_literal(&mut self) -> Expression {
        let token = self.current.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return Expression::invalid(token);
        }

        let Some(parameters) =
            self.parse_list(TokenKind::RParen, TokenKind::Comma, Self::parse_parameter)
        else {
            return Expression::invalid(token);
        };

        if !self.expect_peek(TokenKind::LBrace) {
            return Expression::invalid(token);
        }
        let body = self.parse_block_statement();

        Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        })
    }

    fn parse_parameter(&mut self) -> Identifier {
        if !self.current.is(TokenKind::Identifier) {
            let error = ParseError::expected_parameter(&self.current);
            self.record(error);
        }
        Identifier::from_token(self.current.clone())
    }

    // Infix rules

    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> Expression {
        let token = self.current.clone();
        let operator = token.clone();
        let precedence = Precedence::of(token.kind);
        self.advance();
        let right = self.parse_expression(precedence);
        Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// `callee ( args )`; the current token is `(`.
    pub(crate) fn parse_call_expression(&mut self, function: Expression) -> Expression {
        let token = self.current.clone();
        let Some(arguments) = self.parse_list(TokenKind::RParen, TokenKind::Comma, |p| {
            p.parse_expression(Precedence::Lowest)
        }) else {
            return Expression::invalid(token);
        };
        Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    /// `item (delimiter item)* end`, starting just before the first item.
    ///
    /// Returns `None` (after recording an error) if the list is not closed
    /// by `end`. On success the current token is `end`.
    fn parse_list<T>(
        &mut self,
        end: TokenKind,
        delimiter: TokenKind,
        mut item: impl FnMut(&mut Self) -> T,
    ) -> Option<Vec<T>> {
        let mut items = Vec::new();
        if self.peek_is(end) {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(item(self));
        while self.peek_is(delimiter) {
            self.advance();
            self.advance();
            items.push(item(self));
        }

        self.expect_peek(end).then_some(items)
    }
}
