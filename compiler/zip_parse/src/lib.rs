//! Pratt parser for Zip.
//!
//! The parser pulls tokens from a [`Lexer`] one at a time, holding the
//! current token and one token of lookahead. Expressions are parsed by
//! precedence climbing over two dispatch tables: prefix rules keyed by the
//! token that starts an expression, infix rules keyed by the token that
//! continues one.
//!
//! Parsing never stops early. Problems are recorded as [`ParseError`]s and
//! the offending sub-expression becomes `Expression::Invalid`, so callers
//! always get a complete [`Program`] back.

mod error;
mod grammar;
mod precedence;

pub use error::{ParseError, ReportedErrors};
pub use precedence::Precedence;

use rustc_hash::FxHashMap;
use zip_ir::{Expression, Program, Token, TokenKind};
use zip_lexer::Lexer;

/// Parses an expression starting at the current token.
pub(crate) type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Expression;
/// Continues an expression; the current token is the operator.
pub(crate) type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Expression;

/// Parser state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
    prefix_rules: FxHashMap<TokenKind, PrefixParseFn<'a>>,
    infix_rules: FxHashMap<TokenKind, InfixParseFn<'a>>,
}

impl<'a> Parser<'a> {
    /// Create a parser and load the first two tokens.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let line = lexer.line();
        let mut parser = Parser {
            lexer,
            current: Token::eof(line),
            peek: Token::eof(line),
            errors: Vec::new(),
            prefix_rules: FxHashMap::default(),
            infix_rules: FxHashMap::default(),
        };

        parser.register_prefix(TokenKind::Number, Self::parse_number_literal);
        parser.register_prefix(TokenKind::String, Self::parse_string_literal);
        parser.register_prefix(TokenKind::Identifier, Self::parse_identifier);
        parser.register_prefix(TokenKind::True, Self::parse_boolean_literal);
        parser.register_prefix(TokenKind::False, Self::parse_boolean_literal);
        parser.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);
        parser.register_prefix(TokenKind::Function, Self::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Modulo,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            parser.register_infix(kind, Self::parse_infix_expression);
        }
        parser.register_infix(TokenKind::LParen, Self::parse_call_expression);

        parser.advance();
        parser.advance();
        parser
    }

    fn register_prefix(&mut self, kind: TokenKind, rule: PrefixParseFn<'a>) {
        self.prefix_rules.insert(kind, rule);
    }

    fn register_infix(&mut self, kind: TokenKind, rule: InfixParseFn<'a>) {
        self.infix_rules.insert(kind, rule);
    }

    /// Parse statements until end of input.
    pub fn parse(&mut self) -> Program {
        let mut program = Program::new();
        while !self.current.is(TokenKind::Eof) {
            program.statements.push(self.parse_statement());
            self.advance();
        }
        tracing::debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Errors recorded so far, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// All recorded errors as one report, or `Ok(())` if there were none.
    pub fn report_errors(&self) -> Result<(), ReportedErrors> {
        error::report(&self.errors)
    }

    // Token pump

    /// Shift the lookahead into `current` and pull the next token.
    /// Comments never reach the grammar.
    fn advance(&mut self) {
        let next = self.next_significant();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn next_significant(&mut self) -> Token {
        loop {
            let token = self.lexer.next_token();
            if !token.is(TokenKind::Comment) {
                return token;
            }
            tracing::trace!(line = token.line, "skipping comment");
        }
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the lookahead is `kind`; otherwise record an error and
    /// stay put.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            let error = ParseError::unexpected_peek(&self.current, kind, self.peek.kind);
            self.record(error);
            false
        }
    }

    /// Consume an optional trailing `;`.
    fn eat_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }

    fn record(&mut self, error: ParseError) {
        tracing::debug!(code = %error.code, line = error.line, message = %error.message, "parse error");
        self.errors.push(error);
    }
}

/// Output of [`parse`].
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn report(&self) -> Result<(), ReportedErrors> {
        error::report(&self.errors)
    }
}

/// Tokenize and parse `source` in one go.
pub fn parse(source: &str) -> ParseOutput {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse();
    ParseOutput {
        program,
        errors: parser.errors,
    }
}

#[cfg(test)]
mod tests;
