//! Parse error types.

use std::fmt;

use zip_diagnostic::ErrorCode;
use zip_ir::{Token, TokenKind};

/// One problem the parser recorded. Parsing continues after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    /// Line of the token the parser was looking at.
    pub line: u32,
    pub message: String,
}

impl ParseError {
    pub fn new(code: ErrorCode, line: u32, message: impl Into<String>) -> Self {
        ParseError {
            code,
            line,
            message: message.into(),
        }
    }

    /// The peek token was not the one the grammar requires.
    #[cold]
    pub(crate) fn unexpected_peek(current: &Token, expected: TokenKind, found: TokenKind) -> Self {
        Self::new(
            ErrorCode::E1001,
            current.line,
            format!("expected next token to be {expected}, got {found} instead"),
        )
    }

    /// No prefix rule exists for the token in expression position.
    #[cold]
    pub(crate) fn missing_prefix(token: &Token) -> Self {
        Self::new(
            ErrorCode::E1002,
            token.line,
            format!("no prefix parse function for {} found", token.kind),
        )
    }

    /// An `Illegal` token reached expression position.
    #[cold]
    pub(crate) fn illegal(token: &Token) -> Self {
        if token.text.starts_with('"') {
            Self::new(ErrorCode::E0001, token.line, "unterminated string literal")
        } else {
            Self::new(
                ErrorCode::E0002,
                token.line,
                format!("illegal token {}", token.text),
            )
        }
    }

    /// A function parameter list held something other than an identifier.
    #[cold]
    pub(crate) fn expected_parameter(token: &Token) -> Self {
        Self::new(
            ErrorCode::E1001,
            token.line,
            format!(
                "expected parameter to be {}, got {} instead",
                TokenKind::Identifier,
                token.kind
            ),
        )
    }

    /// Input ended inside a `{ ... }` block opened by `open`.
    #[cold]
    pub(crate) fn unclosed_block(open: &Token) -> Self {
        Self::new(
            ErrorCode::E1001,
            open.line,
            format!("expected {} to close block, got {} instead", TokenKind::RBrace, TokenKind::Eof),
        )
    }

    #[cold]
    pub(crate) fn invalid_integer(token: &Token) -> Self {
        Self::new(
            ErrorCode::E1003,
            token.line,
            format!("could not parse {:?} as integer", token.text),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: line {}: {}", self.code, self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Every error of one parse, joined into a single report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("parser reported errors")]
pub struct ReportedErrors {
    pub errors: Vec<ParseError>,
}

impl ReportedErrors {
    /// One `parser error: ...` line per recorded error.
    pub fn details(&self) -> String {
        let mut out = String::new();
        for error in &self.errors {
            out.push_str("parser error: ");
            out.push_str(&error.to_string());
            out.push('\n');
        }
        out
    }
}

/// `Ok(())` when nothing was recorded.
pub(crate) fn report(errors: &[ParseError]) -> Result<(), ReportedErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ReportedErrors {
            errors: errors.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_has_code_line_and_message() {
        let error = ParseError::new(ErrorCode::E1002, 4, "no prefix parse function for RPAREN found");
        assert_eq!(
            error.to_string(),
            "error[E1002]: line 4: no prefix parse function for RPAREN found"
        );
    }

    #[test]
    fn illegal_tokens_are_split_by_cause() {
        let unterminated = Token::new(TokenKind::Illegal, "\"foo", 1);
        assert_eq!(ParseError::illegal(&unterminated).code, ErrorCode::E0001);

        let stray = Token::new(TokenKind::Illegal, "@", 2);
        let error = ParseError::illegal(&stray);
        assert_eq!(error.code, ErrorCode::E0002);
        assert_eq!(error.message, "illegal token @");
        assert_eq!(error.line, 2);
    }

    #[test]
    fn report_is_empty_without_errors() {
        assert_eq!(report(&[]), Ok(()));
    }

    #[test]
    fn report_joins_messages() {
        let errors = vec![
            ParseError::new(ErrorCode::E1001, 1, "first"),
            ParseError::new(ErrorCode::E1003, 2, "second"),
        ];
        let Err(reported) = report(&errors) else {
            panic!("expected a report");
        };
        assert_eq!(reported.to_string(), "parser reported errors");
        assert_eq!(
            reported.details(),
            "parser error: error[E1001]: line 1: first\nparser error: error[E1003]: line 2: second\n"
        );
    }
}
