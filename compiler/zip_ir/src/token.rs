//! Token types for the Zip lexer.
//!
//! A token is the kind, the exact source text it was lexed from, and the
//! 1-indexed line it starts on. Tokens are plain values: once the lexer
//! hands one out nothing mutates it.

use std::fmt;

use crate::debug::{DebugRender, DebugTree};

/// Closed vocabulary of token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Illegal,
    Eof,
    Comment,

    // Identifiers + literals
    Identifier,
    Number,
    String,

    // Operators
    Plus,
    Minus,
    Asterisk,
    Modulo,
    Slash,
    Assign,
    Bang,
    /// `::` declares a constant.
    Const,
    /// `:=` declares a variable.
    Var,

    // Comparisons
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    True,
    False,
    Return,
    Function,
}

impl TokenKind {
    /// Upper-case name used in debug dumps and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Comment => "COMMENT",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Asterisk => "ASTERISK",
            Self::Modulo => "MODULO",
            Self::Slash => "SLASH",
            Self::Assign => "ASSIGN",
            Self::Bang => "BANG",
            Self::Const => "CONST",
            Self::Var => "VAR",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NOT_EQ",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Return => "RETURN",
            Self::Function => "FUNCTION",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a captured word: keywords get their own kind, everything else
/// is an identifier.
pub fn lookup_identifier(word: &str) -> TokenKind {
    match word {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "return" => TokenKind::Return,
        "fn" => TokenKind::Function,
        _ => TokenKind::Identifier,
    }
}

/// A token with the source text it was lexed from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
        }
    }

    /// The end-of-input token for `line`.
    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::Eof, "EOF", line)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl DebugRender for Token {
    fn render(&self, tree: &mut DebugTree) {
        tree.open("Token");
        tree.scalar("Type", self.kind);
        tree.scalar("Value", &self.text);
        tree.scalar("Line", self.line);
        tree.close();
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` (line {})", self.kind, self.text, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_are_reclassified() {
        assert_eq!(lookup_identifier("true"), TokenKind::True);
        assert_eq!(lookup_identifier("false"), TokenKind::False);
        assert_eq!(lookup_identifier("return"), TokenKind::Return);
        assert_eq!(lookup_identifier("fn"), TokenKind::Function);
    }

    #[test]
    fn other_words_are_identifiers() {
        for word in ["foo", "fun", "returns", "True", "öra"] {
            assert_eq!(lookup_identifier(word), TokenKind::Identifier, "{word}");
        }
    }

    #[test]
    fn debug_dump_lists_type_value_and_line() {
        let token = Token::new(TokenKind::Number, "1", 3);
        assert_eq!(
            token.debug_string(),
            "Token {\n  Type: NUMBER,\n  Value: 1,\n  Line: 3,\n}"
        );
    }
}
