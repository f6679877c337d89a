//! Lexer for Zip.
//!
//! Hand-written scanner over Unicode code points. Tokens are produced
//! lazily by [`Lexer::next_token`]; the lexer never fails. Anything it
//! cannot classify becomes an `Illegal` token for the parser to report.
//!
//! Every token records the 1-indexed line it starts on. The line counter
//! advances on each newline consumed, including newlines inside string
//! literals.

mod cursor;

use cursor::Cursor;
use unicode_general_category::{get_general_category, GeneralCategory};
use zip_ir::{lookup_identifier, Token, TokenKind};

/// Streaming tokenizer over one source string.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    line: u32,
    /// Set once `Eof` has been yielded through the iterator.
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            line: 1,
            finished: false,
        }
    }

    /// Line the next token would start on, before whitespace is skipped.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Scan the next token. At end of input this keeps returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.cursor.advance();
        self.skip_whitespace();

        let Some(c) = self.cursor.current() else {
            return Token::eof(self.line);
        };

        match c {
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '%' => self.single(TokenKind::Modulo),
            '<' => self.single(TokenKind::Lt),
            '>' => self.single(TokenKind::Gt),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '/' if self.cursor.peek() == Some('/') => self.comment(),
            '/' => self.single(TokenKind::Slash),
            '=' => self.either('=', TokenKind::Eq, TokenKind::Assign),
            '!' => self.either('=', TokenKind::NotEq, TokenKind::Bang),
            ':' => match self.cursor.peek() {
                Some(':') => self.pair(TokenKind::Const),
                Some('=') => self.pair(TokenKind::Var),
                _ => self.single(TokenKind::Illegal),
            },
            '"' => self.string(),
            c if is_letter(c) => self.identifier(),
            c if c.is_numeric() => self.number(),
            _ => self.single(TokenKind::Illegal),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c @ (' ' | '\t' | '\r' | '\n')) = self.cursor.current() {
            if c == '\n' {
                self.line += 1;
            }
            self.cursor.advance();
        }
    }

    /// Token made of `current` alone.
    fn single(&self, kind: TokenKind) -> Token {
        let start = self.cursor.current_start();
        Token::new(kind, self.cursor.slice_from(start), self.line)
    }

    /// Token made of `current` and the next character.
    fn pair(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.current_start();
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start), self.line)
    }

    /// `pair` if the next character is `second`, else `single`.
    fn either(&mut self, second: char, paired: TokenKind, alone: TokenKind) -> Token {
        if self.cursor.peek() == Some(second) {
            self.pair(paired)
        } else {
            self.single(alone)
        }
    }

    fn comment(&mut self) -> Token {
        let start = self.cursor.current_start();
        self.cursor.eat_until_newline_or_eof();
        Token::new(TokenKind::Comment, self.cursor.slice_from(start), self.line)
    }

    /// String literal, quotes included. Running out of input first yields
    /// `Illegal` with the partial text.
    fn string(&mut self) -> Token {
        let start = self.cursor.current_start();
        let line = self.line;
        loop {
            match self.cursor.advance() {
                Some('"') => {
                    return Token::new(TokenKind::String, self.cursor.slice_from(start), line);
                }
                Some('\n') => self.line += 1,
                Some(_) => {}
                None => {
                    return Token::new(TokenKind::Illegal, self.cursor.slice_from(start), line);
                }
            }
        }
    }

    fn identifier(&mut self) -> Token {
        let start = self.cursor.current_start();
        while self.cursor.peek().is_some_and(is_letter) {
            self.cursor.advance();
        }
        let word = self.cursor.slice_from(start);
        Token::new(lookup_identifier(word), word, self.line)
    }

    fn number(&mut self) -> Token {
        let start = self.cursor.current_start();
        while self.cursor.peek().is_some_and(char::is_numeric) {
            self.cursor.advance();
        }
        Token::new(TokenKind::Number, self.cursor.slice_from(start), self.line)
    }
}

/// Unicode letter categories (`Lu Ll Lt Lm Lo`). Combining marks and
/// letter-like numerals are not letters.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is(TokenKind::Eof);
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenize `source` completely. The last token is always `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
