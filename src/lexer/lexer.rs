use log::{debug, trace};

use crate::{
    errors::errors::{ErrorCollector, ErrorImpl},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// A single-use scanning session over one source string.
///
/// `start` and `pos` are byte offsets into `source` and always sit on
/// character boundaries, with `start <= pos <= source.len()`.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    errors: ErrorCollector,
    start: usize,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
            errors: ErrorCollector::new(),
            start: 0,
            pos: 0,
            line: 1,
        }
    }

    /// Scans the whole source, returning the tokens (always terminated by a
    /// single `EOF`) together with every error reported along the way.
    pub fn scan_tokens(mut self) -> (Vec<Token>, ErrorCollector) {
        while !self.at_eof() {
            self.start = self.pos;
            self.scan_token();
        }

        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), None, self.line));
        debug!(
            "scanned {} tokens over {} lines, {} errors",
            self.tokens.len(),
            self.line,
            self.errors.error_count()
        );

        (self.tokens, self.errors)
    }

    fn scan_token(&mut self) {
        let c = match self.advance() {
            Some(c) => c,
            None => return,
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            '/' => {
                if self.matches('/') {
                    // The newline is left for the next iteration so it is counted.
                    self.eat_while(|c| c != '\n');
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            '\n' => self.line += 1,
            c if c.is_whitespace() => {}

            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(),

            character => self
                .errors
                .report(self.line, ErrorImpl::UnexpectedCharacter { character }),
        }
    }

    fn string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            self.errors.report(self.line, ErrorImpl::UnterminatedString);
            return;
        }

        // Closing quote.
        self.advance();

        let value = self.source[self.start + 1..self.pos - 1].to_string();
        self.add_literal(TokenKind::String, Literal::String(value));
    }

    fn number(&mut self) {
        self.eat_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.eat_while(|c| c.is_ascii_digit());
        }

        let value: f64 = self
            .lexeme()
            .parse()
            .expect("a run of ascii digits with an optional fraction is a valid f64");
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        self.eat_while(is_identifier);

        let kind = RESERVED_LOOKUP
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.matches(expected) { matched } else { otherwise };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push(MK_TOKEN!(kind, self.lexeme().to_string(), None, self.line));
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        // Multi-line strings belong to the line they started on.
        let line = self.line - self.lexeme().matches('\n').count();
        self.push(MK_TOKEN!(kind, self.lexeme().to_string(), Some(literal), line));
    }

    fn push(&mut self, token: Token) {
        trace!("{}", token);
        self.tokens.push(token);
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.pos]
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut predicate) {
            self.advance();
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scans `source` in one pass.
pub fn tokenize(source: &str) -> (Vec<Token>, ErrorCollector) {
    Lexer::new(source).scan_tokens()
}
