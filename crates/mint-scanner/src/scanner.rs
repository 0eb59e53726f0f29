//! The tokenizer state machine.
//!
//! Produces the significant-token stream the parser and the completion
//! engine share: whitespace and comments are skipped, every remaining
//! lexical unit becomes a `Token`, and the stream always ends with an
//! `EndOfFile` token. Malformed input (unterminated strings, stray
//! characters) yields a best-effort token plus a diagnostic - scanning
//! never aborts.

use mint_common::{Diagnostic, Span};

use crate::syntax_kind::SyntaxKind;

/// One lexical unit. `start`/`end` are byte offsets; `line` is 1-based and
/// `column` is 0-based, counted in characters from the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start as usize..self.end as usize]
    }

    /// Column one past the token's last character. Tokens never span lines,
    /// so this is always on `self.line`.
    pub fn end_column(&self, source: &str) -> u32 {
        self.column + self.text(source).chars().count() as u32
    }
}

/// Scan `source` into a token stream. Convenience wrapper over `Scanner`.
pub fn scan_tokens(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Scanner::new(source).scan()
}

pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            pos: 0,
            line: 1,
            column: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn scan(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia();
            let (start, line, column) = (self.pos, self.line, self.column);
            let Some(ch) = self.peek() else {
                tokens.push(Token {
                    kind: SyntaxKind::EndOfFile,
                    start: start as u32,
                    end: start as u32,
                    line,
                    column,
                });
                break;
            };
            let kind = self.scan_token(ch);
            tokens.push(Token {
                kind,
                start: start as u32,
                end: self.pos as u32,
                line,
                column,
            });
        }
        (tokens, self.diagnostics)
    }

    fn scan_token(&mut self, first: char) -> SyntaxKind {
        if is_ident_start(first) {
            return self.scan_word();
        }
        if first.is_ascii_digit() {
            return self.scan_number();
        }
        if first == '"' {
            return self.scan_string();
        }
        self.bump();
        match first {
            '(' => SyntaxKind::LeftParen,
            ')' => SyntaxKind::RightParen,
            '{' => SyntaxKind::LeftBrace,
            '}' => SyntaxKind::RightBrace,
            ',' => SyntaxKind::Comma,
            ':' => SyntaxKind::Colon,
            ';' => SyntaxKind::Semicolon,
            '*' => SyntaxKind::Star,
            '/' => SyntaxKind::Slash,
            '+' => {
                if self.eat('+') {
                    SyntaxKind::PlusPlus
                } else {
                    SyntaxKind::Plus
                }
            }
            '-' => {
                if self.eat('-') {
                    SyntaxKind::MinusMinus
                } else {
                    SyntaxKind::Minus
                }
            }
            '=' => {
                if self.eat('=') {
                    SyntaxKind::EqualsEquals
                } else {
                    SyntaxKind::Equals
                }
            }
            '<' => {
                if self.eat('=') {
                    SyntaxKind::LessThanEquals
                } else {
                    SyntaxKind::LessThan
                }
            }
            '>' => {
                if self.eat('=') {
                    SyntaxKind::GreaterThanEquals
                } else {
                    SyntaxKind::GreaterThan
                }
            }
            '!' => {
                if self.eat('=') {
                    SyntaxKind::BangEquals
                } else if self.at_keyword_after_bang("in") {
                    self.bump();
                    self.bump();
                    SyntaxKind::NotIn
                } else {
                    SyntaxKind::Bang
                }
            }
            '&' => {
                if self.eat('&') {
                    SyntaxKind::AmpersandAmpersand
                } else {
                    self.unexpected_character('&')
                }
            }
            '|' => {
                if self.eat('|') {
                    SyntaxKind::BarBar
                } else {
                    self.unexpected_character('|')
                }
            }
            other => self.unexpected_character(other),
        }
    }

    fn scan_word(&mut self) -> SyntaxKind {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.bump();
        }
        let word = &self.source[start..self.pos];
        SyntaxKind::keyword_kind(word).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_number(&mut self) -> SyntaxKind {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        // A '.' only extends the number when a digit follows; `1.foo` stays
        // an integer plus whatever comes next.
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
            return SyntaxKind::FloatLiteral;
        }
        SyntaxKind::IntegerLiteral
    }

    fn scan_string(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.bump(); // opening quote
        loop {
            match self.peek() {
                Some('"') => {
                    self.bump();
                    return SyntaxKind::StringLiteral;
                }
                Some('\\') => {
                    self.bump();
                    if self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                Some('\n') | None => {
                    // Strings are single-line; stop at the newline so the
                    // rest of the file still scans.
                    self.diagnostics.push(Diagnostic::error(
                        Span::new(start as u32, self.pos as u32),
                        "unterminated string literal",
                    ));
                    return SyntaxKind::StringLiteral;
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn unexpected_character(&mut self, ch: char) -> SyntaxKind {
        let end = self.pos as u32;
        self.diagnostics.push(Diagnostic::error(
            Span::new(end - ch.len_utf8() as u32, end),
            format!("unexpected character `{ch}`"),
        ));
        SyntaxKind::Unknown
    }

    /// After consuming `!`, check whether `word` follows as a whole word
    /// (so `!in x` lexes as one operator but `!inner` stays `!` + identifier).
    fn at_keyword_after_bang(&self, word: &str) -> bool {
        let rest = &self.source[self.pos..];
        rest.starts_with(word)
            && !rest[word.len()..]
                .chars()
                .next()
                .is_some_and(is_ident_continue)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.peek_second() == Some('/') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                Some('/') if self.peek_second() == Some('*') => {
                    let start = self.pos;
                    self.bump();
                    self.bump();
                    loop {
                        match self.peek() {
                            Some('*') if self.peek_second() == Some('/') => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            Some(_) => {
                                self.bump();
                            }
                            None => {
                                self.diagnostics.push(Diagnostic::error(
                                    Span::new(start as u32, self.pos as u32),
                                    "unterminated block comment",
                                ));
                                break;
                            }
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
