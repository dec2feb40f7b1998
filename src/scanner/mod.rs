//! Byte-at-a-time lexer. Produces one `Token` per call to `scan_token`,
//! lazily, so the compiler can pull tokens on demand instead of tokenizing
//! the whole source up front.
use crate::scanner::{
    errors::ScannerError,
    token::{Token, TokenType},
};

pub mod errors;
mod identifier;
mod literals;
pub mod token;

#[cfg(test)]
mod tests;

pub struct Scanner<'a> {
    pub(crate) source: &'a str,
    start: usize,
    current: usize,
    line: i32,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub(crate) fn is_alpha(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    /// Scans and returns the next token. Once the source is exhausted every
    /// subsequent call returns `Eof`.
    pub fn scan_token(&mut self) -> Result<Token, ScannerError> {
        self.skip_whitespace();

        // Starting from where previous token scan left off.
        self.start = self.current;

        if self.is_at_end() {
            return Ok(self.make_token(TokenType::Eof));
        }

        // We've just checked we're not at the end, so it's safe to unwrap.
        let character = self.advance().unwrap();

        if self.is_alpha(character) {
            return Ok(self.identifier());
        }

        if character.is_ascii_digit() {
            return Ok(self.number());
        }

        let token = match character {
            '(' => self.make_token(TokenType::LeftParen),
            ')' => self.make_token(TokenType::RightParen),
            '{' => self.make_token(TokenType::LeftBrace),
            '}' => self.make_token(TokenType::RightBrace),
            ';' => self.make_token(TokenType::Semicolon),
            ',' => self.make_token(TokenType::Comma),
            '.' => self.make_token(TokenType::Dot),
            '-' => self.make_token(TokenType::Minus),
            '+' => self.make_token(TokenType::Plus),
            '/' => self.make_token(TokenType::Slash),
            '*' => self.make_token(TokenType::Star),
            '!' => {
                let ty = self.pick_token_type('=', TokenType::BangEqual, TokenType::Bang);
                self.make_token(ty)
            }
            '=' => {
                let ty = self.pick_token_type('=', TokenType::EqualEqual, TokenType::Equal);
                self.make_token(ty)
            }
            '<' => {
                let ty = self.pick_token_type('=', TokenType::LessEqual, TokenType::Less);
                self.make_token(ty)
            }
            '>' => {
                let ty = self.pick_token_type('=', TokenType::GreaterEqual, TokenType::Greater);
                self.make_token(ty)
            }
            '"' => self.string()?,
            _ => {
                return Err(ScannerError::UnexpectedCharacter {
                    line: self.line,
                    character,
                });
            }
        };

        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\r' | '\t') => {
                    self.advance();
                }
                Some('\n') => {
                    self.line += 1;
                    self.advance();
                }
                Some('/') => {
                    if self.peek_next() == Some('/') {
                        // Consume the comment up to (but not including) the
                        // newline, or EOF, whichever comes first.
                        while self.peek().is_some_and(|c| c != '\n') {
                            self.advance();
                        }
                    } else {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Assumes ASCII source, like the rest of this scanner; a byte is
    /// returned reinterpreted as a `char`.
    pub(crate) fn peek(&self) -> Option<char> {
        let byte = self.source.as_bytes().get(self.current).copied()?;
        Some(byte as char)
    }

    pub(crate) fn peek_next(&self) -> Option<char> {
        let byte = self.source.as_bytes().get(self.current + 1).copied()?;
        Some(byte as char)
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        let byte = self.source.as_bytes().get(self.current).copied()?;
        self.current += 1;
        Some(byte as char)
    }

    fn pick_token_type(&mut self, c: char, if_ty: TokenType, else_ty: TokenType) -> TokenType {
        if self.peek() == Some(c) {
            self.advance();
            if_ty
        } else {
            else_ty
        }
    }

    pub(crate) fn make_token(&self, ty: TokenType) -> Token {
        Token::new(ty, self.start, (self.current - self.start) as u32, self.line)
    }
}
