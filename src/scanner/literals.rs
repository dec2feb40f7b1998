use crate::scanner::{Scanner, errors::ScannerError, token::Token, token::TokenType};

impl Scanner<'_> {
    /// Consumes the remaining digits of a number. The first digit has
    /// already been consumed when this is called.
    pub(super) fn number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Consume a fractional part if there's a '.' followed by a digit.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();

            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenType::Number)
    }

    /// Consumes a double-quoted string literal. No escape sequences;
    /// strings may span multiple lines.
    pub(super) fn string(&mut self) -> Result<Token, ScannerError> {
        while let Some(c) = self.peek()
            && c != '"'
        {
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(ScannerError::UnterminatedString { line: self.line });
        }

        // Consume the closing '"'.
        self.advance();
        Ok(self.make_token(TokenType::String))
    }
}
