use crate::scanner::{
    Scanner,
    errors::ScannerError,
    token::{Token, TokenType},
};

/// Errors raised while advancing or consuming tokens.
#[derive(Debug)]
pub enum ParserError {
    ScannerError(ScannerError),
    TokenError(String),
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScannerError(error) => write!(f, "{error}"),
            Self::TokenError(error) => write!(f, "{error}"),
        }
    }
}

/// Pulls tokens from the scanner one at a time, keeping the current and
/// previous token around so grammar rules can look at both.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    pub current: Option<Token>,
    pub previous: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self {
            scanner,
            current: None,
            previous: None,
        }
    }

    pub fn source(&self) -> &'a str {
        self.scanner.source
    }

    /// Advances past any `Error`-producing bytes the scanner stumbled on,
    /// returning the first scan error encountered.
    pub fn advance(&mut self) -> Result<(), ParserError> {
        self.previous = self.current.clone();

        match self.scanner.scan_token() {
            Ok(token) => {
                self.current = Some(token);
                Ok(())
            }
            Err(e) => Err(self.error_at_current(&format!("{e}"))),
        }
    }

    pub fn consume(&mut self, expected: TokenType, message: &str) -> Result<(), ParserError> {
        let token = self
            .current
            .clone()
            .ok_or_else(|| ParserError::TokenError(format!("Expected token: {expected:?}, found end of input")))?;

        if token.ty == expected {
            self.advance()?;
            return Ok(());
        }

        Err(self.error_at_current(message))
    }

    pub fn check(&self, ty: TokenType) -> bool {
        self.current.as_ref().is_some_and(|t| t.ty == ty)
    }

    pub fn matches(&mut self, ty: TokenType) -> Result<bool, ParserError> {
        if !self.check(ty) {
            return Ok(false);
        }
        self.advance()?;
        Ok(true)
    }

    pub fn error_at_previous(&self, message: &str) -> ParserError {
        self.construct_error(self.previous.as_ref().expect("previous token present"), message)
    }

    pub fn error_at_current(&self, message: &str) -> ParserError {
        self.construct_error(self.current.as_ref().expect("current token present"), message)
    }

    fn construct_error(&self, token: &Token, message: &str) -> ParserError {
        let mut err_msg = format!("[line {}] Error", token.line);

        if token.ty == TokenType::Eof {
            err_msg.push_str(" at end");
        } else if token.ty != TokenType::Error {
            err_msg.push_str(&format!(" at '{}'", token.as_str(self.scanner.source)));
        }

        err_msg.push_str(&format!(": {message}"));
        ParserError::TokenError(err_msg)
    }
}
