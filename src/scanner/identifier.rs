use crate::scanner::{Scanner, token::Token, token::TokenType};

impl Scanner<'_> {
    /// Determines whether the current lexeme matches one of the reserved
    /// words, falling back to a plain identifier.
    fn identifier_type(&self) -> TokenType {
        let starting_char = self.source[self.start..].chars().next().unwrap();
        match starting_char {
            'a' => self.check_keyword(1, 2, "nd", TokenType::And),
            'c' => self.check_keyword(1, 4, "lass", TokenType::Class),
            'e' => self.check_keyword(1, 3, "lse", TokenType::Else),
            'f' if self.current - self.start > 1 => {
                match self.source[self.start + 1..].chars().next().unwrap() {
                    'a' => self.check_keyword(2, 3, "lse", TokenType::False),
                    'o' => self.check_keyword(2, 1, "r", TokenType::For),
                    'u' => self.check_keyword(2, 1, "n", TokenType::Fun),
                    _ => TokenType::Identifier,
                }
            }
            'i' => self.check_keyword(1, 1, "f", TokenType::If),
            'n' => self.check_keyword(1, 2, "il", TokenType::Nil),
            'o' => self.check_keyword(1, 1, "r", TokenType::Or),
            'p' => self.check_keyword(1, 4, "rint", TokenType::Print),
            'r' => self.check_keyword(1, 5, "eturn", TokenType::Return),
            's' => self.check_keyword(1, 4, "uper", TokenType::Super),
            't' if self.current - self.start > 1 => {
                match self.source[self.start + 1..].chars().next().unwrap() {
                    'h' => self.check_keyword(2, 2, "is", TokenType::This),
                    'r' => self.check_keyword(2, 2, "ue", TokenType::True),
                    _ => TokenType::Identifier,
                }
            }
            'v' => self.check_keyword(1, 2, "ar", TokenType::Var),
            'w' => self.check_keyword(1, 4, "hile", TokenType::While),
            _ => TokenType::Identifier,
        }
    }

    /// Consumes the rest of an identifier/keyword lexeme. Called once the
    /// first character (an alphabetic char or `_`) has been consumed.
    pub(super) fn identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| self.is_alpha(c) || c.is_ascii_digit())
        {
            self.advance();
        }

        self.make_token(self.identifier_type())
    }

    fn check_keyword(&self, start: usize, length: usize, rest: &str, ty: TokenType) -> TokenType {
        let source_index_start = self.start + start;
        let source_index_end = source_index_start + length;

        if self.current - self.start == start + length
            && &self.source[source_index_start..source_index_end] == rest
        {
            return ty;
        }

        TokenType::Identifier
    }
}
