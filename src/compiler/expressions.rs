use crate::{
    compiler::{Compiler, errors::CompilerError, precedence::Precedence, precedence::ParseRule},
    scanner::token::TokenType,
};

impl<'a> Compiler<'a> {
    pub(super) fn expression(&mut self) -> Result<(), CompilerError> {
        self.parse_precedence(Precedence::Assignment)
    }

    pub(super) fn grouping(&mut self, _can_assign: bool) -> Result<(), CompilerError> {
        self.expression()?;
        self.consume(TokenType::RightParen, "Expected ')' after expression.")
    }

    /// Precedence-climbing core: consumes a prefix rule, then keeps
    /// consuming infix rules as long as they bind at least as tightly as
    /// `precedence`.
    pub(super) fn parse_precedence(&mut self, precedence: Precedence) -> Result<(), CompilerError> {
        self.parser.advance()?;

        let prefix_rule = ParseRule::get_parse_rule(self.get_previous_token_ty()?).prefix;
        let Some(prefix_rule) = prefix_rule else {
            return Err(self.construct_token_error(false, "Expected expression."));
        };

        let can_assign = precedence <= Precedence::Assignment;
        prefix_rule(self, can_assign)?;

        while precedence <= ParseRule::get_parse_rule(self.get_current_token_ty()?).precedence {
            self.parser.advance()?;
            if let Some(infix_rule) = ParseRule::get_parse_rule(self.get_previous_token_ty()?).infix {
                infix_rule(self, can_assign)?;
            }
        }

        if can_assign && self.match_curr_ty(TokenType::Equal)? {
            return Err(CompilerError::ExpressionError(
                "Invalid assignment target.".to_owned(),
            ));
        }

        Ok(())
    }
}
