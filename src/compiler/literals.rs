use std::num::ParseFloatError;

use crate::{
    chunk::OpCode,
    compiler::{Compiler, errors::CompilerError},
    scanner::token::TokenType,
    value::Value,
};

impl<'a> Compiler<'a> {
    pub(super) fn number(&mut self, _can_assign: bool) -> Result<(), CompilerError> {
        let token = self
            .parser
            .previous
            .as_ref()
            .ok_or_else(|| self.construct_token_error(false, "Expected number."))?;
        let lexeme = token.as_str(self.source);
        let value: f64 = lexeme
            .parse()
            .map_err(|e: ParseFloatError| self.construct_token_error(false, &e.to_string()))?;

        self.emit_constant(value.into())
    }

    pub(super) fn literal(&mut self, _can_assign: bool) -> Result<(), CompilerError> {
        match self.get_previous_token_ty()? {
            TokenType::False => self.emit_byte(OpCode::False as u8),
            TokenType::Nil => self.emit_byte(OpCode::Nil as u8),
            TokenType::True => self.emit_byte(OpCode::True as u8),
            _ => unreachable!("literal() only ever runs for false/nil/true"),
        }
    }

    pub(super) fn string(&mut self, _can_assign: bool) -> Result<(), CompilerError> {
        let token = self
            .parser
            .previous
            .as_ref()
            .ok_or_else(|| self.construct_token_error(false, "Expected string."))?;
        // Strip the surrounding quotes.
        let start = token.start + 1;
        let end = start + (token.length as usize - 2);
        let value = Value::from(&self.source[start..end]);
        self.emit_constant(value)
    }
}
