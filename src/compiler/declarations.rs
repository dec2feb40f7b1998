use crate::{chunk::OpCode, compiler::Compiler, compiler::errors::CompilerError, scanner::token::TokenType};

impl<'a> Compiler<'a> {
    /// Top-level dispatch for anything that can appear in a block or at
    /// script scope.
    pub(super) fn declaration(&mut self) -> Result<(), CompilerError> {
        if self.match_curr_ty(TokenType::Var)? {
            self.var_declaration()
        } else {
            self.statement()
        }
    }

    fn var_declaration(&mut self) -> Result<(), CompilerError> {
        let global = self.parse_variable("Expected variable name.")?;

        if self.match_curr_ty(TokenType::Equal)? {
            self.expression()?;
        } else {
            self.emit_byte(OpCode::Nil as u8)?;
        }

        self.consume(TokenType::Semicolon, "Expected ';' after variable declaration.")?;
        self.define_variable(global)
    }
}
