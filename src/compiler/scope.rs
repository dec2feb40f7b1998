use crate::{chunk::OpCode, compiler::Compiler, compiler::errors::CompilerError, scanner::token::TokenType};

impl Compiler<'_> {
    pub(super) fn begin_scope(&mut self) {
        self.scope_depth += 1;
    }

    /// Pops every local declared at the scope being left. Their slots are
    /// simply reclaimed by decrementing the stack; nothing needs to track
    /// which value belonged to which name at runtime.
    pub(super) fn end_scope(&mut self) -> Result<(), CompilerError> {
        self.scope_depth -= 1;

        while self
            .locals
            .last()
            .is_some_and(|local| local.depth > self.scope_depth)
        {
            self.emit_byte(OpCode::Pop as u8)?;
            self.locals.pop();
        }

        Ok(())
    }

    pub(super) fn block(&mut self) -> Result<(), CompilerError> {
        while !self.check_current(TokenType::RightBrace) && !self.check_current(TokenType::Eof) {
            self.declaration()?;
        }

        self.consume(TokenType::RightBrace, "Expected '}' after block.")
    }
}
