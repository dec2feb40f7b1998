use crate::{
    chunk::OpCode,
    compiler::{Compiler, errors::CompilerError},
    scanner::token::Token,
    value::Value,
};

impl<'a> Compiler<'a> {
    pub(super) fn identifier_constant(&mut self, name: &Token) -> Result<u8, CompilerError> {
        let name = name.as_str(self.source).to_owned();
        self.make_constant(name.into())
    }

    pub(super) fn emit_constant(&mut self, value: Value) -> Result<(), CompilerError> {
        let constant = self.make_constant(value)?;
        self.emit_bytes(OpCode::Constant as u8, constant)
    }

    /// Emits a jump instruction with a two-byte placeholder operand,
    /// returning the offset of the first placeholder byte so it can be
    /// patched once the jump target is known.
    pub(super) fn emit_jump(&mut self, instruction: u8) -> Result<usize, CompilerError> {
        self.emit_byte(instruction)?;
        self.emit_byte(0xff)?;
        self.emit_byte(0xff)?;
        Ok(self.chunk.code.len() - 2)
    }

    pub(super) fn emit_loop(&mut self, loop_start: usize) -> Result<(), CompilerError> {
        self.emit_byte(OpCode::Loop as u8)?;

        let offset = self.chunk.code.len() - loop_start + 2;
        if offset > u16::MAX as usize {
            return Err(self.construct_token_error(false, "Loop body too large."));
        }

        let bytes = (offset as u16).to_be_bytes();
        self.emit_byte(bytes[0])?;
        self.emit_byte(bytes[1])
    }

    /// Backpatches the two placeholder bytes at `offset` with the distance
    /// from just past them to the current end of the chunk.
    pub(super) fn patch_jump(&mut self, offset: usize) -> Result<(), CompilerError> {
        let jump = self.chunk.code.len() - offset - 2;
        if jump > u16::MAX as usize {
            return Err(self.construct_token_error(false, "Too much code to jump over."));
        }

        let bytes = (jump as u16).to_be_bytes();
        self.chunk.code[offset] = bytes[0];
        self.chunk.code[offset + 1] = bytes[1];
        Ok(())
    }

    fn make_constant(&mut self, value: Value) -> Result<u8, CompilerError> {
        self.chunk
            .add_constant(value)
            .map_err(|_| self.construct_token_error(false, "Too many constants in one chunk."))
    }

    pub(super) fn emit_byte(&mut self, byte: u8) -> Result<(), CompilerError> {
        let line = self
            .parser
            .previous
            .as_ref()
            .ok_or_else(|| self.construct_token_error(false, "Expected token"))?
            .line;
        self.chunk.write(byte, line);
        Ok(())
    }

    pub(super) fn emit_bytes(&mut self, byte1: u8, byte2: u8) -> Result<(), CompilerError> {
        self.emit_byte(byte1)?;
        self.emit_byte(byte2)
    }
}
