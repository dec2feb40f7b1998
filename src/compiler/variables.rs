use crate::{
    chunk::OpCode,
    compiler::{Compiler, Local, errors::CompilerError},
    constants::UINT8_COUNT,
    scanner::token::{Token, TokenType},
};

impl<'a> Compiler<'a> {
    /// Consumes an identifier and, for a global, returns its constant-pool
    /// index; for a local, the return value is unused (locals are resolved
    /// by stack slot, not by name at runtime).
    pub(super) fn parse_variable(&mut self, message: &str) -> Result<u8, CompilerError> {
        self.consume(TokenType::Identifier, message)?;
        let name = self
            .parser
            .previous
            .clone()
            .ok_or_else(|| self.construct_token_error(false, "Expected variable name."))?;

        self.declare_local_variable(&name)?;

        if self.scope_depth > 0 {
            return Ok(0);
        }

        self.identifier_constant(&name)
    }

    fn declare_local_variable(&mut self, name: &Token) -> Result<(), CompilerError> {
        if self.scope_depth == 0 {
            return Ok(());
        }

        for local in self.locals.iter().rev() {
            if local.depth != -1 && local.depth < self.scope_depth {
                break;
            }
            if self.are_identifiers_equal(name, &local.name) {
                return Err(self.construct_token_error(
                    false,
                    "Already a variable with this name in this scope.",
                ));
            }
        }

        self.add_local_variable(name.clone())
    }

    fn are_identifiers_equal(&self, a: &Token, b: &Token) -> bool {
        if a.length != b.length {
            return false;
        }
        a.as_str(self.source) == b.as_str(self.source)
    }

    fn resolve_local(&mut self, name: &Token) -> Result<i32, CompilerError> {
        for (i, local) in self.locals.iter().enumerate().rev() {
            if self.are_identifiers_equal(name, &local.name) {
                if local.depth == -1 {
                    return Err(self.construct_token_error(
                        false,
                        "Can't read local variable in its own initializer.",
                    ));
                }
                return Ok(i as i32);
            }
        }
        Ok(-1)
    }

    fn add_local_variable(&mut self, name: Token) -> Result<(), CompilerError> {
        if self.locals.len() >= UINT8_COUNT {
            return Err(self.construct_token_error(false, "Too many local variables in function."));
        }

        self.locals.push(Local { name, depth: -1 });
        Ok(())
    }

    pub(super) fn mark_initialized(&mut self) {
        if self.scope_depth == 0 {
            return;
        }
        let depth = self.scope_depth;
        if let Some(local) = self.locals.last_mut() {
            local.depth = depth;
        }
    }

    pub(super) fn define_variable(&mut self, global: u8) -> Result<(), CompilerError> {
        if self.scope_depth > 0 {
            self.mark_initialized();
            return Ok(());
        }
        self.emit_bytes(OpCode::DefineGlobal as u8, global)
    }

    pub(super) fn variable(&mut self, can_assign: bool) -> Result<(), CompilerError> {
        let name = self
            .parser
            .previous
            .clone()
            .ok_or_else(|| self.construct_token_error(false, "Expected previous token"))?;
        self.named_variable(&name, can_assign)
    }

    fn named_variable(&mut self, name: &Token, can_assign: bool) -> Result<(), CompilerError> {
        let (get_op, set_op, slot);

        let local_slot = self.resolve_local(name)?;
        if local_slot != -1 {
            slot = local_slot as u8;
            get_op = OpCode::GetLocal;
            set_op = OpCode::SetLocal;
        } else {
            slot = self.identifier_constant(name)?;
            get_op = OpCode::GetGlobal;
            set_op = OpCode::SetGlobal;
        }

        if can_assign && self.match_curr_ty(TokenType::Equal)? {
            self.expression()?;
            self.emit_bytes(set_op as u8, slot)
        } else {
            self.emit_bytes(get_op as u8, slot)
        }
    }
}
