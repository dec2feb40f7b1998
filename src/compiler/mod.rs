//! Single-pass compiler. Parses and emits bytecode in the same walk, using
//! Pratt (precedence-climbing) parsing for expressions — there is no
//! intermediate AST.
use crate::chunk::{Chunk, OpCode};
use crate::compiler::{errors::CompilerError, parser::Parser};
use crate::scanner::{Scanner, token::Token, token::TokenType};

mod bytecode;
mod declarations;
pub mod errors;
mod expressions;
mod literals;
mod operations;
mod parser;
mod precedence;
mod scope;
mod statements;
#[cfg(test)]
mod tests;
mod variables;

/// A local variable tracked by the compiler, resolved to a stack slot at
/// compile time. `depth == -1` means "declared but not yet initialized" —
/// reading it in that state is the textbook `var a = a;` error.
struct Local {
    name: Token,
    depth: i32,
}

pub struct Compiler<'a> {
    source: &'a str,
    parser: Parser<'a>,
    chunk: Chunk,
    locals: Vec<Local>,
    scope_depth: i32,
    had_error: bool,
    panic_mode: bool,
}

impl<'a> Compiler<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            parser: Parser::new(Scanner::new(source)),
            chunk: Chunk::new(),
            locals: Vec::new(),
            scope_depth: 0,
            had_error: false,
            panic_mode: false,
        }
    }

    fn get_previous_token_ty(&self) -> Result<TokenType, CompilerError> {
        Ok(self
            .parser
            .previous
            .as_ref()
            .ok_or_else(|| self.construct_token_error(false, "Expected previous token"))?
            .ty)
    }

    fn get_current_token_ty(&self) -> Result<TokenType, CompilerError> {
        Ok(self
            .parser
            .current
            .as_ref()
            .ok_or_else(|| self.construct_token_error(true, "Expected current token"))?
            .ty)
    }

    fn check_current(&self, ty: TokenType) -> bool {
        self.parser.check(ty)
    }

    fn match_curr_ty(&mut self, ty: TokenType) -> Result<bool, CompilerError> {
        Ok(self.parser.matches(ty)?)
    }

    fn consume(&mut self, ty: TokenType, message: &str) -> Result<(), CompilerError> {
        Ok(self.parser.consume(ty, message)?)
    }

    fn construct_token_error(&self, is_current: bool, message: &str) -> CompilerError {
        let error = if is_current {
            self.parser.error_at_current(message)
        } else {
            self.parser.error_at_previous(message)
        };
        CompilerError::ParserError(error)
    }

    /// Discards tokens until it reaches something that looks like a
    /// statement boundary, so one compile run can report more than one
    /// independent error instead of cascading off the first.
    fn synchronize(&mut self) {
        self.panic_mode = false;

        while !self.check_current(TokenType::Eof) {
            if self
                .parser
                .previous
                .as_ref()
                .is_some_and(|t| t.ty == TokenType::Semicolon)
            {
                return;
            }

            match self.get_current_token_ty() {
                Ok(
                    TokenType::Class
                    | TokenType::Fun
                    | TokenType::Var
                    | TokenType::For
                    | TokenType::If
                    | TokenType::While
                    | TokenType::Print
                    | TokenType::Return,
                ) => return,
                _ => {
                    if self.parser.advance().is_err() {
                        return;
                    }
                }
            }
        }
    }
}

/// Compiles `source` into a chunk. On failure returns every independent
/// error message collected along the way (not just the first).
pub fn compile(source: &str) -> Result<Chunk, Vec<String>> {
    let mut compiler = Compiler::new(source);
    let mut errors = Vec::new();

    if let Err(e) = compiler.parser.advance() {
        errors.push(e.to_string());
        compiler.had_error = true;
    }

    while !compiler.check_current(TokenType::Eof) {
        if let Err(e) = compiler.declaration() {
            if !compiler.panic_mode {
                compiler.panic_mode = true;
                compiler.had_error = true;
                errors.push(e.to_string());
            }
            compiler.synchronize();
        }
    }

    if compiler.had_error {
        return Err(errors);
    }

    // Written directly rather than through `emit_byte`: on empty source no
    // token is ever consumed, so there is no "previous token" to blame a
    // line number on.
    let line = compiler.parser.previous.as_ref().map_or(1, |t| t.line);
    compiler.chunk.write(OpCode::Return as u8, line);
    Ok(compiler.chunk)
}
