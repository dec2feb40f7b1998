use crate::{
    chunk::OpCode,
    compiler::{Compiler, errors::CompilerError, precedence::Precedence, precedence::ParseRule},
    scanner::token::TokenType,
};

impl<'a> Compiler<'a> {
    /// Short-circuiting `and`: if the left operand is false, skip the right
    /// operand entirely and leave the false value on the stack.
    pub(super) fn logical_and(&mut self, _can_assign: bool) -> Result<(), CompilerError> {
        let end_jump = self.emit_jump(OpCode::JumpIfFalse as u8)?;
        self.emit_byte(OpCode::Pop as u8)?;
        self.parse_precedence(Precedence::And)?;
        self.patch_jump(end_jump)
    }

    /// Short-circuiting `or`: if the left operand is true, skip the right
    /// operand.
    pub(super) fn logical_or(&mut self, _can_assign: bool) -> Result<(), CompilerError> {
        let else_jump = self.emit_jump(OpCode::JumpIfFalse as u8)?;
        let end_jump = self.emit_jump(OpCode::Jump as u8)?;

        self.patch_jump(else_jump)?;
        self.emit_byte(OpCode::Pop as u8)?;
        self.parse_precedence(Precedence::Or)?;
        self.patch_jump(end_jump)
    }

    pub(super) fn binary(&mut self, _can_assign: bool) -> Result<(), CompilerError> {
        let operator = self.get_previous_token_ty()?;
        let rule = ParseRule::get_parse_rule(operator);
        self.parse_precedence(Precedence::from(rule.precedence as u8 + 1))?;

        match operator {
            TokenType::Plus => self.emit_byte(OpCode::Add as u8),
            TokenType::Minus => self.emit_byte(OpCode::Subtract as u8),
            TokenType::Star => self.emit_byte(OpCode::Multiply as u8),
            TokenType::Slash => self.emit_byte(OpCode::Divide as u8),
            TokenType::BangEqual => self.emit_bytes(OpCode::Equal as u8, OpCode::Not as u8),
            TokenType::EqualEqual => self.emit_byte(OpCode::Equal as u8),
            TokenType::Greater => self.emit_byte(OpCode::Greater as u8),
            TokenType::GreaterEqual => self.emit_bytes(OpCode::Less as u8, OpCode::Not as u8),
            TokenType::Less => self.emit_byte(OpCode::Less as u8),
            TokenType::LessEqual => self.emit_bytes(OpCode::Greater as u8, OpCode::Not as u8),
            _ => unreachable!("binary() only ever runs for a binary operator token"),
        }
    }

    pub(super) fn unary(&mut self, _can_assign: bool) -> Result<(), CompilerError> {
        let operator = self.get_previous_token_ty()?;

        self.parse_precedence(Precedence::Unary)?;

        match operator {
            TokenType::Bang => self.emit_byte(OpCode::Not as u8),
            TokenType::Minus => self.emit_byte(OpCode::Negate as u8),
            _ => unreachable!("unary() only ever runs for '!' or '-'"),
        }
    }
}
