//! Stack-based bytecode interpreter. Executes a single `Chunk` top to
//! bottom; there is one instruction pointer and one stack, since there are
//! no function calls to juggle separate frames for.
use std::collections::HashMap;
use std::io::{Stdout, Write};

use crate::{
    chunk::{Chunk, OpCode},
    value::Value,
    vm::errors::VMError,
};

pub mod errors;
mod operations;
#[cfg(test)]
mod tests;
mod variables;

/// `W` defaults to `Stdout` for normal use; tests substitute `Vec<u8>` to
/// capture what `print` writes without touching the real stdout.
pub struct VM<W: Write = Stdout> {
    chunk: Chunk,
    ip: usize,
    stack: Vec<Value>,
    globals: HashMap<String, Value>,
    writer: W,
}

impl VM<Stdout> {
    pub fn new(chunk: Chunk) -> Self {
        Self::with_writer(chunk, std::io::stdout())
    }
}

impl<W: Write> VM<W> {
    pub fn with_writer(chunk: Chunk, writer: W) -> Self {
        Self {
            chunk,
            ip: 0,
            stack: Vec::new(),
            globals: HashMap::new(),
            writer,
        }
    }

    /// Loads a freshly compiled chunk for execution, keeping the globals
    /// table and writer from before. Used by the REPL, where each line is
    /// compiled as its own chunk but variables must persist across lines.
    pub fn load(&mut self, chunk: Chunk) {
        self.chunk = chunk;
        self.ip = 0;
        self.stack.clear();
    }

    fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    fn pop(&mut self) -> Result<Value, VMError> {
        self.stack
            .pop()
            .ok_or_else(|| self.construct_runtime_error("Expected value on the stack."))
    }

    fn peek(&mut self, distance: usize) -> Result<&Value, VMError> {
        let index = match self.stack.len().checked_sub(1 + distance) {
            Some(index) => index,
            None => return Err(self.construct_runtime_error("Expected value on the stack.")),
        };
        Ok(&self.stack[index])
    }

    fn read_byte(&mut self) -> u8 {
        let byte = self.chunk.code[self.ip];
        self.ip += 1;
        byte
    }

    fn read_u16(&mut self) -> u16 {
        let hi = self.read_byte();
        let lo = self.read_byte();
        u16::from_be_bytes([hi, lo])
    }

    fn read_constant(&mut self) -> Value {
        let index = self.read_byte();
        self.chunk.constants[index as usize].clone()
    }

    /// Runs the chunk to completion. Returns once `OpReturn` is reached or
    /// the code runs out.
    pub fn run(&mut self) -> Result<(), VMError> {
        while self.ip < self.chunk.code.len() {
            #[cfg(feature = "debug_trace_execution")]
            crate::debug::disassemble_instruction(&self.chunk, self.ip);

            let instruction = self.read_byte();
            let opcode = OpCode::try_from(instruction)
                .map_err(|e| self.construct_runtime_error(e))?;

            match opcode {
                OpCode::Return => return Ok(()),
                OpCode::Constant => {
                    let constant = self.read_constant();
                    self.push(constant);
                }
                OpCode::Nil => self.push(Value::Nil),
                OpCode::True => self.push(Value::Bool(true)),
                OpCode::False => self.push(Value::Bool(false)),
                OpCode::Pop => {
                    self.pop()?;
                }
                OpCode::GetLocal => self.op_get_local()?,
                OpCode::SetLocal => self.op_set_local()?,
                OpCode::GetGlobal => self.op_get_global()?,
                OpCode::DefineGlobal => self.op_define_global()?,
                OpCode::SetGlobal => self.op_set_global()?,
                OpCode::Equal => self.op_equal()?,
                OpCode::Greater | OpCode::Less | OpCode::Add | OpCode::Subtract | OpCode::Multiply
                | OpCode::Divide => self.binary_op(opcode)?,
                OpCode::Not => self.op_not()?,
                OpCode::Negate => self.op_negate()?,
                OpCode::Print => {
                    let value = self.pop()?;
                    writeln!(self.writer, "{value}")
                        .map_err(|e| self.construct_runtime_error(e))?;
                }
                OpCode::Jump => {
                    let offset = self.read_u16();
                    self.ip += offset as usize;
                }
                OpCode::JumpIfFalse => {
                    let offset = self.read_u16();
                    if self.peek(0)?.is_falsey() {
                        self.ip += offset as usize;
                    }
                }
                OpCode::Loop => {
                    let offset = self.read_u16();
                    self.ip -= offset as usize;
                }
            }
        }

        Ok(())
    }
}
