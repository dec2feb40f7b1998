use std::io::Write;

use crate::{chunk::OpCode, value::Value, vm::VM, vm::errors::VMError};

impl<W: Write> VM<W> {
    /// `+`, `-`, `*`, `/`, `>`, `<`. `+` is special-cased: if both operands
    /// are strings, this concatenates instead of adding numbers. A mix of
    /// one string and one number is not concatenation — it falls through
    /// to the numeric check below and errors.
    pub(super) fn binary_op(&mut self, opcode: OpCode) -> Result<(), VMError> {
        let right = self.pop()?;
        let left = self.pop()?;

        if opcode == OpCode::Add && left.is_string() && right.is_string() {
            let result = format!("{left}{right}");
            self.push(result.into());
            return Ok(());
        }

        let (Some(l), Some(r)) = (left.as_number(), right.as_number()) else {
            return Err(self.construct_runtime_error("Operands must be numbers."));
        };

        let result = match opcode {
            OpCode::Add => Value::Number(l + r),
            OpCode::Subtract => Value::Number(l - r),
            OpCode::Multiply => Value::Number(l * r),
            OpCode::Divide => Value::Number(l / r),
            OpCode::Greater => Value::Bool(l > r),
            OpCode::Less => Value::Bool(l < r),
            _ => unreachable!("binary_op is only called for arithmetic/comparison opcodes"),
        };

        self.push(result);
        Ok(())
    }

    pub(super) fn op_negate(&mut self) -> Result<(), VMError> {
        let value = self.peek(0)?;
        match value.as_number() {
            Some(n) => {
                self.pop()?;
                self.push(Value::Number(-n));
                Ok(())
            }
            None => Err(self.construct_runtime_error("Operand must be a number.")),
        }
    }

    /// Works on any value: `nil` and `false` negate to `true`, everything
    /// else negates to `false`.
    pub(super) fn op_not(&mut self) -> Result<(), VMError> {
        let value = self.pop()?;
        self.push(Value::Bool(value.is_falsey()));
        Ok(())
    }

    pub(super) fn op_equal(&mut self) -> Result<(), VMError> {
        let right = self.pop()?;
        let left = self.pop()?;
        self.push(Value::Bool(left == right));
        Ok(())
    }
}
