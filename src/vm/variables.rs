use std::io::Write;

use crate::vm::{VM, errors::VMError};

impl<W: Write> VM<W> {
    pub(super) fn op_get_local(&mut self) -> Result<(), VMError> {
        let slot = self.read_byte();
        let value = self.stack[slot as usize].clone();
        self.push(value);
        Ok(())
    }

    pub(super) fn op_set_local(&mut self) -> Result<(), VMError> {
        let slot = self.read_byte();
        let value = self.peek(0)?.clone();
        self.stack[slot as usize] = value;
        Ok(())
    }

    pub(super) fn op_define_global(&mut self) -> Result<(), VMError> {
        let name = self
            .read_constant()
            .as_str()
            .expect("DefineGlobal operand is always a string constant")
            .to_owned();
        let value = self.pop()?;
        self.globals.insert(name, value);
        Ok(())
    }

    pub(super) fn op_get_global(&mut self) -> Result<(), VMError> {
        let name = self
            .read_constant()
            .as_str()
            .expect("GetGlobal operand is always a string constant")
            .to_owned();
        let value = self
            .globals
            .get(&name)
            .cloned()
            .ok_or_else(|| self.construct_runtime_error(format!("Undefined variable '{name}'.")))?;
        self.push(value);
        Ok(())
    }

    pub(super) fn op_set_global(&mut self) -> Result<(), VMError> {
        let name = self
            .read_constant()
            .as_str()
            .expect("SetGlobal operand is always a string constant")
            .to_owned();
        let value = self.peek(0)?.clone();

        if !self.globals.contains_key(&name) {
            return Err(self.construct_runtime_error(format!("Undefined variable '{name}'.")));
        }

        self.globals.insert(name, value);
        Ok(())
    }
}
