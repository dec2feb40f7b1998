use crate::vm::VM;
use std::io::Write;

/// Errors a running chunk can raise. Compile errors never reach here —
/// `compile()` is checked before a `VM` is ever asked to run.
#[derive(Debug, Clone, PartialEq)]
pub enum VMError {
    RuntimeError(String),
}

impl std::fmt::Display for VMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuntimeError(message) => write!(f, "{message}"),
        }
    }
}

impl<W: Write> VM<W> {
    /// Formats a runtime error the way the reference implementation does:
    /// the message, then the line the failing instruction came from. Also
    /// resets the stack, since a runtime error abandons whatever the
    /// program was in the middle of computing.
    pub(super) fn construct_runtime_error(&mut self, message: impl std::fmt::Display) -> VMError {
        let line = self.chunk.lines.get(self.ip.saturating_sub(1)).copied().unwrap_or(-1);
        self.stack.clear();
        VMError::RuntimeError(format!("{message}\n[line {line}] in script\n"))
    }
}
