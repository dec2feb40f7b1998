pub mod chunk;
pub mod cli;
pub mod compiler;
pub mod constants;
#[cfg(feature = "debug_trace_execution")]
pub mod debug;
pub mod scanner;
pub mod value;
pub mod vm;
