use crate::compiler::parser::ParserError;

/// Errors raised while compiling a single expression or statement.
#[derive(Debug)]
pub enum CompilerError {
    ParserError(ParserError),
    ExpressionError(String),
}

impl std::fmt::Display for CompilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParserError(error) => write!(f, "{error}"),
            Self::ExpressionError(error) => write!(f, "{error}"),
        }
    }
}

impl From<ParserError> for CompilerError {
    fn from(error: ParserError) -> Self {
        Self::ParserError(error)
    }
}
