/// Errors the scanner can produce while lexing a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerError {
    /// Unrecognized character alongside the line number it appeared on
    UnexpectedCharacter { line: i32, character: char },
    /// A string literal with no closing double quote before EOF
    UnterminatedString { line: i32 },
}

/// `Display` impl to print errors nicely
impl std::fmt::Display for ScannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScannerError::UnexpectedCharacter { line, character } => {
                write!(
                    f,
                    "[line {}] Error: Unexpected character '{}'",
                    line, character
                )
            }
            ScannerError::UnterminatedString { line } => {
                write!(f, "[line {}] Error: Unterminated string.", line)
            }
        }
    }
}
