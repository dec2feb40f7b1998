use crate::compiler::{Compiler, errors::CompilerError};
use crate::scanner::token::TokenType;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None,
    Assignment, // =
    Or,         // or
    And,        // and
    Equality,   // == !=
    Comparison, // < > <= >=
    Term,       // + -
    Factor,     // * /
    Unary,      // ! -
    Call,       // . ()
    Primary,
}

impl From<u8> for Precedence {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Assignment,
            2 => Self::Or,
            3 => Self::And,
            4 => Self::Equality,
            5 => Self::Comparison,
            6 => Self::Term,
            7 => Self::Factor,
            8 => Self::Unary,
            9 => Self::Call,
            _ => Self::Primary,
        }
    }
}

pub type ParseFn<'a> = Option<fn(&mut Compiler<'a>, bool) -> Result<(), CompilerError>>;

#[derive(Clone, Copy)]
pub struct ParseRule<'a> {
    pub prefix: ParseFn<'a>,
    pub infix: ParseFn<'a>,
    pub precedence: Precedence,
}

impl<'a> ParseRule<'a> {
    /// Rules indexed by `TokenType as usize`; order must track the
    /// `TokenType` enum exactly.
    fn get_rules() -> [ParseRule<'a>; 40] {
        let none = ParseRule {
            prefix: None,
            infix: None,
            precedence: Precedence::None,
        };

        let mut rules = [none; 40];

        rules[TokenType::LeftParen as usize] = ParseRule {
            prefix: Some(Compiler::grouping),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::Minus as usize] = ParseRule {
            prefix: Some(Compiler::unary),
            infix: Some(Compiler::binary),
            precedence: Precedence::Term,
        };
        rules[TokenType::Plus as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Term,
        };
        rules[TokenType::Slash as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Factor,
        };
        rules[TokenType::Star as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Factor,
        };
        rules[TokenType::Bang as usize] = ParseRule {
            prefix: Some(Compiler::unary),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::BangEqual as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Equality,
        };
        rules[TokenType::EqualEqual as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Equality,
        };
        rules[TokenType::Greater as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Comparison,
        };
        rules[TokenType::GreaterEqual as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Comparison,
        };
        rules[TokenType::Less as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Comparison,
        };
        rules[TokenType::LessEqual as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::binary),
            precedence: Precedence::Comparison,
        };
        rules[TokenType::Identifier as usize] = ParseRule {
            prefix: Some(Compiler::variable),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::String as usize] = ParseRule {
            prefix: Some(Compiler::string),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::Number as usize] = ParseRule {
            prefix: Some(Compiler::number),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::And as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::logical_and),
            precedence: Precedence::And,
        };
        rules[TokenType::Or as usize] = ParseRule {
            prefix: None,
            infix: Some(Compiler::logical_or),
            precedence: Precedence::Or,
        };
        rules[TokenType::False as usize] = ParseRule {
            prefix: Some(Compiler::literal),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::Nil as usize] = ParseRule {
            prefix: Some(Compiler::literal),
            infix: None,
            precedence: Precedence::None,
        };
        rules[TokenType::True as usize] = ParseRule {
            prefix: Some(Compiler::literal),
            infix: None,
            precedence: Precedence::None,
        };

        rules
    }

    pub fn get_parse_rule(ty: TokenType) -> ParseRule<'a> {
        Self::get_rules()[ty as usize]
    }
}
