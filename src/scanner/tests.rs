use crate::scanner::{Scanner, errors::ScannerError, token::TokenType};

fn scan_all(source: &str) -> Vec<TokenType> {
    let mut scanner = Scanner::new(source);
    let mut tys = vec![];
    loop {
        let token = scanner.scan_token().unwrap();
        let done = token.ty == TokenType::Eof;
        tys.push(token.ty);
        if done {
            break;
        }
    }
    tys
}

#[test]
fn skip_whitespace_and_comments() {
    let source = "
               // This comment should also be ignored
               ";
    let tys = scan_all(source);
    assert_eq!(tys, vec![TokenType::Eof]);
}

#[test]
fn comment_stops_at_newline_not_at_next_slash() {
    // Regression test for the line-comment bug noted in the spec: the
    // scanner must stop at the newline, not loop while it sees another '/'.
    let source = "// a / b\n1";
    let tys = scan_all(source);
    assert_eq!(tys, vec![TokenType::Number, TokenType::Eof]);
}

#[test]
fn single_character_tokens() {
    let source = "(){};,.-+/*! = ><";
    let tys = scan_all(source);
    assert_eq!(
        tys,
        vec![
            TokenType::LeftParen,
            TokenType::RightParen,
            TokenType::LeftBrace,
            TokenType::RightBrace,
            TokenType::Semicolon,
            TokenType::Comma,
            TokenType::Dot,
            TokenType::Minus,
            TokenType::Plus,
            TokenType::Slash,
            TokenType::Star,
            TokenType::Bang,
            TokenType::Equal,
            TokenType::Greater,
            TokenType::Less,
            TokenType::Eof,
        ]
    );
}

#[test]
fn double_character_tokens() {
    let tys = scan_all("!===>=<=");
    assert_eq!(
        tys,
        vec![
            TokenType::BangEqual,
            TokenType::EqualEqual,
            TokenType::GreaterEqual,
            TokenType::LessEqual,
            TokenType::Eof,
        ]
    );
}

#[test]
fn number_tokens() {
    let tys = scan_all("1 1.23 0.00 123.1923 0.123");
    assert_eq!(tys.iter().filter(|t| **t == TokenType::Number).count(), 5);
}

#[test]
fn trailing_dot_is_not_consumed_without_a_following_digit() {
    // `1.` has no digit after the dot, so the dot is a separate token.
    let tys = scan_all("1.");
    assert_eq!(tys, vec![TokenType::Number, TokenType::Dot, TokenType::Eof]);
}

#[test]
fn string_tokens() {
    let source = "\"My\" \"name\" \"is\" \"Ameer\" \"Hamza\"";
    let tys = scan_all(source);
    assert_eq!(tys.iter().filter(|t| **t == TokenType::String).count(), 5);
}

#[test]
fn multiline_string_tracks_line_number() {
    let mut scanner = Scanner::new("\"a\nb\" 1");
    let string_token = scanner.scan_token().unwrap();
    assert_eq!(string_token.ty, TokenType::String);
    let number_token = scanner.scan_token().unwrap();
    assert_eq!(number_token.line, 2);
}

#[test]
fn invalid_string_token() {
    let mut scanner = Scanner::new("\"This is unterminated string");
    let result = scanner.scan_token();
    assert_eq!(result, Err(ScannerError::UnterminatedString { line: 1 }));
}

#[test]
fn unexpected_character() {
    let mut scanner = Scanner::new("@");
    let result = scanner.scan_token();
    assert_eq!(
        result,
        Err(ScannerError::UnexpectedCharacter {
            line: 1,
            character: '@'
        })
    );
}

#[test]
fn identifiers_and_keywords() {
    let source = "and or class if else false for fun
    true nil print return super this var while _this _class another_variable_name";

    let tys = scan_all(source);
    assert_eq!(
        tys,
        vec![
            TokenType::And,
            TokenType::Or,
            TokenType::Class,
            TokenType::If,
            TokenType::Else,
            TokenType::False,
            TokenType::For,
            TokenType::Fun,
            TokenType::True,
            TokenType::Nil,
            TokenType::Print,
            TokenType::Return,
            TokenType::Super,
            TokenType::This,
            TokenType::Var,
            TokenType::While,
            TokenType::Identifier,
            TokenType::Identifier,
            TokenType::Identifier,
            TokenType::Eof,
        ]
    );
}

#[test]
fn eof_is_returned_repeatedly_after_source_exhausted() {
    let mut scanner = Scanner::new("1");
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Number);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Eof);
    assert_eq!(scanner.scan_token().unwrap().ty, TokenType::Eof);
}
