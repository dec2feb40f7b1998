use crate::chunk::OpCode;
use crate::compiler::compile;
use crate::value::Value;

#[test]
fn var_declaration_without_initializer_defaults_to_nil() {
    let chunk = compile("var a;").unwrap();
    assert_eq!(
        chunk.code,
        vec![
            OpCode::Nil as u8,
            OpCode::DefineGlobal as u8,
            0,
            OpCode::Return as u8,
        ]
    );
    assert_eq!(chunk.constants, vec![Value::from("a")]);
}

#[test]
fn var_declaration_with_arithmetic_initializer() {
    let chunk = compile("var a = 10 + 20;").unwrap();
    assert_eq!(
        chunk.code,
        vec![
            OpCode::Constant as u8,
            1,
            OpCode::Constant as u8,
            2,
            OpCode::Add as u8,
            OpCode::DefineGlobal as u8,
            0,
            OpCode::Return as u8,
        ]
    );
    assert_eq!(
        chunk.constants,
        vec![Value::from("a"), Value::Number(10.0), Value::Number(20.0)]
    );
}

#[test]
fn print_string_literal() {
    let chunk = compile("print \"Hamza\";").unwrap();
    assert_eq!(
        chunk.code,
        vec![
            OpCode::Constant as u8,
            0,
            OpCode::Print as u8,
            OpCode::Return as u8,
        ]
    );
    assert_eq!(chunk.constants, vec![Value::from("Hamza")]);
}

#[test]
fn block_scoped_local_pops_on_exit() {
    let chunk = compile("{ var a = 1; }").unwrap();
    assert_eq!(
        chunk.code,
        vec![
            OpCode::Constant as u8,
            0,
            OpCode::Pop as u8,
            OpCode::Return as u8,
        ]
    );
}

#[test]
fn if_else_emits_two_patched_jumps() {
    let chunk = compile("if (true) { print 1; } else { print 2; }").unwrap();
    // True, JumpIfFalse +then_len, Pop, Constant 0, Print, Jump +else_len,
    // Pop, Constant 1, Print, Return
    assert_eq!(chunk.code[0], OpCode::True as u8);
    assert_eq!(chunk.code[1], OpCode::JumpIfFalse as u8);
    let then_jump = u16::from_be_bytes([chunk.code[2], chunk.code[3]]);
    assert_eq!(then_jump as usize, 7); // Pop, Constant, idx, Print, Jump, placeholder x2
    assert_eq!(*chunk.code.last().unwrap(), OpCode::Return as u8);
}

#[test]
fn while_loop_emits_backward_jump() {
    let chunk = compile("while (false) { print 1; }").unwrap();
    assert!(chunk.code.contains(&(OpCode::Loop as u8)));
    assert!(chunk.code.contains(&(OpCode::JumpIfFalse as u8)));
}

#[test]
fn redeclaration_in_same_scope_is_an_error() {
    let result = compile("{ var a = 1; var a = 2; }");
    assert!(result.is_err());
    assert!(result.unwrap_err()[0].contains("Already a variable with this name in this scope."));
}

#[test]
fn reading_local_in_its_own_initializer_is_an_error() {
    let result = compile("{ var a = a; }");
    assert!(result.is_err());
    assert!(
        result.unwrap_err()[0].contains("Can't read local variable in its own initializer.")
    );
}

#[test]
fn more_than_256_locals_is_an_error() {
    let mut source = String::from("{\n");
    for i in 0..257 {
        source.push_str(&format!("var v{i} = {i};\n"));
    }
    source.push('}');

    let result = compile(&source);
    assert!(result.is_err());
    assert!(result.unwrap_err()[0].contains("Too many local variables"));
}

#[test]
fn more_than_256_constants_is_an_error() {
    let mut source = String::new();
    for i in 0..257 {
        source.push_str(&format!("print {i};\n"));
    }

    let result = compile(&source);
    assert!(result.is_err());
    assert!(result.unwrap_err()[0].contains("Too many constants"));
}

#[test]
fn multiple_independent_errors_are_all_reported() {
    let result = compile("print ; print ;");
    let errors = result.unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn empty_source_compiles_to_a_bare_return() {
    let chunk = compile("").unwrap();
    assert_eq!(chunk.code, vec![OpCode::Return as u8]);
}

#[test]
fn invalid_assignment_target_is_an_error() {
    let result = compile("1 + 2 = 3;");
    assert!(result.is_err());
    assert!(result.unwrap_err()[0].contains("Invalid assignment target."));
}
