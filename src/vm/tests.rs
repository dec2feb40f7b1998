use crate::compiler::compile;
use crate::vm::VM;

fn run(source: &str) -> Result<String, String> {
    let chunk = compile(source).map_err(|errors| errors.join("\n"))?;
    let mut output = Vec::new();
    let mut vm = VM::with_writer(chunk, &mut output);
    vm.run().map_err(|e| e.to_string())?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(run("print 1 + 2 * 3;").unwrap(), "7\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(run("print \"foo\" + \"bar\";").unwrap(), "foobar\n");
}

#[test]
fn global_variable_define_get_set() {
    let source = "var a = 1; a = a + 1; print a;";
    assert_eq!(run(source).unwrap(), "2\n");
}

#[test]
fn block_scoped_locals_do_not_leak() {
    let source = "var a = \"outer\"; { var a = \"inner\"; print a; } print a;";
    assert_eq!(run(source).unwrap(), "inner\nouter\n");
}

#[test]
fn if_else_takes_correct_branch() {
    assert_eq!(run("if (1 < 2) { print \"yes\"; } else { print \"no\"; }").unwrap(), "yes\n");
    assert_eq!(run("if (1 > 2) { print \"yes\"; } else { print \"no\"; }").unwrap(), "no\n");
}

#[test]
fn while_loop_counts_to_three() {
    let source = "var i = 0; while (i < 3) { print i; i = i + 1; }";
    assert_eq!(run(source).unwrap(), "0\n1\n2\n");
}

#[test]
fn logical_and_short_circuits() {
    // The right operand is never evaluated, so `b` is never read as a
    // global and never errors even though it's undefined.
    assert_eq!(run("print false and b;").unwrap(), "false\n");
}

#[test]
fn logical_or_short_circuits() {
    assert_eq!(run("print true or b;").unwrap(), "true\n");
}

#[test]
fn equality_across_types_is_false() {
    assert_eq!(run("print nil == false;").unwrap(), "false\n");
    assert_eq!(run("print 1 == \"1\";").unwrap(), "false\n");
}

#[test]
fn comparison_operators() {
    assert_eq!(run("print 1 <= 1;").unwrap(), "true\n");
    assert_eq!(run("print 2 >= 3;").unwrap(), "false\n");
}

#[test]
fn undefined_global_variable_is_a_runtime_error() {
    let err = run("print undefined_var;").unwrap_err();
    assert!(err.contains("Undefined variable 'undefined_var'."));
    assert!(err.contains("[line 1] in script"));
}

#[test]
fn adding_number_and_nil_is_a_runtime_error() {
    let err = run("print 1 + nil;").unwrap_err();
    assert!(err.contains("Operands must be numbers."));
    assert!(err.contains("[line 1] in script"));
}

#[test]
fn adding_number_and_string_is_a_runtime_error() {
    let err = run("print 1 + \"x\";").unwrap_err();
    assert!(err.contains("Operands must be numbers."));

    let err = run("print \"x\" + 1;").unwrap_err();
    assert!(err.contains("Operands must be numbers."));
}

#[test]
fn truthiness_of_non_boolean_values() {
    assert_eq!(run("if (0) { print \"truthy\"; }").unwrap(), "truthy\n");
    assert_eq!(run("if (\"\") { print \"truthy\"; }").unwrap(), "truthy\n");
    assert_eq!(run("if (nil) { print \"truthy\"; }").unwrap(), "");
}
