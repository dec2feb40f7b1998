use crate::value::Value;

#[test]
fn falsiness() {
    assert!(Value::Nil.is_falsey());
    assert!(Value::Bool(false).is_falsey());
    assert!(!Value::Bool(true).is_falsey());
    assert!(!Value::Number(0.0).is_falsey());
    assert!(!Value::from("").is_falsey());
}

#[test]
fn cross_type_equality_is_always_false() {
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::Number(0.0), Value::Bool(false));
    assert_ne!(Value::from("1"), Value::Number(1.0));
}

#[test]
fn nan_is_not_equal_to_itself() {
    let nan = Value::Number(f64::NAN);
    assert_ne!(nan.clone(), nan);
}

#[test]
fn display_formatting() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Number(1.5).to_string(), "1.5");
    assert_eq!(Value::from("hi").to_string(), "hi");
}
