use crate::chunk::{Chunk, ChunkError, OpCode};
use crate::value::Value;

#[test]
fn write_and_read_back_bytes() {
    let mut chunk = Chunk::new();
    chunk.write(OpCode::Return as u8, 123);
    assert_eq!(chunk.code, vec![OpCode::Return as u8]);
    assert_eq!(chunk.lines, vec![123]);
}

#[test]
fn add_constant_returns_index() {
    let mut chunk = Chunk::new();
    let idx = chunk.add_constant(Value::Number(1.2)).unwrap();
    assert_eq!(idx, 0);
    let idx = chunk.add_constant(Value::Number(3.4)).unwrap();
    assert_eq!(idx, 1);
}

#[test]
fn more_than_256_constants_is_an_error() {
    let mut chunk = Chunk::new();
    for i in 0..256 {
        chunk.add_constant(Value::Number(i as f64)).unwrap();
    }
    assert_eq!(
        chunk.add_constant(Value::Number(256.0)),
        Err(ChunkError::TooManyConstants)
    );
}

#[test]
fn opcode_roundtrips_through_u8() {
    for byte in 0..=23u8 {
        let op = OpCode::try_from(byte).unwrap();
        assert_eq!(op as u8, byte);
    }
    assert!(OpCode::try_from(24u8).is_err());
}
