//! Bytecode disassembler, enabled via the `debug_trace_execution` feature
//! to trace each instruction as the VM executes it.
use crate::chunk::{Chunk, OpCode};

pub fn disassemble_chunk(chunk: &Chunk, name: &str) {
    println!("== {name} ==");

    let mut offset = 0;
    while offset < chunk.code.len() {
        offset = disassemble_instruction(chunk, offset);
    }
}

pub fn disassemble_instruction(chunk: &Chunk, offset: usize) -> usize {
    print!("{offset:04} ");

    if offset > 0 && chunk.lines[offset] == chunk.lines[offset - 1] {
        print!("   | ");
    } else {
        print!("{:>4} ", chunk.lines[offset]);
    }

    let instruction = chunk.code[offset];
    match OpCode::try_from(instruction) {
        Ok(OpCode::Return) => simple_instruction("OpReturn", offset),
        Ok(OpCode::Constant) => constant_instruction("OpConstant", chunk, offset),
        Ok(OpCode::Negate) => simple_instruction("OpNegate", offset),
        Ok(OpCode::Add) => simple_instruction("OpAdd", offset),
        Ok(OpCode::Subtract) => simple_instruction("OpSubtract", offset),
        Ok(OpCode::Multiply) => simple_instruction("OpMultiply", offset),
        Ok(OpCode::Divide) => simple_instruction("OpDivide", offset),
        Ok(OpCode::Nil) => simple_instruction("OpNil", offset),
        Ok(OpCode::True) => simple_instruction("OpTrue", offset),
        Ok(OpCode::False) => simple_instruction("OpFalse", offset),
        Ok(OpCode::Not) => simple_instruction("OpNot", offset),
        Ok(OpCode::Equal) => simple_instruction("OpEqual", offset),
        Ok(OpCode::Greater) => simple_instruction("OpGreater", offset),
        Ok(OpCode::Less) => simple_instruction("OpLess", offset),
        Ok(OpCode::Print) => simple_instruction("OpPrint", offset),
        Ok(OpCode::Pop) => simple_instruction("OpPop", offset),
        Ok(OpCode::DefineGlobal) => constant_instruction("OpDefineGlobal", chunk, offset),
        Ok(OpCode::GetGlobal) => constant_instruction("OpGetGlobal", chunk, offset),
        Ok(OpCode::SetGlobal) => constant_instruction("OpSetGlobal", chunk, offset),
        Ok(OpCode::GetLocal) => byte_instruction("OpGetLocal", chunk, offset),
        Ok(OpCode::SetLocal) => byte_instruction("OpSetLocal", chunk, offset),
        Ok(OpCode::Jump) => jump_instruction("OpJump", 1, chunk, offset),
        Ok(OpCode::JumpIfFalse) => jump_instruction("OpJumpIfFalse", 1, chunk, offset),
        Ok(OpCode::Loop) => jump_instruction("OpLoop", -1, chunk, offset),
        Err(e) => {
            eprintln!("{e}");
            offset + 1
        }
    }
}

fn constant_instruction(name: &str, chunk: &Chunk, offset: usize) -> usize {
    let constant_index = chunk.code[offset + 1];
    println!(
        "{name:<16} {constant_index:>4} '{}'",
        chunk.constants[constant_index as usize]
    );
    offset + 2
}

fn simple_instruction(name: &str, offset: usize) -> usize {
    println!("{name}");
    offset + 1
}

fn byte_instruction(name: &str, chunk: &Chunk, offset: usize) -> usize {
    let slot = chunk.code[offset + 1];
    println!("{name:<16} {slot:>4}");
    offset + 2
}

fn jump_instruction(name: &str, sign: isize, chunk: &Chunk, offset: usize) -> usize {
    let jump = u16::from_be_bytes([chunk.code[offset + 1], chunk.code[offset + 2]]);
    let target = (offset + 3) as isize + sign * jump as isize;
    println!("{name:<16} {offset:>4} -> {target}");
    offset + 3
}
