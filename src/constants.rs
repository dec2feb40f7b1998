/// A chunk's constant pool and a compiler's local-slot table are both indexed
/// by a single `u8` operand, so neither can hold more than this many entries.
pub const UINT8_COUNT: usize = u8::MAX as usize + 1;
