use bitvec::prelude::*;

use crate::operand::Register;

/// An encoded instruction. Only the low 18 bits are ever set.
pub type Word = u32;

pub const WORD_BITS: usize = 18;
pub const WORD_MASK: Word = (1 << WORD_BITS) - 1;

type Fields = BitArr!(for WORD_BITS, in u32, Lsb0);

/// Builder over the 18 bits of a word. `field` keeps the low bits of the
/// value that fit the range and silently drops the rest.
struct Packer(Fields);

impl Packer {
    fn new(opcode: u8) -> Self {
        let mut p = Packer(Fields::ZERO);
        p.0[13..18].store_le(opcode);
        p
    }

    fn field<V: Into<i64>>(mut self, range: std::ops::Range<usize>, value: V) -> Self {
        self.0[range].store_le(value.into() as u64);
        self
    }

    fn finish(self) -> Word {
        self.0.into_inner()[0] & WORD_MASK
    }
}

pub fn enc_r(opcode: u8, dst: Register, src1: Register, src2: Register) -> Word {
    Packer::new(opcode)
        .field(9..13, dst)
        .field(5..9, src1)
        .field(1..5, src2)
        .finish()
}

pub fn enc_i(opcode: u8, dst: Register, src1: Register, imm: i64) -> Word {
    Packer::new(opcode)
        .field(9..13, dst)
        .field(5..9, src1)
        .field(0..5, imm)
        .finish()
}

pub fn enc_mem(opcode: u8, reg: Register, addr: i64) -> Word {
    Packer::new(opcode)
        .field(9..13, reg)
        .field(0..9, addr)
        .finish()
}

/// Offsets are 13-bit two's complement.
pub fn enc_jump(opcode: u8, offset: i64) -> Word {
    Packer::new(opcode).field(0..13, offset).finish()
}

pub fn enc_lui(opcode: u8, dst: Register, imm: i64) -> Word {
    Packer::new(opcode)
        .field(9..13, dst)
        .field(0..9, imm)
        .finish()
}

/// PUSH/POP share the memory layout with a zero address.
#[inline]
pub fn enc_stack(opcode: u8, reg: Register) -> Word {
    enc_mem(opcode, reg, 0)
}
