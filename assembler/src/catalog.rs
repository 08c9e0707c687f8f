//! Fixed mnemonic → (format, opcode) table.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    // ── R-Type ────────────────────────────────
    Add, Sub, Nand, Nor, Srl, Sra,
    // ── I-Type ────────────────────────────────
    Addi, Subi, Nandi, Nori,
    // ── Jump ──────────────────────────────────
    Jump, Jal,
    // ── Memory ────────────────────────────────
    Ld, St,
    // ── LUI / CMOV ────────────────────────────
    Lui, Cmov,
    // ── Stack ─────────────────────────────────
    Push, Pop,
}

impl Mnemonic {
    pub fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Add   => "ADD",
            Mnemonic::Sub   => "SUB",
            Mnemonic::Nand  => "NAND",
            Mnemonic::Nor   => "NOR",
            Mnemonic::Srl   => "SRL",
            Mnemonic::Sra   => "SRA",
            Mnemonic::Addi  => "ADDI",
            Mnemonic::Subi  => "SUBI",
            Mnemonic::Nandi => "NANDI",
            Mnemonic::Nori  => "NORI",
            Mnemonic::Jump  => "JUMP",
            Mnemonic::Jal   => "JAL",
            Mnemonic::Ld    => "LD",
            Mnemonic::St    => "ST",
            Mnemonic::Lui   => "LUI",
            Mnemonic::Cmov  => "CMOV",
            Mnemonic::Push  => "PUSH",
            Mnemonic::Pop   => "POP",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bit layout family. Also decides how many operands a line must supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    RType,
    IType,
    MemType,
    JumpType,
    LuiType,
    StackType,
}

impl FormatKind {
    pub fn operand_count(self) -> usize {
        match self {
            FormatKind::RType | FormatKind::IType => 3,
            FormatKind::MemType | FormatKind::LuiType => 2,
            FormatKind::JumpType | FormatKind::StackType => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDescriptor {
    pub mnemonic: Mnemonic,
    pub format:   FormatKind,
    /// 5-bit opcode, bits 17..13 of the encoded word.
    pub opcode:   u8,
}

const fn entry(mnemonic: Mnemonic, format: FormatKind, opcode: u8) -> InstructionDescriptor {
    InstructionDescriptor { mnemonic, format, opcode }
}

pub static CATALOG: [InstructionDescriptor; 18] = {
    use FormatKind::*;
    use Mnemonic::*;
    [
        entry(Add,   RType,     0x00),
        entry(Sub,   RType,     0x01),
        entry(Nand,  RType,     0x02),
        entry(Nor,   RType,     0x03),
        entry(Srl,   RType,     0x04),
        entry(Sra,   RType,     0x05),
        entry(Addi,  IType,     0x06),
        entry(Subi,  IType,     0x07),
        entry(Nandi, IType,     0x08),
        entry(Nori,  IType,     0x09),
        entry(Jump,  JumpType,  0x0A),
        entry(Jal,   JumpType,  0x0B),
        entry(Ld,    MemType,   0x0C),
        entry(St,    MemType,   0x0D),
        entry(Lui,   LuiType,   0x0E),
        entry(Cmov,  RType,     0x0F),
        entry(Push,  StackType, 0x10),
        entry(Pop,   StackType, 0x11),
    ]
};

/// Exact match against an already uppercased mnemonic.
pub fn lookup(mnemonic: &str) -> Option<&'static InstructionDescriptor> {
    CATALOG.iter().find(|d| d.mnemonic.as_str() == mnemonic)
}
