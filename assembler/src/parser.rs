//! Single-line classifier: comment stripping, label rejection, mnemonic
//! lookup and operand dispatch to the matching encoder.

use crate::{
    catalog::{self, FormatKind, InstructionDescriptor, Mnemonic},
    encoder::{self, WORD_MASK, Word},
    error::{AsmError, Warning},
    lexer,
    operand::{self, Register},
};

/// Operand tokens following the mnemonic, already checked for arity.
struct Operands<'a> {
    mnemonic: Mnemonic,
    tokens:   &'a [&'a str],
}

impl<'a> Operands<'a> {
    fn take(desc: &InstructionDescriptor, tokens: &'a [&'a str]) -> Result<Self, AsmError> {
        let needed = desc.format.operand_count();
        if tokens.len() < needed {
            return Err(AsmError::NotEnoughOperands(desc.mnemonic));
        }
        if tokens.len() > needed {
            tracing::debug!(
                mnemonic = %desc.mnemonic,
                ignored = ?&tokens[needed..],
                "extra operands ignored"
            );
        }
        Ok(Operands { mnemonic: desc.mnemonic, tokens: &tokens[..needed] })
    }

    fn reg(&self, i: usize) -> Result<Register, AsmError> {
        operand::parse_register(self.tokens[i]).map_err(|e| AsmError::InvalidRegister {
            mnemonic: self.mnemonic,
            token:    e.0,
        })
    }

    fn imm(&self, i: usize, warnings: &mut Vec<Warning>) -> i64 {
        let token = self.tokens[i];
        let imm = operand::parse_immediate(token);
        if imm.partial {
            warnings.push(Warning::PartialImmediate(token.to_string()));
        }
        imm.value
    }
}

/// Assemble one source line.
///
/// Returns `Ok(None)` for blank lines, comment-only lines and labels. A
/// label also leaves a [`Warning::LabelIgnored`] behind. Warnings are
/// appended to `warnings` even when the line ends up failing.
pub fn assemble_line(line: &str, warnings: &mut Vec<Warning>) -> Result<Option<Word>, AsmError> {
    let code = lexer::strip_comment(line).trim();
    if code.is_empty() {
        return Ok(None);
    }

    let tokens = lexer::tokenize(code);
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    if head.ends_with(':') {
        warnings.push(Warning::LabelIgnored(head.to_string()));
        return Ok(None);
    }

    let name = head.to_ascii_uppercase();
    let desc = catalog::lookup(&name).ok_or(AsmError::UnknownOpcode(name))?;
    let ops = Operands::take(desc, rest)?;
    let op = desc.opcode;

    // Registers and immediates are read in source order so an immediate
    // warning is still reported when a later register is bad.
    let word = match desc.format {
        FormatKind::RType if desc.mnemonic == Mnemonic::Cmov => {
            // CMOV cond, dst, src: if cond == 0 then dst = src.
            let cond = ops.reg(0)?;
            let dst = ops.reg(1)?;
            let src = ops.reg(2)?;
            encoder::enc_r(op, dst, cond, src)
        }
        FormatKind::RType => {
            let dst = ops.reg(0)?;
            let src1 = ops.reg(1)?;
            let src2 = ops.reg(2)?;
            encoder::enc_r(op, dst, src1, src2)
        }
        FormatKind::IType => {
            let dst = ops.reg(0);
            let src1 = ops.reg(1);
            let imm = ops.imm(2, warnings);
            encoder::enc_i(op, dst?, src1?, imm)
        }
        FormatKind::MemType => {
            let reg = ops.reg(0);
            let addr = ops.imm(1, warnings);
            encoder::enc_mem(op, reg?, addr)
        }
        FormatKind::JumpType => encoder::enc_jump(op, ops.imm(0, warnings)),
        FormatKind::LuiType => {
            let dst = ops.reg(0);
            let imm = ops.imm(1, warnings);
            encoder::enc_lui(op, dst?, imm)
        }
        FormatKind::StackType => encoder::enc_stack(op, ops.reg(0)?),
    };

    Ok(Some(word & WORD_MASK))
}
