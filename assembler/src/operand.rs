//! Register and immediate operand parsing.
//!
//! Registers are strict: anything other than `R<n>`/`r<n>` with `n` in
//! 0..=15 is rejected. Immediates are lenient: a numeric prefix is enough,
//! and trailing junk only marks the value as partial.

use thiserror::Error;

/// Register index, always in 0..=15.
pub type Register = u8;

pub const MAX_REGISTER: i64 = 15;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid register '{0}'")]
pub struct InvalidRegister(pub String);

pub fn parse_register(token: &str) -> Result<Register, InvalidRegister> {
    let invalid = || InvalidRegister(token.to_string());
    let digits = token
        .strip_prefix(|c: char| c.eq_ignore_ascii_case(&'r'))
        .ok_or_else(invalid)?;

    let (negative, unsigned) = split_sign(digits);
    let (magnitude, rest) = scan_unsigned(unsigned, 10);
    if !rest.is_empty() || !magnitude.had_digits {
        return Err(invalid());
    }
    match magnitude.signed(negative) {
        n @ 0..=MAX_REGISTER => Ok(n as Register),
        _ => Err(invalid()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Immediate {
    pub value:   i64,
    /// Characters followed the numeric prefix and were ignored.
    pub partial: bool,
}

/// Auto-base integer: `0x`/`0X` hex, leading `0` octal, otherwise decimal.
pub fn parse_immediate(token: &str) -> Immediate {
    let body = token.trim_start();
    let (negative, unsigned) = split_sign(body);

    let (value, rest) = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(hex) if hex.starts_with(|c: char| c.is_ascii_hexdigit()) => scan_unsigned(hex, 16),
        // "0x" with no hex digit after it is just the literal 0.
        Some(_) => scan_unsigned(unsigned, 8),
        None if unsigned.starts_with('0') => scan_unsigned(unsigned, 8),
        None => scan_unsigned(unsigned, 10),
    };

    let rest = if value.had_digits { rest } else { token };
    Immediate {
        value:   value.signed(negative),
        partial: !rest.is_empty(),
    }
}

#[derive(Debug, Clone, Copy)]
struct Magnitude {
    magnitude:  u64,
    overflow:   bool,
    had_digits: bool,
}

impl Magnitude {
    /// Out-of-range values saturate, like the C library does.
    fn signed(self, negative: bool) -> i64 {
        match (negative, self.overflow || self.magnitude > i64::MAX as u64 + 1) {
            (false, true) => i64::MAX,
            (true, true) => i64::MIN,
            (false, false) => i64::try_from(self.magnitude).unwrap_or(i64::MAX),
            (true, false) => 0i64.wrapping_sub_unsigned(self.magnitude),
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn scan_unsigned(s: &str, radix: u32) -> (Magnitude, &str) {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(s.len(), |(i, _)| i);

    let mut magnitude: u64 = 0;
    let mut overflow = false;
    for c in s[..end].chars() {
        let digit = u64::from(c.to_digit(radix).unwrap_or(0));
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(digit))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
    }

    (Magnitude { magnitude, overflow, had_digits: end > 0 }, &s[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_register_in_both_cases() {
        for n in 0..=15u8 {
            assert_eq!(parse_register(&format!("R{n}")), Ok(n));
            assert_eq!(parse_register(&format!("r{n}")), Ok(n));
        }
    }

    #[test]
    fn malformed_registers_are_rejected() {
        for bad in ["R16", "R-1", "RX", "5", "R", "", "R1x", "X1", "R 1", "R99999999999999999999"] {
            assert_eq!(
                parse_register(bad),
                Err(InvalidRegister(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn register_accepts_explicit_sign() {
        assert_eq!(parse_register("R+7"), Ok(7));
        assert_eq!(parse_register("R-0"), Ok(0));
        assert_eq!(parse_register("R007"), Ok(7));
    }

    fn imm(token: &str) -> (i64, bool) {
        let i = parse_immediate(token);
        (i.value, i.partial)
    }

    #[test]
    fn decimal_hex_octal() {
        assert_eq!(imm("12"), (12, false));
        assert_eq!(imm("-3"), (-3, false));
        assert_eq!(imm("+9"), (9, false));
        assert_eq!(imm("0x1F"), (31, false));
        assert_eq!(imm("0XfF"), (255, false));
        assert_eq!(imm("-0x10"), (-16, false));
        assert_eq!(imm("017"), (15, false));
        assert_eq!(imm("0"), (0, false));
    }

    // Immediates tolerate trailing junk while registers do not.
    #[test]
    fn trailing_characters_only_mark_partial() {
        assert_eq!(imm("12abc"), (12, true));
        assert_eq!(imm("08"), (0, true));
        assert_eq!(imm("0x"), (0, true));
        assert_eq!(imm("0xZZ"), (0, true));
        assert_eq!(imm("abc"), (0, true));
        assert_eq!(imm("-"), (0, true));
        assert!(parse_register("R12abc").is_err());
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(imm("99999999999999999999"), (i64::MAX, false));
        assert_eq!(imm("-99999999999999999999"), (i64::MIN, false));
        assert_eq!(imm("-9223372036854775808"), (i64::MIN, false));
        assert_eq!(imm("9223372036854775808"), (i64::MAX, false));
    }
}
