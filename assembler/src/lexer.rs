use logos::Logos;

/// Markers that start a comment running to the end of the line.
pub const COMMENT_MARKERS: [&str; 3] = ["//", ";", "#"];

/// Operands are separated by blanks and commas; everything else is part of
/// a token. Classification (register, immediate, label) happens later.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n,]+")]
pub enum Token<'src> {
    #[regex(r"[^ \t\r\n,]+", |lex| lex.slice())]
    Word(&'src str),
}

impl<'src> Token<'src> {
    pub fn text(&self) -> &'src str {
        match self {
            Token::Word(s) => *s,
        }
    }
}

/// Cut the line at the earliest comment marker.
pub fn strip_comment(line: &str) -> &str {
    let cut = COMMENT_MARKERS
        .iter()
        .filter_map(|m| line.find(m))
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}

/// Words of a comment-free line, in order.
pub fn tokenize(code: &str) -> Vec<&str> {
    Token::lexer(code)
        .filter_map(Result::ok)
        .map(|t| t.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_marker_wins() {
        assert_eq!(strip_comment("ADD R1 ; x // y # z"), "ADD R1 ");
        assert_eq!(strip_comment("ADD R1 # x ; y"), "ADD R1 ");
        assert_eq!(strip_comment("ADD R1 // x ; y"), "ADD R1 ");
        assert_eq!(strip_comment("ADD R1, R2, R3"), "ADD R1, R2, R3");
        assert_eq!(strip_comment("; only"), "");
    }

    #[test]
    fn a_single_slash_is_not_a_comment() {
        assert_eq!(strip_comment("JUMP 4/2"), "JUMP 4/2");
        assert_eq!(strip_comment("JUMP 4/2 //x"), "JUMP 4/2 ");
    }

    #[test]
    fn splits_on_blanks_and_commas() {
        assert_eq!(tokenize("ADD R1, R2,R3"), ["ADD", "R1", "R2", "R3"]);
        assert_eq!(tokenize("\tLD\tr5 ,, 0x10\r\n"), ["LD", "r5", "0x10"]);
        assert_eq!(tokenize("loop: JUMP -3"), ["loop:", "JUMP", "-3"]);
        assert!(tokenize(" , ,").is_empty());
    }
}
