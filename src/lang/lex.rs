use super::{token::*, Error, Labels, Line, Program};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

const COMMENT: &str = "//";
const MAX_TOKENS: usize = 3;

/// Converts source text into a [`Program`] and its [`Labels`].
///
/// Every text line becomes exactly one program line, so line indexes in
/// errors and labels are also source line indexes (counting from zero).
pub fn lex(source: &str) -> Result<(Program, Labels)> {
    let mut lines = vec![];
    let mut labels = Labels::default();
    for (index, text) in source.split('\n').enumerate() {
        let text = text.strip_suffix('\r').unwrap_or(text);
        let line = lex_line(index, text)?;
        if let Some(token) = line.label() {
            labels.define(&token.value, index);
        }
        lines.push(line);
    }
    Ok((Program::new(lines), labels))
}

fn lex_line(index: usize, text: &str) -> Result<Line> {
    let mut rest = match text.find(COMMENT) {
        Some(pos) => &text[..pos],
        None => text,
    };
    let mut tokens: Vec<Token> = vec![];
    'scan: while !rest.is_empty() {
        for (kind, matcher) in PATTERNS {
            if let Some((len, value)) = matcher.matches(rest) {
                if let Some(kind) = kind {
                    tokens.push(Token::new(*kind, value, index));
                }
                rest = &rest[len..];
                continue 'scan;
            }
        }
        return Err(error!(SyntaxError, index; &format!("UNEXPECTED TOKEN {}", rest.trim_end())));
    }
    if tokens.len() > MAX_TOKENS {
        return Err(error!(SyntaxError, index; "TOO MANY OPERANDS"));
    }
    if tokens.is_empty() {
        tokens.push(Token::skip(index));
    }
    Ok(Line::new(tokens))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

enum Matcher {
    /// Case-insensitive keyword ending on a word boundary.
    Word(&'static str),
    /// Quoted text; a quote preceded by a backslash does not terminate it.
    Quoted(char),
    Number,
    /// `@name`, only when nothing but whitespace follows.
    Label,
    Whitespace,
}

impl Matcher {
    /// Returns the length of the match at the head of `s` and the token text.
    fn matches<'a>(&self, s: &'a str) -> Option<(usize, &'a str)> {
        match self {
            Matcher::Word(word) => {
                let head = s.get(..word.len())?;
                if !head.eq_ignore_ascii_case(word) {
                    return None;
                }
                match s[word.len()..].chars().next() {
                    Some(c) if is_word_char(c) => None,
                    _ => Some((word.len(), head)),
                }
            }
            Matcher::Quoted(quote) => {
                let body = s.strip_prefix(*quote)?;
                let mut prev = None;
                for (pos, ch) in body.char_indices() {
                    if ch == *quote && prev != Some('\\') {
                        return Some((pos + 2 * quote.len_utf8(), &body[..pos]));
                    }
                    prev = Some(ch);
                }
                None
            }
            Matcher::Number => {
                let bytes = s.as_bytes();
                let mut len = 0;
                if bytes.first() == Some(&b'-') {
                    len += 1;
                }
                let digits = bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
                if digits == 0 {
                    return None;
                }
                len += digits;
                if bytes.get(len) == Some(&b'.') {
                    len += 1;
                    len += bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
                }
                Some((len, &s[..len]))
            }
            Matcher::Label => {
                let name = s.strip_prefix('@')?;
                let len = name.chars().take_while(|c| is_word_char(*c)).count();
                if len == 0 || !name[len..].chars().all(char::is_whitespace) {
                    return None;
                }
                Some((s.len(), &s[..len + 1]))
            }
            Matcher::Whitespace => {
                let ch = s.chars().next().filter(|c| c.is_whitespace())?;
                Some((ch.len_utf8(), ""))
            }
        }
    }
}

/// Scanned in order; the first entry matching at the head of the line wins.
/// Aliases share a kind so either spelling produces the same token.
#[rustfmt::skip]
const PATTERNS: &[(Option<Kind>, Matcher)] = &[
    (Some(Kind::Opcode(Opcode::Teq)), Matcher::Word("TEQ")),
    (Some(Kind::Opcode(Opcode::Tne)), Matcher::Word("TNE")),
    (Some(Kind::Opcode(Opcode::Tgt)), Matcher::Word("TGT")),
    (Some(Kind::Opcode(Opcode::Tge)), Matcher::Word("TGE")),
    (Some(Kind::Opcode(Opcode::Tlt)), Matcher::Word("TLT")),
    (Some(Kind::Opcode(Opcode::Tle)), Matcher::Word("TLE")),
    (Some(Kind::Opcode(Opcode::Teqs)), Matcher::Word("TEQS")),
    (Some(Kind::Opcode(Opcode::Tnes)), Matcher::Word("TNES")),
    (Some(Kind::Opcode(Opcode::Tgts)), Matcher::Word("TGTS")),
    (Some(Kind::Opcode(Opcode::Tges)), Matcher::Word("TGES")),
    (Some(Kind::Opcode(Opcode::Tlts)), Matcher::Word("TLTS")),
    (Some(Kind::Opcode(Opcode::Tles)), Matcher::Word("TLES")),
    (Some(Kind::Opcode(Opcode::Tnum)), Matcher::Word("TNUM")),
    (Some(Kind::Opcode(Opcode::Num)), Matcher::Word("NUM")),
    (Some(Kind::Opcode(Opcode::Str)), Matcher::Word("STR")),
    (Some(Kind::Opcode(Opcode::Jump)), Matcher::Word("JUMP")),
    (Some(Kind::Opcode(Opcode::Jump)), Matcher::Word("JMP")),
    (Some(Kind::Opcode(Opcode::Jrl)), Matcher::Word("JRL")),
    (Some(Kind::Opcode(Opcode::Jrl)), Matcher::Word("JREL")),
    (Some(Kind::Opcode(Opcode::Jsr)), Matcher::Word("JSR")),
    (Some(Kind::Opcode(Opcode::Ret)), Matcher::Word("RSR")),
    (Some(Kind::Opcode(Opcode::Ret)), Matcher::Word("RET")),
    (Some(Kind::Opcode(Opcode::Cat)), Matcher::Word("CAT")),
    (Some(Kind::Opcode(Opcode::Slc)), Matcher::Word("SLC")),
    (Some(Kind::Opcode(Opcode::Add)), Matcher::Word("ADD")),
    (Some(Kind::Opcode(Opcode::Sub)), Matcher::Word("SUB")),
    (Some(Kind::Opcode(Opcode::Mul)), Matcher::Word("MULT")),
    (Some(Kind::Opcode(Opcode::Mul)), Matcher::Word("MUL")),
    (Some(Kind::Opcode(Opcode::Div)), Matcher::Word("DIV")),
    (Some(Kind::Opcode(Opcode::Mod)), Matcher::Word("MOD")),
    (Some(Kind::Opcode(Opcode::Mov)), Matcher::Word("MOV")),
    (Some(Kind::Opcode(Opcode::Mov)), Matcher::Word("MOVE")),
    (Some(Kind::Opcode(Opcode::Pow)), Matcher::Word("POW")),
    (Some(Kind::Opcode(Opcode::Pow)), Matcher::Word("POWER")),
    (Some(Kind::Opcode(Opcode::Log)), Matcher::Word("LOG")),
    (Some(Kind::Opcode(Opcode::Floor)), Matcher::Word("FLR")),
    (Some(Kind::Opcode(Opcode::Floor)), Matcher::Word("FLOOR")),
    (Some(Kind::Opcode(Opcode::Ceil)), Matcher::Word("CEIL")),
    (Some(Kind::Opcode(Opcode::Min)), Matcher::Word("MIN")),
    (Some(Kind::Opcode(Opcode::Max)), Matcher::Word("MAX")),
    (Some(Kind::Opcode(Opcode::Len)), Matcher::Word("LEN")),
    (Some(Kind::Random), Matcher::Word("RAND")),
    (Some(Kind::Register(Register::Acc)), Matcher::Word("ACC")),
    (Some(Kind::Register(Register::R0)), Matcher::Word("R0")),
    (Some(Kind::Register(Register::R1)), Matcher::Word("R1")),
    (Some(Kind::Register(Register::R2)), Matcher::Word("R2")),
    (Some(Kind::Register(Register::R3)), Matcher::Word("R3")),
    (Some(Kind::Register(Register::R4)), Matcher::Word("R4")),
    (Some(Kind::Register(Register::R5)), Matcher::Word("R5")),
    (Some(Kind::Register(Register::R6)), Matcher::Word("R6")),
    (Some(Kind::Register(Register::R7)), Matcher::Word("R7")),
    (Some(Kind::Register(Register::R8)), Matcher::Word("R8")),
    (Some(Kind::Register(Register::R9)), Matcher::Word("R9")),
    (Some(Kind::Push), Matcher::Word("PUSH")),
    (Some(Kind::Push), Matcher::Word("PSH")),
    (Some(Kind::Pop), Matcher::Word("POP")),
    (Some(Kind::Top), Matcher::Word("TOP")),
    (Some(Kind::Void), Matcher::Word("VOID")),
    (Some(Kind::Memory), Matcher::Word("MEM")),
    (Some(Kind::Address), Matcher::Word("ADDR")),
    (Some(Kind::Input), Matcher::Word("IN")),
    (Some(Kind::Output), Matcher::Word("OUT")),
    (Some(Kind::String), Matcher::Quoted('"')),
    (Some(Kind::String), Matcher::Quoted('\'')),
    (Some(Kind::Number), Matcher::Number),
    (Some(Kind::Label), Matcher::Label),
    (None, Matcher::Whitespace),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<Kind> {
        lex_line(0, s).unwrap().tokens().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_word_boundary() {
        assert_eq!(kinds("TEQS"), vec![Kind::Opcode(Opcode::Teqs)]);
        assert_eq!(kinds("movE"), vec![Kind::Opcode(Opcode::Mov)]);
        assert_eq!(kinds("power"), vec![Kind::Opcode(Opcode::Pow)]);
        assert!(lex_line(0, "ADDR0").is_err());
    }

    #[test]
    fn test_quoted() {
        let m = Matcher::Quoted('"');
        assert_eq!(m.matches(r#""" rest"#), Some((2, "")));
        assert_eq!(m.matches(r#""a\"b" rest"#), Some((6, r#"a\"b"#)));
        assert_eq!(m.matches(r#""open"#), None);
        let m = Matcher::Quoted('\'');
        assert_eq!(m.matches("'it''"), Some((4, "it")));
    }

    #[test]
    fn test_number() {
        let m = Matcher::Number;
        assert_eq!(m.matches("-12.5x"), Some((5, "-12.5")));
        assert_eq!(m.matches("3."), Some((2, "3.")));
        assert_eq!(m.matches("1.2.3"), Some((3, "1.2")));
        assert_eq!(m.matches(".5"), None);
        assert_eq!(m.matches("-"), None);
    }

    #[test]
    fn test_label() {
        let m = Matcher::Label;
        assert_eq!(m.matches("@loop  "), Some((7, "@loop")));
        assert_eq!(m.matches("@loop ADD"), None);
        assert_eq!(m.matches("@"), None);
    }

    #[test]
    fn test_comment_truncates_string() {
        assert!(lex_line(0, r#"MOV "http://x" OUT"#).is_err());
        assert_eq!(kinds("  // nothing"), vec![Kind::Skip]);
    }

    #[test]
    fn test_too_many_operands() {
        let e = lex_line(4, "ADD 1 2 3").unwrap_err();
        assert_eq!(e.line(), Some(4));
    }
}
