/// ## Lexical unit of a source line
///
/// `value` holds the matched text. It is upper-cased for everything
/// except string literals, which keep their contents verbatim without
/// the surrounding quotes.

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: Kind,
    pub value: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: Kind, value: &str, line: usize) -> Token {
        let value = match kind {
            Kind::String => value.to_string(),
            _ => value.to_ascii_uppercase(),
        };
        Token { kind, value, line }
    }

    pub fn skip(line: usize) -> Token {
        Token {
            kind: Kind::Skip,
            value: String::new(),
            line,
        }
    }

    /// True for tokens that occupy a line without doing anything.
    pub fn is_inert(&self) -> bool {
        matches!(self.kind, Kind::Label | Kind::Skip)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            Kind::String => write!(f, "\"{}\"", self.value),
            _ => write!(f, "{}", self.value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Opcode(Opcode),
    Register(Register),
    Push,
    Pop,
    Top,
    Void,
    Memory,
    Address,
    Input,
    Output,
    Random,
    String,
    Number,
    Label,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Teq,
    Tne,
    Tgt,
    Tge,
    Tlt,
    Tle,
    Teqs,
    Tnes,
    Tgts,
    Tges,
    Tlts,
    Tles,
    Tnum,
    Num,
    Str,
    Jump,
    Jrl,
    Jsr,
    Ret,
    Cat,
    Slc,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Mov,
    Pow,
    Log,
    Floor,
    Ceil,
    Min,
    Max,
    Len,
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Teq => write!(f, "TEQ"),
            Tne => write!(f, "TNE"),
            Tgt => write!(f, "TGT"),
            Tge => write!(f, "TGE"),
            Tlt => write!(f, "TLT"),
            Tle => write!(f, "TLE"),
            Teqs => write!(f, "TEQS"),
            Tnes => write!(f, "TNES"),
            Tgts => write!(f, "TGTS"),
            Tges => write!(f, "TGES"),
            Tlts => write!(f, "TLTS"),
            Tles => write!(f, "TLES"),
            Tnum => write!(f, "TNUM"),
            Num => write!(f, "NUM"),
            Str => write!(f, "STR"),
            Jump => write!(f, "JUMP"),
            Jrl => write!(f, "JRL"),
            Jsr => write!(f, "JSR"),
            Ret => write!(f, "RET"),
            Cat => write!(f, "CAT"),
            Slc => write!(f, "SLC"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Mod => write!(f, "MOD"),
            Mov => write!(f, "MOV"),
            Pow => write!(f, "POW"),
            Log => write!(f, "LOG"),
            Floor => write!(f, "FLOOR"),
            Ceil => write!(f, "CEIL"),
            Min => write!(f, "MIN"),
            Max => write!(f, "MAX"),
            Len => write!(f, "LEN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Acc,
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
}

impl Register {
    pub const ALL: [Register; 11] = [
        Register::Acc,
        Register::R0,
        Register::R1,
        Register::R2,
        Register::R3,
        Register::R4,
        Register::R5,
        Register::R6,
        Register::R7,
        Register::R8,
        Register::R9,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Register::Acc => write!(f, "ACC"),
            r => write!(f, "R{}", r.index() - 1),
        }
    }
}
