use super::token::*;

/// One program line: an opcode followed by up to two operands, a lone
/// label, or a single skip token for blank and comment-only text.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(tokens: Vec<Token>) -> Line {
        debug_assert!(!tokens.is_empty());
        Line { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn head(&self) -> &Token {
        &self.tokens[0]
    }

    /// Operand by position, counting from zero after the opcode.
    pub fn operand(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index + 1)
    }

    pub fn label(&self) -> Option<&Token> {
        match self.tokens.as_slice() {
            [token] if token.kind == Kind::Label => Some(token),
            _ => None,
        }
    }

    /// Label and skip lines are stepped over, never executed.
    pub fn is_inert(&self) -> bool {
        self.head().is_inert()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}
