use super::operand::Flow;
use super::{Runtime, Val};
use crate::error;
use crate::lang::token::{Kind, Opcode, Register, Token};
use crate::lang::Line;
use crate::mach::Operation;

impl Runtime {
    /// Runs one line. Every operand is read before any state changes so
    /// an instruction suspended on `IN` can be run again from the top.
    pub(super) fn execute(&mut self, line: &Line) -> Flow<()> {
        let head = line.head();
        let opcode = match head.kind {
            Kind::Opcode(opcode) => opcode,
            Kind::Label | Kind::Skip => return Ok(()),
            _ => return Err(error!(UnknownInstruction; &head.to_string()).into()),
        };
        let (a, b) = (line.operand(0), line.operand(1));
        match opcode {
            Opcode::Teq => self.test_number(a, b, |a, b| a == b),
            Opcode::Tne => self.test_number(a, b, |a, b| a != b),
            Opcode::Tgt => self.test_number(a, b, |a, b| a > b),
            Opcode::Tge => self.test_number(a, b, |a, b| a >= b),
            Opcode::Tlt => self.test_number(a, b, |a, b| a < b),
            Opcode::Tle => self.test_number(a, b, |a, b| a <= b),
            Opcode::Teqs => self.test_text(a, b, |a, b| a == b),
            Opcode::Tnes => self.test_text(a, b, |a, b| a != b),
            Opcode::Tgts => self.test_text(a, b, |a, b| a > b),
            Opcode::Tges => self.test_text(a, b, |a, b| a >= b),
            Opcode::Tlts => self.test_text(a, b, |a, b| a < b),
            Opcode::Tles => self.test_text(a, b, |a, b| a <= b),
            Opcode::Tnum => {
                if !self.read(a)?.is_number() {
                    self.skip_next();
                }
                Ok(())
            }
            Opcode::Num => {
                let n = self.read_number(a)?;
                self.accumulate(Val::Number(n))
            }
            Opcode::Str => {
                let s = self.read(a)?.to_string();
                self.accumulate(Val::Text(s))
            }
            Opcode::Jump => {
                let target = self.target(a)?;
                self.jump(target);
                Ok(())
            }
            Opcode::Jrl => {
                let offset = self.read_number(a)?.floor();
                self.jump(self.context.pc as f64 + offset - 1.0);
                Ok(())
            }
            Opcode::Jsr => {
                let target = self.target(a)?;
                let pc = self.context.pc;
                self.context.calls.push(pc)?;
                self.jump(target);
                Ok(())
            }
            Opcode::Ret => {
                self.context.pc = self.context.calls.pop()?;
                Ok(())
            }
            Opcode::Cat => {
                let lhs = self.read(a)?;
                let rhs = self.read(b)?;
                self.accumulate(Val::Text(format!("{}{}", lhs, rhs)))
            }
            Opcode::Slc => {
                let start = self.read_number(a)?;
                let end = self.read_number(b)?;
                let text = self.registers.acc().to_string();
                self.accumulate(Val::Text(Operation::slice(&text, start, end)))
            }
            Opcode::Add => self.binary(a, b, Operation::add),
            Opcode::Sub => self.binary(a, b, Operation::subtract),
            Opcode::Mul => self.binary(a, b, Operation::multiply),
            Opcode::Div => self.binary(a, b, Operation::divide),
            Opcode::Mod => self.binary(a, b, Operation::modulus),
            Opcode::Pow => self.binary(a, b, Operation::power),
            Opcode::Min => self.binary(a, b, Operation::min),
            Opcode::Max => self.binary(a, b, Operation::max),
            Opcode::Log => self.unary(a, Operation::log),
            Opcode::Floor => self.unary(a, Operation::floor),
            Opcode::Ceil => self.unary(a, Operation::ceil),
            Opcode::Len => {
                let text = self.read(a)?.to_string();
                self.accumulate(Val::Number(Operation::length(&text)))
            }
            Opcode::Mov => {
                let val = self.read(a)?;
                self.write(b, val)
            }
        }
    }

    fn accumulate(&mut self, val: Val) -> Flow<()> {
        self.registers.set(Register::Acc, val);
        Ok(())
    }

    fn unary(&mut self, a: Option<&Token>, op: fn(f64) -> f64) -> Flow<()> {
        let n = self.read_number(a)?;
        self.accumulate(Val::Number(op(n)))
    }

    fn binary(&mut self, a: Option<&Token>, b: Option<&Token>, op: fn(f64, f64) -> f64) -> Flow<()> {
        let lhs = self.read_number(a)?;
        let rhs = self.read_number(b)?;
        self.accumulate(Val::Number(op(lhs, rhs)))
    }

    fn test_number(&mut self, a: Option<&Token>, b: Option<&Token>, test: fn(f64, f64) -> bool) -> Flow<()> {
        let lhs = self.read_number(a)?;
        let rhs = self.read_number(b)?;
        if !test(lhs, rhs) {
            self.skip_next();
        }
        Ok(())
    }

    fn test_text(&mut self, a: Option<&Token>, b: Option<&Token>, test: fn(&str, &str) -> bool) -> Flow<()> {
        let lhs = self.read(a)?.to_string();
        let rhs = self.read(b)?.to_string();
        if !test(&lhs, &rhs) {
            self.skip_next();
        }
        Ok(())
    }

    /// The program counter a jump sets so the following advance lands on
    /// the target: the label's own line, or one before a numbered line.
    fn target(&mut self, token: Option<&Token>) -> Flow<f64> {
        match token {
            Some(token) if token.kind == Kind::Label => match self.labels.get(&token.value) {
                Some(index) => Ok(index as f64),
                None => Err(error!(UndefinedLabel; &token.value).into()),
            },
            _ => Ok(self.read_number(token)?.floor() - 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::io::{Discard, Pending};
    use crate::mach::Event;

    fn run(source: &str, steps: usize) -> Runtime {
        let mut r = Runtime::new(source, Pending, Discard).unwrap();
        for _ in 0..steps {
            r.step().unwrap();
        }
        r
    }

    fn acc(r: &Runtime) -> Val {
        r.registers().acc().clone()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(acc(&run("sub 10 4", 1)), Val::from(6.0));
        assert_eq!(acc(&run("mod -7 3", 1)), Val::from(-1.0));
        assert_eq!(acc(&run("pow 2 10", 1)), Val::from(1024.0));
        assert_eq!(acc(&run("max 2 '9'", 1)), Val::from(9.0));
        assert_eq!(acc(&run("floor -1.5", 1)), Val::from(-2.0));
        assert_eq!(acc(&run("ceil 1.2", 1)), Val::from(2.0));
        assert_eq!(acc(&run("log 1", 1)), Val::from(0.0));
    }

    #[test]
    fn test_text() {
        assert_eq!(acc(&run("cat 'a' 1", 1)), Val::from("a1"));
        assert_eq!(acc(&run("len 'héllo'", 1)), Val::from(5.0));
        assert_eq!(acc(&run("str 12", 1)), Val::from("12"));
        assert_eq!(acc(&run("num '12abc'", 1)), Val::from(12.0));
        assert_eq!(acc(&run("mov 'Hello' acc\nslc 1 -1", 2)), Val::from("ell"));
    }

    #[test]
    fn test_text_compare() {
        let r = run("tgts 'b' 'a'\nmov 1 r0\nmov 2 r1", 2);
        assert_eq!(r.registers()[Register::R0], Val::from(1.0));
        let r = run("teqs 1 '1'\nmov 1 r0\nmov 2 r1", 2);
        assert_eq!(r.registers()[Register::R0], Val::from(1.0));
        let r = run("tlts 'b' 'a'\nmov 1 r0\nmov 2 r1", 2);
        assert_eq!(r.registers()[Register::R0], Val::from(0.0));
        assert_eq!(r.registers()[Register::R1], Val::from(2.0));
    }

    #[test]
    fn test_tnum() {
        let r = run("tnum 'x'\nmov 1 r0\nmov 2 r1", 2);
        assert_eq!(r.registers()[Register::R0], Val::from(0.0));
        let r = run("tnum '3'\nmov 1 r0\nmov 2 r1", 2);
        assert_eq!(r.registers()[Register::R0], Val::from(1.0));
    }

    #[test]
    fn test_numeric_jumps() {
        let r = run("jump 3\nmov 1 r0\nmov 2 r1\nmov 3 r2", 1);
        assert_eq!(r.pc(), 3);
        let r = run("add 1 1\njrl -1\nmov 1 r0", 2);
        assert_eq!(r.pc(), 0);
        let r = run("jump 1.9\nmov 1 r0", 1);
        assert_eq!(r.pc(), 1);
    }

    #[test]
    fn test_huge_jump_targets_wrap() {
        let mut r = Runtime::new("jump -99999999999999999999\nadd 1 1", Pending, Discard).unwrap();
        assert_eq!(r.step(), Ok(Event::Stepped));
        assert_eq!(r.pc(), 1);
        let mut r = Runtime::new("add 1 1\njrl 99999999999999999999", Pending, Discard).unwrap();
        r.step().unwrap();
        assert_eq!(r.step(), Ok(Event::Stepped));
        assert_eq!(r.pc(), 1);
    }

    #[test]
    fn test_jump_zero_and_negative_wrap() {
        let r = run("add 1 1\nmov 1 r0\njump 0", 3);
        assert_eq!(r.pc(), 0);
        let r = run("add 1 1\njump -1\nmov 1 r0", 2);
        assert_eq!(r.pc(), 2);
    }

    #[test]
    fn test_subroutine_by_line_number() {
        let r = run("jsr 3\nmov 1 r0\njump 2\nmov 9 r1\nret", 1);
        assert_eq!(r.pc(), 3);
        assert_eq!(r.context().calls().last(), Some(&0));
        let r = run("jsr 3\nmov 1 r0\njump 2\nmov 9 r1\nret", 3);
        assert_eq!(r.pc(), 1);
        assert!(r.context().calls().is_empty());
        assert_eq!(r.registers()[Register::R1], Val::from(9.0));
    }

    #[test]
    fn test_void_discards() {
        let r = run("mov 5 void\nmov 'x' void", 2);
        assert_eq!(acc(&r), Val::from(0.0));
        assert!(r.memory().stack().is_empty());
        assert!(r.memory().cells().is_empty());
    }

    #[test]
    fn test_alias_spellings() {
        assert_eq!(acc(&run("mult 2 3", 1)), Val::from(6.0));
        assert_eq!(acc(&run("mul 2 3", 1)), Val::from(6.0));
        assert_eq!(acc(&run("flr 2.7", 1)), Val::from(2.0));
        assert_eq!(acc(&run("power 2 3", 1)), Val::from(8.0));
        assert_eq!(acc(&run("move 4 acc", 1)), Val::from(4.0));
        assert_eq!(run("jmp 2\nmov 1 r0\nmov 2 r1", 1).pc(), 2);
        assert_eq!(run("jrel 2\nmov 1 r0\nmov 2 r1", 1).pc(), 2);
        let r = run("jsr @sub\nmov 1 r0\n@sub\nrsr", 2);
        assert_eq!(r.pc(), 1);
        assert!(r.context().calls().is_empty());
    }

    #[test]
    fn test_memory_operands() {
        let r = run("mov 5 addr\nmov 'x' mem\nmov addr r0\nmov mem r1", 4);
        assert_eq!(r.registers()[Register::R0], Val::from(5.0));
        assert_eq!(r.registers()[Register::R1], Val::from("x"));
        assert_eq!(r.memory().cells().len(), 6);
    }

    #[test]
    fn test_errors() {
        let mut r = Runtime::new("push 1", Pending, Discard).unwrap();
        let e = r.step().unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownInstruction);
        let mut r = Runtime::new("add 'x' 1", Pending, Discard).unwrap();
        assert_eq!(r.step().unwrap_err().code(), ErrorCode::NotANumber);
        let mut r = Runtime::new("jump @nowhere", Pending, Discard).unwrap();
        assert_eq!(r.step().unwrap_err().code(), ErrorCode::UndefinedLabel);
        let mut r = Runtime::new("mov 1.5 addr", Pending, Discard).unwrap();
        assert_eq!(r.step().unwrap_err().code(), ErrorCode::IntegerExpected);
        let mut r = Runtime::new("mov 1 2", Pending, Discard).unwrap();
        assert_eq!(r.step().unwrap_err().code(), ErrorCode::InvalidDestination);
    }
}
