use super::io::{Input, Output};
use super::{Context, Memory, Registers, Status, Val};
use crate::error;
use crate::lang::{lex, Error, Labels, Program};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

mod dispatch;
mod operand;

type Result<T> = std::result::Result<T, Error>;

/// ## Outcome of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One instruction ran to completion and the program counter moved on.
    Stepped,
    /// The instruction is suspended waiting for a value from `IN`.
    /// Hand it over with [`Runtime::enter`].
    Input,
    /// Still waiting for input; nothing was executed.
    Waiting,
}

/// ## Virtual machine
///
/// Owns the program, the label table and all machine state. Nothing
/// runs until the caller invokes [`step`](Runtime::step), which executes
/// at most one instruction.
///
/// ```
/// use sasm::mach::io::{Discard, Pending};
/// use sasm::mach::{Event, Runtime, Val};
///
/// let mut runtime = Runtime::new("add 2 3\nmult acc 10", Pending, Discard).unwrap();
/// assert_eq!(runtime.step(), Ok(Event::Stepped));
/// assert_eq!(runtime.step(), Ok(Event::Stepped));
/// assert_eq!(runtime.registers().acc(), &Val::Number(50.0));
/// ```
pub struct Runtime {
    program: Rc<Program>,
    labels: Labels,
    registers: Registers,
    memory: Memory,
    context: Context,
    input: Box<dyn Input>,
    output: Box<dyn Output>,
    rng: StdRng,
}

impl Runtime {
    pub fn new<I, O>(source: &str, input: I, output: O) -> Result<Runtime>
    where
        I: Input + 'static,
        O: Output + 'static,
    {
        Runtime::boot(source, input, output, |_| {})
    }

    /// Like [`new`](Runtime::new) but hands the freshly loaded runtime to
    /// `on_load` before any instruction executes.
    pub fn boot<I, O, F>(source: &str, input: I, output: O, on_load: F) -> Result<Runtime>
    where
        I: Input + 'static,
        O: Output + 'static,
        F: FnOnce(&mut Runtime),
    {
        let (program, labels) = lex(source)?;
        log::debug!(
            "loaded {} lines with {} labels",
            program.len(),
            labels.len()
        );
        let mut runtime = Runtime {
            program: Rc::new(program),
            labels,
            registers: Registers::default(),
            memory: Memory::default(),
            context: Context::default(),
            input: Box::new(input),
            output: Box::new(output),
            rng: StdRng::from_entropy(),
        };
        on_load(&mut runtime);
        Ok(runtime)
    }

    /// Makes `RAND` reproducible.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn status(&self) -> Status {
        self.context.status
    }

    pub fn pc(&self) -> usize {
        self.context.pc
    }

    /// Executes the instruction at the program counter.
    ///
    /// Errors carry the line they happened on. State changed before the
    /// failure stays changed and the program counter does not move.
    pub fn step(&mut self) -> Result<Event> {
        match self.context.status {
            Status::Waiting => Ok(Event::Waiting),
            Status::Ready => self.dispatch(),
        }
    }

    /// Supplies the value a suspended `IN` read is waiting for and
    /// finishes the suspended instruction.
    pub fn enter(&mut self, val: Val) -> Result<Event> {
        if self.context.status != Status::Waiting {
            return Err(error!(NoPendingInput, self.context.pc));
        }
        log::debug!("line {} resumed with {:?}", self.context.pc, val);
        self.context.status = Status::Ready;
        self.context.resolved.push(val);
        self.dispatch()
    }

    fn dispatch(&mut self) -> Result<Event> {
        let pc = self.context.pc;
        let program = Rc::clone(&self.program);
        let line = &program[pc];
        log::trace!("{:>4} {}", pc, line);
        self.context.cursor = 0;
        match self.execute(line) {
            Ok(()) => {
                self.context.settle();
                self.advance();
                Ok(Event::Stepped)
            }
            Err(operand::Interrupt::Input) => {
                log::debug!("line {} waiting for input", pc);
                Ok(Event::Input)
            }
            Err(operand::Interrupt::Error(error)) => {
                self.context.settle();
                Err(error.in_line(pc))
            }
        }
    }

    /// Moves to the next line, then past label and skip lines. Gives up
    /// after one lap when no line is executable.
    fn advance(&mut self) {
        let len = self.program.len();
        self.context.pc = (self.context.pc + 1) % len;
        let mut count = 0;
        while self.program[self.context.pc].is_inert() && count < len {
            self.context.pc = (self.context.pc + 1) % len;
            count += 1;
        }
    }

    /// Sets the program counter so the advance after this instruction
    /// lands on `position`, wrapping around the program in either direction.
    fn jump(&mut self, position: f64) {
        let len = self.program.len();
        self.context.pc = position.rem_euclid(len as f64) as usize % len;
    }

    /// Makes the advance after this instruction pass over the next line.
    fn skip_next(&mut self) {
        self.context.pc = (self.context.pc + 1) % self.program.len();
    }
}
