use super::{Runtime, Status, Val};
use crate::error;
use crate::lang::token::{Kind, Token};
use crate::lang::Error;
use rand::Rng;

/// Why an instruction stopped before completing.
#[derive(Debug)]
pub(super) enum Interrupt {
    /// An `IN` read has no value yet.
    Input,
    Error(Error),
}

impl From<Error> for Interrupt {
    fn from(error: Error) -> Self {
        Interrupt::Error(error)
    }
}

pub(super) type Flow<T> = std::result::Result<T, Interrupt>;

impl Runtime {
    /// Resolves a source operand. Values resolved before a suspension
    /// are replayed in order so `POP`, `RAND` and `IN` take effect once.
    pub(super) fn read(&mut self, token: Option<&Token>) -> Flow<Val> {
        if let Some(val) = self.context.replay() {
            return Ok(val);
        }
        let val = self.resolve(token)?;
        self.context.record(val.clone());
        Ok(val)
    }

    pub(super) fn read_number(&mut self, token: Option<&Token>) -> Flow<f64> {
        Ok(self.read(token)?.to_number()?)
    }

    fn resolve(&mut self, token: Option<&Token>) -> Flow<Val> {
        let token = match token {
            Some(token) => token,
            None => return Err(error!(InvalidSource; "MISSING OPERAND").into()),
        };
        let val = match token.kind {
            Kind::Input => {
                self.context.status = Status::Waiting;
                match self.input.request() {
                    Some(val) => {
                        self.context.status = Status::Ready;
                        val
                    }
                    None => return Err(Interrupt::Input),
                }
            }
            Kind::Random => Val::Number(self.rng.gen::<f64>()),
            Kind::Register(register) => self.registers.get(register).clone(),
            Kind::Pop => self.memory.stack_mut().pop()?,
            Kind::Top => self.memory.stack().top()?.clone(),
            Kind::Memory => self.memory.fetch(),
            Kind::Address => Val::Number(self.memory.address() as f64),
            Kind::String => Val::Text(token.value.clone()),
            Kind::Number => match token.value.parse::<f64>() {
                Ok(n) => Val::Number(n),
                Err(_) => return Err(error!(NotANumber; &token.value).into()),
            },
            _ => return Err(error!(InvalidSource; &token.to_string()).into()),
        };
        Ok(val)
    }

    /// Stores into a destination operand.
    pub(super) fn write(&mut self, token: Option<&Token>, val: Val) -> Flow<()> {
        let token = match token {
            Some(token) => token,
            None => return Err(error!(InvalidDestination; "MISSING OPERAND").into()),
        };
        match token.kind {
            Kind::Output => self.output.write(val),
            Kind::Register(register) => self.registers.set(register, val),
            Kind::Address => {
                let address = val.to_address()?;
                self.memory.set_address(address);
            }
            Kind::Memory => self.memory.store(val)?,
            Kind::Push => self.memory.stack_mut().push(val)?,
            Kind::Void => {}
            _ => return Err(error!(InvalidDestination; &token.to_string()).into()),
        }
        Ok(())
    }
}
