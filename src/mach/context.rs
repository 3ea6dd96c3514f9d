use super::{Stack, Val};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Waiting,
}

/// ## Execution context
///
/// The program counter, the call-return stack and the status.
/// While an instruction is suspended on input, the operand values it
/// already resolved are kept here so the instruction can be completed
/// without resolving them a second time.

#[derive(Debug, Clone)]
pub struct Context {
    pub(super) pc: usize,
    pub(super) calls: Stack<usize>,
    pub(super) status: Status,
    pub(super) resolved: Vec<Val>,
    pub(super) cursor: usize,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            pc: 0,
            calls: Stack::new("CALL STACK"),
            status: Status::Ready,
            resolved: vec![],
            cursor: 0,
        }
    }
}

impl Context {
    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn calls(&self) -> &Stack<usize> {
        &self.calls
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Replays the next value resolved before a suspension, if any.
    pub(super) fn replay(&mut self) -> Option<Val> {
        let val = self.resolved.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(val)
    }

    pub(super) fn record(&mut self, val: Val) {
        self.resolved.push(val);
        self.cursor += 1;
    }

    /// Forgets operand progress once an instruction finishes or fails.
    pub(super) fn settle(&mut self) {
        self.resolved.clear();
        self.cursor = 0;
    }
}
