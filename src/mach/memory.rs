use super::{Stack, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub const MAX_CELLS: usize = 0x10000;

/// ## Addressable memory and value stack
///
/// Cells grow on demand as they are written. A cell that was never
/// written reads as the number zero. `ADDR` may point anywhere, but
/// storing beyond [`MAX_CELLS`] is an error.

#[derive(Debug, Clone)]
pub struct Memory {
    cells: Vec<Val>,
    address: usize,
    stack: Stack<Val>,
}

impl Default for Memory {
    fn default() -> Self {
        Memory {
            cells: vec![],
            address: 0,
            stack: Stack::new("VALUE STACK"),
        }
    }
}

impl Memory {
    pub fn address(&self) -> usize {
        self.address
    }

    pub fn set_address(&mut self, address: usize) {
        self.address = address;
    }

    pub fn fetch(&self) -> Val {
        self.cells.get(self.address).cloned().unwrap_or_default()
    }

    pub fn store(&mut self, val: Val) -> Result<()> {
        if self.address >= MAX_CELLS {
            return Err(error!(OutOfMemory; &format!("ADDRESS {} OUT OF RANGE", self.address)));
        }
        if self.address >= self.cells.len() {
            self.cells.resize(self.address + 1, Val::default());
        }
        self.cells[self.address] = val;
        Ok(())
    }

    /// Cells written so far, including zero-filled gaps.
    pub fn cells(&self) -> &[Val] {
        &self.cells
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack<Val> {
        &mut self.stack
    }
}
