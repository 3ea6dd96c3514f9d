use super::Val;
use crate::lang::token::Register;

/// ## Register file
///
/// `ACC` and `R0` through `R9`, each starting as the number zero.

#[derive(Debug, Clone, Default)]
pub struct Registers {
    cells: [Val; 11],
}

impl Registers {
    pub fn get(&self, register: Register) -> &Val {
        &self.cells[register.index()]
    }

    pub fn set(&mut self, register: Register, val: Val) {
        self.cells[register.index()] = val;
    }

    pub fn acc(&self) -> &Val {
        self.get(Register::Acc)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Register, &Val)> {
        Register::ALL.iter().copied().zip(self.cells.iter())
    }
}

impl std::ops::Index<Register> for Registers {
    type Output = Val;
    fn index(&self, register: Register) -> &Val {
        self.get(register)
    }
}
