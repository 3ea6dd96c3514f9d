/*!
## Rust Machine Module

This Rust module is the virtual machine that steps through a lexed
program one instruction at a time.

*/

mod context;
mod memory;
mod operation;
mod register;
mod runtime;
mod stack;
mod val;

pub mod io;

pub use context::Context;
pub use context::Status;
pub use memory::Memory;
pub use memory::MAX_CELLS;
pub use operation::Operation;
pub use register::Registers;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
