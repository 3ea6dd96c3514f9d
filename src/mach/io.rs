//! # External input and output
//! Reading the `IN` operand asks an [`Input`] for a value. An input that
//! has nothing yet returns `None`, which suspends the instruction until
//! the value is handed over with [`Runtime::enter`](super::Runtime::enter).
//! Writing to `OUT` hands the value to an [`Output`].

use super::Val;

pub trait Input {
    fn request(&mut self) -> Option<Val>;
}

pub trait Output {
    fn write(&mut self, val: Val);
}

impl<F: FnMut() -> Option<Val>> Input for F {
    fn request(&mut self) -> Option<Val> {
        self()
    }
}

impl<F: FnMut(Val)> Output for F {
    fn write(&mut self, val: Val) {
        self(val)
    }
}

/// Input that always suspends; values arrive through `Runtime::enter`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pending;

impl Input for Pending {
    fn request(&mut self) -> Option<Val> {
        None
    }
}

/// Output that drops every value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Output for Discard {
    fn write(&mut self, _val: Val) {}
}
