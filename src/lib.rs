//! # SASM
//!
//! A line-oriented assembly language running on a small register and
//! stack machine.
//!
//! The machine is driven one instruction at a time. Nothing runs until
//! the caller asks for a step, so the caller decides whether to run
//! forever, for a number of steps or until some condition holds.
//! ```
//! use sasm::mach::{io::Pending, Runtime, Val};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let printed = Rc::new(RefCell::new(vec![]));
//! let sink = Rc::clone(&printed);
//! let output = move |val: Val| sink.borrow_mut().push(val.to_string());
//! let mut runtime = Runtime::new("mov 'Hello' out", Pending, output).unwrap();
//! runtime.step().unwrap();
//! assert_eq!(printed.borrow().as_slice(), ["Hello"]);
//! ```
//!
//! The command line runner executes a file on the console:
//! `sasm program.sasm --steps 1000`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
