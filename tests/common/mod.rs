#![allow(dead_code)]
use sasm::lang::Error;
use sasm::mach::{Event, Runtime, Val};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub type Queue = Rc<RefCell<VecDeque<Val>>>;
pub type Printed = Rc<RefCell<Vec<Val>>>;

/// A runtime whose `IN` reads from a queue and whose `OUT` collects
/// into a list. An empty queue suspends the reading instruction.
pub fn runtime(source: &str) -> (Runtime, Queue, Printed) {
    let queue: Queue = Rc::default();
    let printed: Printed = Rc::default();
    let input = {
        let queue = Rc::clone(&queue);
        move || queue.borrow_mut().pop_front()
    };
    let output = {
        let printed = Rc::clone(&printed);
        move |val: Val| printed.borrow_mut().push(val)
    };
    let runtime = Runtime::new(source, input, output).unwrap();
    (runtime, queue, printed)
}

/// Steps up to `steps` times, stopping early on anything but
/// [`Event::Stepped`].
pub fn exec_n(runtime: &mut Runtime, steps: usize) -> Result<Event, Error> {
    for _ in 0..steps {
        match runtime.step()? {
            Event::Stepped => {}
            event => return Ok(event),
        }
    }
    Ok(Event::Stepped)
}

pub fn text(printed: &Printed) -> Vec<String> {
    printed.borrow().iter().map(|v| v.to_string()).collect()
}
