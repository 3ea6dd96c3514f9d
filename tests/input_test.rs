mod common;
use common::*;
use sasm::lang::token::Register;
use sasm::lang::ErrorCode;
use sasm::mach::{Event, Status, Val};

#[test]
fn test_queued_input_does_not_suspend() {
    let (mut r, queue, printed) = runtime("mov in r0\nmov r0 out");
    queue.borrow_mut().push_back(Val::from("hello"));
    assert_eq!(exec_n(&mut r, 2), Ok(Event::Stepped));
    assert_eq!(text(&printed), vec!["hello"]);
}

#[test]
fn test_suspend_and_resume() {
    let (mut r, _, printed) = runtime("add 1 1\nmov in r0\nmov r0 out");
    assert_eq!(r.step(), Ok(Event::Stepped));
    assert_eq!(r.step(), Ok(Event::Input));
    assert_eq!(r.status(), Status::Waiting);
    assert_eq!(r.pc(), 1);
    assert_eq!(r.step(), Ok(Event::Waiting));
    assert_eq!(r.step(), Ok(Event::Waiting));
    assert_eq!(r.pc(), 1);
    assert_eq!(r.enter(Val::from(5.0)), Ok(Event::Stepped));
    assert_eq!(r.status(), Status::Ready);
    assert_eq!(r.pc(), 2);
    assert_eq!(r.registers()[Register::R0], Val::Number(5.0));
    r.step().unwrap();
    assert_eq!(text(&printed), vec!["5"]);
}

#[test]
fn test_resume_does_not_repeat_earlier_operands() {
    let (mut r, _, _) = runtime("mov 'a' push\nmov 'b' push\ncat pop in");
    exec_n(&mut r, 2).unwrap();
    assert_eq!(r.step(), Ok(Event::Input));
    assert_eq!(r.memory().stack().len(), 1);
    assert_eq!(r.enter(Val::from("!")), Ok(Event::Stepped));
    assert_eq!(r.registers().acc(), &Val::from("b!"));
    assert_eq!(r.memory().stack().len(), 1);
}

#[test]
fn test_two_inputs_in_one_instruction() {
    let (mut r, _, _) = runtime("add in in");
    assert_eq!(r.step(), Ok(Event::Input));
    assert_eq!(r.enter(Val::from(2.0)), Ok(Event::Input));
    assert_eq!(r.registers().acc(), &Val::Number(0.0));
    assert_eq!(r.enter(Val::from("3")), Ok(Event::Stepped));
    assert_eq!(r.registers().acc(), &Val::Number(5.0));
}

#[test]
fn test_bad_input_fails_the_instruction() {
    let (mut r, _, _) = runtime("add 1 1\nadd in 1");
    r.step().unwrap();
    assert_eq!(r.step(), Ok(Event::Input));
    let e = r.enter(Val::from("seven")).unwrap_err();
    assert_eq!(e.code(), ErrorCode::NotANumber);
    assert_eq!(e.line(), Some(1));
    assert_eq!(r.status(), Status::Ready);
    assert_eq!(r.pc(), 1);
    assert_eq!(r.step(), Ok(Event::Input));
}

#[test]
fn test_enter_while_ready() {
    let (mut r, _, _) = runtime("add 1 1");
    let e = r.enter(Val::from(1.0)).unwrap_err();
    assert_eq!(e.code(), ErrorCode::NoPendingInput);
}
