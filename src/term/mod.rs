use crate::Args;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use sasm::mach::io::Pending;
use sasm::mach::{Event, Runtime, Val};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main(args: &Args) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        log::warn!("Ctrl-C handler not installed: {}", error);
    }
    match main_loop(args, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let source = std::fs::read_to_string(&args.file)?;
    let interface = Arc::new(Interface::new("sasm")?);
    interface.set_prompt("IN> ")?;
    let console = Arc::clone(&interface);
    let output = move |val: Val| {
        if let Err(error) = console.write_fmt(format_args!("{}\n", val)) {
            log::error!("output failed: {}", error);
        }
    };
    let mut runtime = match Runtime::new(&source, Pending, output) {
        Ok(runtime) => runtime,
        Err(error) => return report(&interface, &error.to_string()),
    };
    if let Some(seed) = args.seed {
        runtime.seed(seed);
    }

    let mut steps = 0;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            log::info!("interrupted at line {}", runtime.pc());
            return Ok(130);
        }
        if let Some(limit) = args.steps {
            if steps >= limit {
                log::info!("stopped after {} steps", steps);
                return Ok(0);
            }
        }
        let mut event = runtime.step();
        while let Ok(Event::Input) = event {
            let val = match interface.read_line()? {
                ReadResult::Input(string) => parse_input(&string),
                ReadResult::Signal(_) | ReadResult::Eof => return Ok(0),
            };
            event = runtime.enter(val);
        }
        if let Err(error) = event {
            return report(&interface, &error.to_string());
        }
        steps += 1;
    }
}

fn report(interface: &Interface<DefaultTerminal>, message: &str) -> std::io::Result<i32> {
    interface.write_fmt(format_args!("{}\n", Style::new().bold().paint(message)))?;
    Ok(1)
}

/// A line that reads as a finite number is entered as one, anything
/// else as text.
fn parse_input(line: &str) -> Val {
    match line.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Val::Number(n),
        _ => Val::Text(line.to_string()),
    }
}

