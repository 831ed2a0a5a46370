//! Console conformance runner.
//!
//! Lists the built-in tests, runs the selected one against a simulated
//! throttle, and maps console input to operator actions:
//!
//! - `n` Next, `p` Prev, `d` Done, `x` Exit
//! - `v <first> <mid> <last>` fills the address prompt (once per run)
//!
//! Run with: `cargo run --example console_runner -- [session.toml]`
//! Set `RUST_LOG=dcs_conformance=debug` to see runner traces.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, OnceLock};
use std::thread;

use dcs_conformance::runner::{OperatorHandle, ValuePrompt};
use dcs_conformance::{
    load_config, operator_channel, AcquisitionError, Action, ActuatorController, Result,
    SessionConfig, StatusSink, StepMode, TestRegistry, TestRunner,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Throttle that accepts any valid DCC address and logs what it is told.
struct SimulatedThrottle {
    address: u16,
}

impl ActuatorController for SimulatedThrottle {
    fn acquire(&mut self, address: u16, long: bool) -> core::result::Result<(), AcquisitionError> {
        if !dcs_conformance::config::address_in_range(address, long) {
            return Err(AcquisitionError { address, long });
        }
        self.address = address;
        tracing::info!(address, long, "throttle acquired");
        Ok(())
    }

    fn set_step_mode(&mut self, mode: StepMode) {
        tracing::info!(address = self.address, steps = mode.steps(), "step mode");
    }

    fn set_direction(&mut self, forward: bool) {
        tracing::info!(address = self.address, forward, "direction");
    }

    fn set_speed_setting(&mut self, value: f32) {
        tracing::info!(address = self.address, value, "speed setting");
    }
}

/// Status panel printing to stdout.
struct ConsolePanel {
    entered: Arc<OnceLock<[String; 3]>>,
}

impl StatusSink for ConsolePanel {
    fn status(&mut self, text: &str) {
        println!("> {}", text);
    }

    fn show_prompt(&mut self, prompt: &ValuePrompt<'_>) {
        println!("{}", prompt.info);
        for field in &prompt.fields {
            println!("  {} [{}]", field.label, field.default);
        }
        println!("  (enter `v <first> <mid> <last>`, then `d`)");
    }

    fn entered_value(&self, slot: usize) -> Option<&str> {
        self.entered.get()?.get(slot).map(String::as_str)
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(path)?,
        None => SessionConfig::default(),
    };

    let runner = Arc::new(TestRunner::from_config(TestRegistry::standard()?, &config));

    println!("=== DCS Conformance Tests ===\n");
    let names: Vec<String> = runner.registry().list().map(String::from).collect();
    for (i, name) in names.iter().enumerate() {
        println!("{:2}. {}", i + 1, name);
    }
    print!("\nSelect a test: ");
    let _ = io::stdout().flush();

    let selected = io::stdin()
        .lock()
        .lines()
        .next()
        .and_then(|line| line.ok())
        .and_then(|line| line.trim().parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| names.get(i).cloned());

    let Some(name) = selected else {
        println!("No test selected.");
        return Ok(());
    };

    let (handle, mut actions) = operator_channel();
    let entered = Arc::new(OnceLock::new());

    let worker = {
        let runner = Arc::clone(&runner);
        let entered = Arc::clone(&entered);
        thread::spawn(move || {
            let mut throttle = SimulatedThrottle { address: 0 };
            let mut panel = ConsolePanel { entered };
            runner.run_test(&name, &mut throttle, &mut actions, &mut panel)
        })
    };

    // Detached; when stdin closes the handle drops and a pending wait sees Abort.
    {
        let runner = Arc::clone(&runner);
        thread::spawn(move || read_commands(&runner, &handle, &entered));
    }

    match worker.join() {
        Ok(result) => {
            let report = result?;
            println!(
                "\n{}: {:?} after {} action(s)",
                report.name, report.outcome, report.actions
            );
        }
        Err(_) => println!("Runner thread panicked."),
    }

    Ok(())
}

/// Map console lines to operator actions until stdin closes.
fn read_commands(runner: &TestRunner, handle: &OperatorHandle, entered: &OnceLock<[String; 3]>) {
    for line in io::stdin().lines() {
        let Ok(line) = line else { break };
        let mut words = line.split_whitespace();
        let action = match words.next() {
            Some("n") => Action::Advance,
            Some("p") => Action::Retreat,
            Some("d") => Action::Complete,
            Some("x") => Action::Abort,
            Some("v") => {
                let mut values: [String; 3] = Default::default();
                for (slot, word) in values.iter_mut().zip(words) {
                    *slot = word.to_string();
                }
                if entered.set(values).is_err() {
                    println!("Addresses already entered.");
                }
                continue;
            }
            _ => {
                println!("Commands: n, p, d, x, v <first> <mid> <last>");
                continue;
            }
        };
        if !runner.legal_actions().allows(action) {
            println!("Not available now.");
            continue;
        }
        handle.press(action);
    }
}
