//! Test runner module for dcs-conformance.
//!
//! Provides the sequencing engine, the operator wait primitive and the
//! step sequencing state machines procedures are written with.

mod action;
#[cfg(feature = "std")]
mod channel;
mod context;
mod engine;
pub mod sequence;
mod signal;
mod state;

pub use action::{Action, ActionSet, ActionSource, ScriptedActions};
#[cfg(feature = "std")]
pub use channel::{operator_channel, ActionReceiver, OperatorHandle};
pub use context::{
    parse_entered_value, ActuatorController, PromptField, RunContext, StatusLine, StatusSink,
    ValuePrompt, MAX_STATUS_LEN,
};
pub use engine::{RunOutcome, RunReport, TestRunner};
pub use sequence::{StepCursor, Termination, ValueCursor};
pub use signal::{OperatorSignal, PollingWait};
pub use state::RunnerState;
