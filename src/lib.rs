//! # dcs-conformance
//!
//! Interactive conformance test runner for DCC command stations.
//!
//! ## Features
//!
//! - **Named procedures**: Tests are discovered from `test_<EncodedName>`
//!   identifiers and listed under human-readable display names
//! - **Operator-paced**: Procedures block on Next / Prev / Done / Exit actions
//! - **Speed step tables**: 14, 28 and 128 step modes with ESTOP handling
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Session defaults loaded from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dcs_conformance::{operator_channel, TestRegistry, TestRunner};
//!
//! let runner = TestRunner::new(TestRegistry::standard()?);
//! let (handle, mut actions) = operator_channel();
//!
//! // `throttle` implements ActuatorController, `panel` implements StatusSink
//! let report = runner.run_test("Standard S-9.2-B.1", &mut throttle, &mut actions, &mut panel)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and the operator channel
//! - `defmt`: Enables defmt formatting for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod procedures;
pub mod registry;
pub mod runner;
pub mod speed;

// Re-exports for ergonomic API
pub use config::{validate_config, AddressRange, Direction, SessionConfig, TestConfiguration};
pub use error::{AcquisitionError, Error, Result};
pub use registry::{display_name, Procedure, ProcedureEntry, TestRegistry};
pub use runner::{
    Action, ActionSet, ActionSource, ActuatorController, OperatorSignal, PollingWait, RunContext,
    RunOutcome, RunReport, RunnerState, StatusSink, Termination, TestRunner,
};
pub use speed::{Setpoint, SpeedStepTable, StepMode};

// Configuration loading and operator channel (std only)
#[cfg(feature = "std")]
pub use config::load_config;
#[cfg(feature = "std")]
pub use runner::operator_channel;
