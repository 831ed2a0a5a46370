//! Speed step module for dcs-conformance.
//!
//! Maps discrete speed steps to normalized throttle setpoints for the
//! 14, 28 and 128 step modes.

mod mode;
mod setpoint;
mod table;

pub use mode::StepMode;
pub use setpoint::Setpoint;
pub use table::{SpeedStepTable, StepTables, MAX_TABLE_ENTRIES};
