//! Test registry module for dcs-conformance.
//!
//! Builds display names from procedure identifiers and provides sorted,
//! named lookup of conformance test procedures.

mod catalog;
pub mod naming;

pub use catalog::{
    Procedure, ProcedureEntry, ProcedureResult, TestEntry, TestRegistry, MAX_PROCEDURES,
};
pub use naming::{display_name, DisplayName, TEST_PREFIX};
