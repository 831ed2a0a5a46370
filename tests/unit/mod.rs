//! Unit test harness for dcs-conformance.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod naming_properties;
mod speed_tables;
