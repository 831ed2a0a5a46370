//! Unit tests for the speed step tables.

use dcs_conformance::speed::{SpeedStepTable, StepTables};
use dcs_conformance::{Setpoint, StepMode};
use proptest::prelude::*;

#[test]
fn test_28_step_table_shape() {
    let table = SpeedStepTable::new(StepMode::TwentyEight);

    assert_eq!(table.entries().len(), 30);
    assert_eq!(table.speed_for_step(0), Some(0.0));
    assert_eq!(table.speed_for_step(28), Some(1.0));
    assert_eq!(table.speed_for_step(29), Some(-1.0));
    assert_eq!(table.estop_step(), 29);
}

#[test]
fn test_14_step_table_shape() {
    let table = SpeedStepTable::new(StepMode::Fourteen);

    assert_eq!(table.entries().len(), 16);
    assert_eq!(table.speed_for_step(14), Some(1.0));
    assert_eq!(table.speed_for_step(15), Some(-1.0));
    assert_eq!(table.estop_step(), 15);
}

#[test]
fn test_one_past_the_end_has_no_setpoint() {
    let tables = StepTables::new();
    assert_eq!(tables.get(StepMode::TwentyEight).speed_for_step(30), None);
    assert_eq!(tables.get(StepMode::Fourteen).speed_for_step(16), None);
}

#[test]
fn test_128_step_mode() {
    let table = SpeedStepTable::new(StepMode::OneTwentyEight);

    assert!(table.entries().is_empty());
    assert_eq!(table.speed_for_step(0), Some(0.0));
    assert_eq!(table.speed_for_step(127), Some(-1.0));
    assert_eq!(table.speed_for_step(126), Some(1.0));
    assert_eq!(table.speed_for_step(128), None);
    assert_eq!(table.speed_for_step(-1), None);
}

#[test]
fn test_setpoint_domain() {
    assert!(Setpoint::new(0.0).is_ok());
    assert!(Setpoint::new(1.0).is_ok());
    assert!(Setpoint::new(-1.0).is_ok());
    assert!(Setpoint::new(-0.5).is_err());
    assert!(Setpoint::new(1.01).is_err());
    assert!(Setpoint::new(f32::NAN).is_err());
}

proptest! {
    #[test]
    fn prop_28_steps_are_proportional(step in 1i32..=28) {
        let table = SpeedStepTable::new(StepMode::TwentyEight);
        let speed = table.speed_for_step(step).unwrap();
        prop_assert!((speed - step as f32 / 28.0).abs() < 1e-6);
    }

    #[test]
    fn prop_14_steps_are_proportional(step in 1i32..=14) {
        let table = SpeedStepTable::new(StepMode::Fourteen);
        let speed = table.speed_for_step(step).unwrap();
        prop_assert!((speed - step as f32 / 14.0).abs() < 1e-6);
    }

    #[test]
    fn prop_out_of_range_steps_stop(step in prop_oneof![i32::MIN..0, 31i32..i32::MAX]) {
        let table = SpeedStepTable::new(StepMode::TwentyEight);
        prop_assert_eq!(table.speed_for_step(step), Some(0.0));
    }

    #[test]
    fn prop_setpoint_round_trips_to_step(step in 0i32..=28) {
        let table = SpeedStepTable::new(StepMode::TwentyEight);
        let speed = table.speed_for_step(step).unwrap();
        prop_assert_eq!(table.step_for_setpoint(speed), Some(step));
    }

    #[test]
    fn prop_table_values_are_valid_setpoints(step in -5i32..40) {
        let table = SpeedStepTable::new(StepMode::TwentyEight);
        if let Some(speed) = table.speed_for_step(step) {
            prop_assert!(Setpoint::is_valid(speed));
        }
    }
}
