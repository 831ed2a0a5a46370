//! Run context handed to every procedure, and the collaborator traits it
//! drives.

use core::fmt::Write;

use heapless::String;

use crate::config::{AddressRange, TestConfiguration};
use crate::error::AcquisitionError;
use crate::speed::{Setpoint, SpeedStepTable, StepMode, StepTables};

use super::action::{Action, ActionSet, ActionSource};
use super::state::{RunMonitor, RunnerState};

/// Capacity of a status line.
pub const MAX_STATUS_LEN: usize = 128;

/// A formatted status line.
pub type StatusLine = String<MAX_STATUS_LEN>;

/// The throttle hardware a procedure drives.
///
/// `acquire` binds the controller to a decoder address; the setters act on
/// the most recently bound address.
pub trait ActuatorController {
    /// Bind to `address`.
    ///
    /// # Errors
    ///
    /// Returns `AcquisitionError` if the address is invalid or rejected.
    fn acquire(&mut self, address: u16, long: bool) -> Result<(), AcquisitionError>;

    /// Set the speed step mode.
    fn set_step_mode(&mut self, mode: StepMode);

    /// Set the direction of travel.
    fn set_direction(&mut self, forward: bool);

    /// Set the normalized speed, in `[0.0, 1.0]` or `-1.0` for ESTOP.
    fn set_speed_setting(&mut self, value: f32);
}

/// One labeled numeric field of a [`ValuePrompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptField<'p> {
    /// Field label.
    pub label: &'p str,
    /// Value used when the operator leaves the field blank or non-numeric.
    pub default: u16,
}

/// Request for up to three operator-entered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuePrompt<'p> {
    /// Instruction shown above the fields.
    pub info: &'p str,
    /// The fields, in order.
    pub fields: [PromptField<'p>; 3],
}

/// Where a run reports status text and collects entered values.
pub trait StatusSink {
    /// Replace the status line.
    fn status(&mut self, text: &str);

    /// Show the value prompt.
    fn show_prompt(&mut self, _prompt: &ValuePrompt<'_>) {}

    /// Raw text the operator entered in field `slot`, if any.
    fn entered_value(&self, _slot: usize) -> Option<&str> {
        None
    }

    /// Restore the prompt area to its idle labels and clear the fields.
    fn clear_prompt(&mut self) {}
}

/// Parse an entered value: all ASCII digits and fitting a `u16`.
pub fn parse_entered_value(text: &str) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Everything a procedure needs while it runs.
pub struct RunContext<'a> {
    name: &'a str,
    config: TestConfiguration,
    address_defaults: AddressRange,
    tables: &'a StepTables,
    controller: &'a mut dyn ActuatorController,
    operator: &'a mut dyn ActionSource,
    sink: &'a mut dyn StatusSink,
    monitor: &'a RunMonitor,
    actions: u32,
}

impl<'a> RunContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: &'a str,
        config: TestConfiguration,
        address_defaults: AddressRange,
        tables: &'a StepTables,
        controller: &'a mut dyn ActuatorController,
        operator: &'a mut dyn ActionSource,
        sink: &'a mut dyn StatusSink,
        monitor: &'a RunMonitor,
    ) -> Self {
        Self {
            name,
            config,
            address_defaults,
            tables,
            controller,
            operator,
            sink,
            monitor,
            actions: 0,
        }
    }

    /// Display name of the running test.
    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    /// Current throttle configuration.
    #[inline]
    pub fn config(&self) -> &TestConfiguration {
        &self.config
    }

    /// Mutable throttle configuration.
    #[inline]
    pub fn config_mut(&mut self) -> &mut TestConfiguration {
        &mut self.config
    }

    /// Default addresses for the address range prompt.
    #[inline]
    pub fn address_defaults(&self) -> &AddressRange {
        &self.address_defaults
    }

    /// Number of operator actions consumed so far.
    #[inline]
    pub fn actions_observed(&self) -> u32 {
        self.actions
    }

    /// Step table for the configured step mode.
    #[inline]
    pub fn table(&self) -> &'a SpeedStepTable {
        self.tables.get(self.config.step_mode)
    }

    /// Bind the actuator to the configured address, then apply the step mode
    /// and direction.
    ///
    /// On failure an error status is reported and nothing else is configured.
    ///
    /// # Errors
    ///
    /// Returns the controller's `AcquisitionError`.
    pub fn configure_throttle(&mut self) -> Result<(), AcquisitionError> {
        let TestConfiguration {
            address,
            address_is_long,
            step_mode,
            direction,
        } = self.config;

        if let Err(e) = self.controller.acquire(address, address_is_long) {
            tracing::warn!(address, long = address_is_long, "throttle acquisition failed");
            let mut line = StatusLine::new();
            let _ = write!(line, "ERROR: Couldn't assign throttle: {}", address);
            self.sink.status(&line);
            return Err(e);
        }

        self.controller.set_step_mode(step_mode);
        self.controller.set_direction(direction.is_forward());
        Ok(())
    }

    /// Apply a raw setpoint if it is in `[0.0, 1.0] ∪ {-1.0}`.
    ///
    /// Returns whether the actuator was commanded. Out-of-domain values are a
    /// silent no-op.
    pub fn set_speed(&mut self, value: f32) -> bool {
        match Setpoint::new(value) {
            Ok(setpoint) => {
                self.apply(setpoint);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "setpoint rejected");
                false
            }
        }
    }

    /// Apply the setpoint for `step` in the configured step mode.
    ///
    /// Returns the applied value, or `None` if the table has no setpoint for
    /// the step and nothing was sent.
    pub fn apply_step(&mut self, step: i32) -> Option<f32> {
        let speed = self.table().speed_for_step(step)?;
        if self.set_speed(speed) {
            Some(speed)
        } else {
            None
        }
    }

    /// Report and apply `step`, as the stepped procedures do at every step.
    pub fn step_to(&mut self, step: i32) -> Option<f32> {
        let speed = self.table().speed_for_step(step);
        self.report_step(step, speed);
        self.apply_step(step)
    }

    /// Replace the status line.
    pub fn report(&mut self, text: &str) {
        self.sink.status(text);
    }

    /// Report a fixed speed: `Address = 3, FWD Speed set to 0.000000`.
    pub fn report_speed(&mut self, speed: f32) {
        let mut line = StatusLine::new();
        let _ = write!(
            line,
            "Address = {}, {} Speed set to {:.6}",
            self.config.address,
            self.config.direction.token(),
            speed
        );
        self.sink.status(&line);
    }

    /// Report a step: `Address = 3, FWD Step 1, Throttle Value:   0.036`.
    pub fn report_step(&mut self, step: i32, speed: Option<f32>) {
        let mut line = StatusLine::new();
        let _ = write!(
            line,
            "Address = {}, {} Step {}, Throttle Value: ",
            self.config.address,
            self.config.direction.token(),
            step
        );
        let _ = match speed {
            Some(speed) => write!(line, "{:7.3}", speed),
            None => write!(line, "{:>7}", "-"),
        };
        self.sink.status(&line);
    }

    /// Block until the operator takes an action in `legal`.
    ///
    /// `Abort` is always accepted. Other actions outside `legal` are consumed
    /// and ignored.
    pub fn await_action(&mut self, legal: ActionSet) -> Action {
        let legal = legal | ActionSet::ABORT;
        self.monitor.publish_legal(legal);
        self.monitor.set_state(RunnerState::AwaitingOperator);

        let action = loop {
            let action = self.operator.next_action();
            if legal.allows(action) {
                break action;
            }
            tracing::debug!(?action, "ignoring action that is not currently legal");
        };

        self.monitor.publish_legal(ActionSet::empty());
        self.monitor.set_state(RunnerState::Running);
        self.actions += 1;
        tracing::debug!(?action, test = self.name, "operator action");
        action
    }

    /// Show the value prompt.
    pub fn show_prompt(&mut self, prompt: &ValuePrompt<'_>) {
        self.sink.show_prompt(prompt);
    }

    /// Entered values, falling back to `defaults` per field.
    pub fn entered_values(&self, defaults: [u16; 3]) -> [u16; 3] {
        let mut values = defaults;
        for (slot, value) in values.iter_mut().enumerate() {
            if let Some(entered) = self.sink.entered_value(slot).and_then(parse_entered_value) {
                *value = entered;
            }
        }
        values
    }

    /// Clear the value prompt.
    pub fn clear_prompt(&mut self) {
        self.sink.clear_prompt();
    }

    fn apply(&mut self, setpoint: Setpoint) {
        if let Some(step) = self.table().step_for_setpoint(setpoint.value()) {
            tracing::trace!(value = setpoint.value(), step, "applying setpoint");
        }
        self.controller.set_speed_setting(setpoint.value());
    }
}
