//! Test runner: looks up a named procedure and runs it to termination.

use core::fmt::Write;

use crate::config::{AddressRange, SessionConfig, TestConfiguration};
use crate::error::{AcquisitionError, Result};
use crate::registry::{DisplayName, TestRegistry};
use crate::speed::StepTables;

use super::action::{ActionSet, ActionSource};
use super::context::{ActuatorController, RunContext, StatusLine, StatusSink};
use super::sequence::Termination;
use super::state::{RunMonitor, RunnerState};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The procedure finished normally.
    Completed,
    /// The operator aborted the procedure.
    Aborted,
    /// The actuator could not be acquired; the procedure stopped early.
    AcquisitionFailed(AcquisitionError),
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Display name of the test.
    pub name: DisplayName,
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Operator actions consumed during the run.
    pub actions: u32,
}

/// Returns the monitor to `Idle` however the run ends.
struct RunGuard<'m> {
    monitor: &'m RunMonitor,
}

impl<'m> RunGuard<'m> {
    fn begin(monitor: &'m RunMonitor) -> Result<Self> {
        monitor.begin()?;
        Ok(Self { monitor })
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.monitor.finish();
    }
}

/// Sequencing engine for conformance tests.
///
/// At most one test runs at a time. The runner can be shared between a UI
/// thread (reading [`state`](Self::state) and
/// [`legal_actions`](Self::legal_actions)) and the thread running tests.
#[derive(Debug)]
pub struct TestRunner {
    registry: TestRegistry,
    tables: StepTables,
    defaults: TestConfiguration,
    address_range: AddressRange,
    monitor: RunMonitor,
}

impl TestRunner {
    /// Create a runner with default settings.
    pub fn new(registry: TestRegistry) -> Self {
        Self {
            registry,
            tables: StepTables::new(),
            defaults: TestConfiguration::default(),
            address_range: AddressRange::default(),
            monitor: RunMonitor::new(),
        }
    }

    /// Create a runner using a session configuration's defaults.
    pub fn from_config(registry: TestRegistry, config: &SessionConfig) -> Self {
        let mut runner = Self::new(registry);
        runner.defaults = config.defaults;
        runner.address_range = config.address_range;
        runner
    }

    /// The test registry.
    #[inline]
    pub fn registry(&self) -> &TestRegistry {
        &self.registry
    }

    /// The step tables.
    #[inline]
    pub fn tables(&self) -> &StepTables {
        &self.tables
    }

    /// Configuration every run starts from.
    #[inline]
    pub fn defaults(&self) -> &TestConfiguration {
        &self.defaults
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> RunnerState {
        self.monitor.state()
    }

    /// Actions currently legal for the operator; empty unless a procedure is
    /// waiting.
    #[inline]
    pub fn legal_actions(&self) -> ActionSet {
        self.monitor.legal()
    }

    /// Run the test registered as `name` to termination.
    ///
    /// Reports `Test: <name>` before and `Test: <name> Done.` after the
    /// procedure, however it ended. An acquisition failure ends the procedure
    /// early after reporting the error and is returned as
    /// [`RunOutcome::AcquisitionFailed`].
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::AlreadyRunning` if a test is running and
    /// `RegistryError::NotFound` for an unknown name.
    pub fn run_test(
        &self,
        name: &str,
        controller: &mut dyn ActuatorController,
        operator: &mut dyn ActionSource,
        sink: &mut dyn StatusSink,
    ) -> Result<RunReport> {
        let _guard = RunGuard::begin(&self.monitor)?;
        let entry = self.registry.entry(name)?;
        let name = entry.name();

        tracing::info!(test = name, "starting test");
        sink.status(&status_line(format_args!("Test: {}", name)));

        let (result, actions) = {
            let mut ctx = RunContext::new(
                name,
                self.defaults,
                self.address_range,
                &self.tables,
                controller,
                operator,
                sink,
                &self.monitor,
            );
            let result = (entry.procedure())(name, &mut ctx);
            (result, ctx.actions_observed())
        };

        self.monitor.set_state(RunnerState::Terminated);

        sink.status(&status_line(format_args!("Test: {} Done.", name)));

        let outcome = match result {
            Ok(Termination::Completed) => RunOutcome::Completed,
            Ok(Termination::Aborted) => RunOutcome::Aborted,
            Err(e) => RunOutcome::AcquisitionFailed(e),
        };

        tracing::info!(test = name, outcome = ?outcome, actions, "test finished");

        Ok(RunReport {
            name: DisplayName::try_from(name).unwrap_or_default(),
            outcome,
            actions,
        })
    }
}

impl From<TestRegistry> for TestRunner {
    fn from(registry: TestRegistry) -> Self {
        Self::new(registry)
    }
}

fn status_line(args: core::fmt::Arguments<'_>) -> StatusLine {
    let mut line = StatusLine::new();
    let _ = line.write_fmt(args);
    line
}
