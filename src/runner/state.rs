//! Runner states and the shared run monitor.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::error::RunnerError;

use super::action::ActionSet;

/// Lifecycle state of a [`TestRunner`](super::TestRunner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RunnerState {
    /// No test is running.
    Idle = 0,
    /// A procedure is executing.
    Running = 1,
    /// A procedure is blocked waiting for an operator action.
    AwaitingOperator = 2,
    /// The procedure has returned and the run is being reported.
    Terminated = 3,
}

impl RunnerState {
    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            RunnerState::Idle => "Idle",
            RunnerState::Running => "Running",
            RunnerState::AwaitingOperator => "AwaitingOperator",
            RunnerState::Terminated => "Terminated",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => RunnerState::Running,
            2 => RunnerState::AwaitingOperator,
            3 => RunnerState::Terminated,
            _ => RunnerState::Idle,
        }
    }
}

/// Run state and currently legal actions, readable from any thread.
#[derive(Debug)]
pub(crate) struct RunMonitor {
    state: AtomicU8,
    legal: AtomicU8,
}

impl RunMonitor {
    pub(crate) const fn new() -> Self {
        Self {
            state: AtomicU8::new(RunnerState::Idle as u8),
            legal: AtomicU8::new(0),
        }
    }

    /// Claim the runner for a new run.
    pub(crate) fn begin(&self) -> Result<(), RunnerError> {
        self.state
            .compare_exchange(
                RunnerState::Idle as u8,
                RunnerState::Running as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| ())
            .map_err(|_| RunnerError::AlreadyRunning)
    }

    pub(crate) fn state(&self) -> RunnerState {
        RunnerState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub(crate) fn set_state(&self, state: RunnerState) {
        self.state.store(state as u8, Ordering::Release);
    }

    pub(crate) fn legal(&self) -> ActionSet {
        ActionSet::from_bits_truncate(self.legal.load(Ordering::Acquire))
    }

    pub(crate) fn publish_legal(&self, legal: ActionSet) {
        self.legal.store(legal.bits(), Ordering::Release);
    }

    /// Return to `Idle` with nothing legal.
    pub(crate) fn finish(&self) {
        self.publish_legal(ActionSet::empty());
        self.set_state(RunnerState::Idle);
    }
}
