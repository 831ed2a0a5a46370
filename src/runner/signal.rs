//! Edge-triggered operator flags shared between a UI and the runner.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

use crate::config::{OperatorConfig, DEFAULT_POLL_INTERVAL_US};

use super::action::{Action, ActionSource};

/// Four independent "button pressed" flags.
///
/// The UI sets a flag with [`press`](Self::press); the runner consumes it
/// with [`take`](Self::take), which clears and observes in one atomic swap.
#[derive(Debug, Default)]
pub struct OperatorSignal {
    next: AtomicBool,
    prev: AtomicBool,
    done: AtomicBool,
    exit: AtomicBool,
}

impl OperatorSignal {
    /// Create a signal with every flag cleared.
    pub const fn new() -> Self {
        Self {
            next: AtomicBool::new(false),
            prev: AtomicBool::new(false),
            done: AtomicBool::new(false),
            exit: AtomicBool::new(false),
        }
    }

    /// Raise the flag for `action`.
    #[inline]
    pub fn press(&self, action: Action) {
        self.flag(action).store(true, Ordering::Release);
    }

    /// Whether the flag for `action` is raised.
    #[inline]
    pub fn is_pending(&self, action: Action) -> bool {
        self.flag(action).load(Ordering::Acquire)
    }

    /// Consume the first raised flag in the order next, prev, done, exit.
    pub fn take(&self) -> Option<Action> {
        Action::PRIORITY
            .into_iter()
            .find(|&action| self.flag(action).swap(false, Ordering::AcqRel))
    }

    /// Clear every flag.
    pub fn clear(&self) {
        for action in Action::PRIORITY {
            self.flag(action).store(false, Ordering::Release);
        }
    }

    fn flag(&self, action: Action) -> &AtomicBool {
        match action {
            Action::Advance => &self.next,
            Action::Retreat => &self.prev,
            Action::Complete => &self.done,
            Action::Abort => &self.exit,
        }
    }
}

/// [`ActionSource`] polling an [`OperatorSignal`], sleeping between checks.
pub struct PollingWait<'a, D> {
    signal: &'a OperatorSignal,
    delay: D,
    poll_interval_us: u32,
}

impl<'a, D: DelayNs> PollingWait<'a, D> {
    /// Poll `signal` with the default interval.
    pub fn new(signal: &'a OperatorSignal, delay: D) -> Self {
        Self {
            signal,
            delay,
            poll_interval_us: DEFAULT_POLL_INTERVAL_US,
        }
    }

    /// Poll `signal` with the interval from the operator configuration.
    pub fn from_config(signal: &'a OperatorSignal, delay: D, config: &OperatorConfig) -> Self {
        Self::new(signal, delay).with_interval(config.poll_interval_us)
    }

    /// Set the sleep between checks in microseconds.
    pub fn with_interval(mut self, poll_interval_us: u32) -> Self {
        self.poll_interval_us = poll_interval_us;
        self
    }

    /// The polled signal.
    #[inline]
    pub fn signal(&self) -> &OperatorSignal {
        self.signal
    }
}

impl<D: DelayNs> ActionSource for PollingWait<'_, D> {
    fn next_action(&mut self) -> Action {
        loop {
            if let Some(action) = self.signal.take() {
                return action;
            }
            self.delay.delay_us(self.poll_interval_us);
        }
    }
}
