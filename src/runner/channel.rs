//! Single-slot operator action channel (std only).

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use super::action::{Action, ActionSource};

/// Create a connected operator handle and action receiver.
///
/// The channel holds at most one pending action, so two presses can never be
/// queued behind each other.
pub fn operator_channel() -> (OperatorHandle, ActionReceiver) {
    let (tx, rx) = mpsc::sync_channel(1);
    (OperatorHandle { tx }, ActionReceiver { rx })
}

/// UI side of the operator channel.
#[derive(Debug, Clone)]
pub struct OperatorHandle {
    tx: SyncSender<Action>,
}

impl OperatorHandle {
    /// Deliver an action.
    ///
    /// Returns `false` if an earlier action is still pending or the runner
    /// side is gone.
    pub fn press(&self, action: Action) -> bool {
        match self.tx.try_send(action) {
            Ok(()) => true,
            Err(TrySendError::Full(dropped)) => {
                tracing::debug!(action = ?dropped, "operator action dropped, previous one pending");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Runner side of the operator channel.
///
/// When every handle has been dropped, waits observe `Abort`.
#[derive(Debug)]
pub struct ActionReceiver {
    rx: Receiver<Action>,
}

impl ActionSource for ActionReceiver {
    fn next_action(&mut self) -> Action {
        self.rx.recv().unwrap_or(Action::Abort)
    }
}
