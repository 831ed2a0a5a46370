//! Step sequencing state machines.
//!
//! Two flavors share the same four actions:
//! - [`StepCursor`] walks a linear step range. Legality of `Advance` and
//!   `Retreat` at the ends is published through [`StepCursor::legal_actions`];
//!   the cursor itself does not clamp.
//! - [`ValueCursor`] walks a short list of discrete values and clamps at
//!   both ends.

use crate::error::AcquisitionError;
use crate::registry::ProcedureResult;

use super::action::{Action, ActionSet};
use super::context::RunContext;

/// How a procedure ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Termination {
    /// Ran to completion or the operator pressed "Done".
    Completed,
    /// The operator pressed "Exit".
    Aborted,
}

impl Termination {
    fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::Complete => Some(Termination::Completed),
            Action::Abort => Some(Termination::Aborted),
            Action::Advance | Action::Retreat => None,
        }
    }
}

/// Cursor over the step range `[0, last]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    step: i32,
    last: i32,
}

impl StepCursor {
    /// Start at step 0.
    pub fn new(last: i32) -> Self {
        Self { step: 0, last }
    }

    /// Current step.
    #[inline]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Last step of the range.
    #[inline]
    pub fn last(&self) -> i32 {
        self.last
    }

    /// Actions legal at the current step.
    pub fn legal_actions(&self) -> ActionSet {
        let mut legal = ActionSet::TERMINAL;
        if self.step != self.last {
            legal |= ActionSet::ADVANCE;
        }
        if self.step != 0 {
            legal |= ActionSet::RETREAT;
        }
        legal
    }

    /// Apply an action; returns the termination for `Complete` / `Abort`.
    pub fn apply(&mut self, action: Action) -> Option<Termination> {
        match action {
            Action::Advance => self.step += 1,
            Action::Retreat => self.step -= 1,
            Action::Complete | Action::Abort => {}
        }
        Termination::from_action(action)
    }
}

/// Clamped cursor over a non-empty list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCursor<'v, T> {
    values: &'v [T],
    index: usize,
}

impl<'v, T: Copy> ValueCursor<'v, T> {
    /// Start at the first value; `None` for an empty list.
    pub fn new(values: &'v [T]) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self { values, index: 0 })
        }
    }

    /// Index of the current value.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current value.
    #[inline]
    pub fn current(&self) -> T {
        self.values[self.index]
    }

    /// All four actions are legal; movement clamps.
    #[inline]
    pub fn legal_actions(&self) -> ActionSet {
        ActionSet::all()
    }

    /// Apply an action; returns the termination for `Complete` / `Abort`.
    pub fn apply(&mut self, action: Action) -> Option<Termination> {
        match action {
            Action::Advance => self.index = (self.index + 1).min(self.values.len() - 1),
            Action::Retreat => self.index = self.index.saturating_sub(1),
            Action::Complete | Action::Abort => {}
        }
        Termination::from_action(action)
    }
}

/// Sweep the configured step table from stop to `last`.
///
/// Each step is reported and applied, then the operator moves the cursor.
/// Whether the sweep is completed or aborted, the actuator is reset to stop
/// before returning.
pub fn sweep_steps(ctx: &mut RunContext<'_>, last: i32) -> Termination {
    let mut cursor = StepCursor::new(last);

    let termination = loop {
        ctx.step_to(cursor.step());
        let action = ctx.await_action(cursor.legal_actions());
        if let Some(termination) = cursor.apply(action) {
            break termination;
        }
    };

    ctx.apply_step(0);
    termination
}

/// Sweep a list of values, calling `visit` for the current value before every
/// wait. Nothing is reset when the sweep ends.
///
/// # Errors
///
/// Returns the first `AcquisitionError` from `visit`.
pub fn sweep_values<'a, T, F>(ctx: &mut RunContext<'a>, values: &[T], mut visit: F) -> ProcedureResult
where
    T: Copy,
    F: FnMut(&mut RunContext<'a>, T) -> Result<(), AcquisitionError>,
{
    let Some(mut cursor) = ValueCursor::new(values) else {
        return Ok(Termination::Completed);
    };

    loop {
        visit(ctx, cursor.current())?;
        let action = ctx.await_action(cursor.legal_actions());
        if let Some(termination) = cursor.apply(action) {
            return Ok(termination);
        }
    }
}
