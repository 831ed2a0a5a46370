//! Operator actions and the sources that deliver them.

use bitflags::bitflags;

/// A discrete operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Move to the next step or value ("Next").
    Advance,
    /// Move to the previous step or value ("Prev").
    Retreat,
    /// Finish the test normally ("Done").
    Complete,
    /// Leave the test ("Exit").
    Abort,
}

impl Action {
    /// Priority order used when several flags are pending at once.
    pub const PRIORITY: [Action; 4] = [
        Action::Advance,
        Action::Retreat,
        Action::Complete,
        Action::Abort,
    ];

    /// The flag for this action.
    #[inline]
    pub const fn flag(self) -> ActionSet {
        match self {
            Action::Advance => ActionSet::ADVANCE,
            Action::Retreat => ActionSet::RETREAT,
            Action::Complete => ActionSet::COMPLETE,
            Action::Abort => ActionSet::ABORT,
        }
    }

    /// Whether this action ends a wait loop.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Action::Complete | Action::Abort)
    }
}

bitflags! {
    /// Set of actions the operator may currently take.
    ///
    /// The UI layer enables its controls from this set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ActionSet: u8 {
        /// "Next" is legal.
        const ADVANCE = 1 << 0;
        /// "Prev" is legal.
        const RETREAT = 1 << 1;
        /// "Done" is legal.
        const COMPLETE = 1 << 2;
        /// "Exit" is legal.
        const ABORT = 1 << 3;
        /// Both terminal actions.
        const TERMINAL = Self::COMPLETE.bits() | Self::ABORT.bits();
    }
}

impl ActionSet {
    /// Whether `action` is in the set.
    #[inline]
    pub fn allows(self, action: Action) -> bool {
        self.contains(action.flag())
    }
}

/// Blocking source of operator actions.
pub trait ActionSource {
    /// Wait for the next operator action.
    fn next_action(&mut self) -> Action;
}

impl<T: ActionSource + ?Sized> ActionSource for &mut T {
    fn next_action(&mut self) -> Action {
        (**self).next_action()
    }
}

/// Pre-recorded actions, for unattended runs and tests.
///
/// Once the script is exhausted every wait observes `Abort`.
#[derive(Debug, Clone)]
pub struct ScriptedActions<I> {
    actions: I,
}

impl<I: Iterator<Item = Action>> ScriptedActions<I> {
    /// Create a source replaying `actions` in order.
    pub fn new<T: IntoIterator<IntoIter = I>>(actions: T) -> Self {
        Self {
            actions: actions.into_iter(),
        }
    }
}

impl<I: Iterator<Item = Action>> ActionSource for ScriptedActions<I> {
    fn next_action(&mut self) -> Action {
        self.actions.next().unwrap_or(Action::Abort)
    }
}
