//! Speed step to setpoint mapping tables.

use heapless::Vec;

use super::mode::StepMode;

/// Capacity of a materialized table (28 steps plus stop and ESTOP).
pub const MAX_TABLE_ENTRIES: usize = 30;

/// Index of the ESTOP step in 128-step mode.
const ESTOP_STEP_128: i32 = 127;

/// Proportional steps in 128-step mode.
const PROPORTIONAL_STEPS_128: f32 = 126.0;

/// Mapping from speed step index to normalized setpoint.
///
/// The 14 and 28 step tables are materialized: index 0 is stop, indices
/// `1..=steps` are `i / steps`, and the entry after that is ESTOP (`-1.0`).
/// The 128 step mapping is computed on lookup.
#[derive(Debug, Clone)]
pub struct SpeedStepTable {
    mode: StepMode,
    entries: Vec<f32, MAX_TABLE_ENTRIES>,
}

impl SpeedStepTable {
    /// Build the table for a step mode.
    pub fn new(mode: StepMode) -> Self {
        let mut entries = Vec::new();

        if mode != StepMode::OneTwentyEight {
            let steps = mode.steps();
            let values = core::iter::once(0.0)
                .chain((1..=steps).map(|step| step as f32 / steps as f32))
                .chain(core::iter::once(-1.0));
            for value in values {
                // 28 steps plus stop and ESTOP is exactly MAX_TABLE_ENTRIES
                let pushed = entries.push(value);
                debug_assert!(pushed.is_ok(), "speed step table capacity exceeded");
            }
        }

        Self { mode, entries }
    }

    /// Get the step mode of this table.
    #[inline]
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Materialized entries (empty in 128-step mode).
    #[inline]
    pub fn entries(&self) -> &[f32] {
        &self.entries
    }

    /// Index of the stop step.
    #[inline]
    pub const fn stop_step(&self) -> i32 {
        0
    }

    /// Index of the ESTOP step, which is also the last sweepable step.
    #[inline]
    pub fn estop_step(&self) -> i32 {
        match self.mode {
            StepMode::OneTwentyEight => ESTOP_STEP_128,
            _ => self.entries.len() as i32 - 1,
        }
    }

    /// Look up the setpoint for a step.
    ///
    /// Materialized tables return `Some(0.0)` when `step < 0` or
    /// `step > entries().len()`. The guard compares against the length, so
    /// `step == entries().len()` passes it but has no entry and yields `None`.
    ///
    /// In 128-step mode, 0 is stop, 127 is ESTOP, `1..=126` is `step / 126`
    /// and anything else is `None`.
    ///
    /// `None` means the caller must not apply a setpoint.
    pub fn speed_for_step(&self, step: i32) -> Option<f32> {
        match self.mode {
            StepMode::OneTwentyEight => match step {
                0 => Some(0.0),
                ESTOP_STEP_128 => Some(-1.0),
                1..=126 => Some(step as f32 / PROPORTIONAL_STEPS_128),
                _ => None,
            },
            _ => {
                let len = self.entries.len() as i32;
                if step < 0 || step > len {
                    Some(0.0)
                } else {
                    self.entries.get(step as usize).copied()
                }
            }
        }
    }

    /// Nearest step for a setpoint, or `None` outside `[0.0, 1.0] ∪ {-1.0}`.
    pub fn step_for_setpoint(&self, value: f32) -> Option<i32> {
        if value == -1.0 {
            return Some(self.estop_step());
        }
        if !(0.0..=1.0).contains(&value) {
            return None;
        }

        let scale = match self.mode {
            StepMode::OneTwentyEight => PROPORTIONAL_STEPS_128,
            mode => mode.steps() as f32,
        };
        Some(libm::roundf(value * scale) as i32)
    }
}

/// The three step tables, built once and shared by every run.
#[derive(Debug, Clone)]
pub struct StepTables {
    fourteen: SpeedStepTable,
    twenty_eight: SpeedStepTable,
    one_twenty_eight: SpeedStepTable,
}

impl Default for StepTables {
    fn default() -> Self {
        Self::new()
    }
}

impl StepTables {
    /// Build all tables.
    pub fn new() -> Self {
        Self {
            fourteen: SpeedStepTable::new(StepMode::Fourteen),
            twenty_eight: SpeedStepTable::new(StepMode::TwentyEight),
            one_twenty_eight: SpeedStepTable::new(StepMode::OneTwentyEight),
        }
    }

    /// Get the table for a step mode.
    #[inline]
    pub fn get(&self, mode: StepMode) -> &SpeedStepTable {
        match mode {
            StepMode::Fourteen => &self.fourteen,
            StepMode::TwentyEight => &self.twenty_eight,
            StepMode::OneTwentyEight => &self.one_twenty_eight,
        }
    }
}
