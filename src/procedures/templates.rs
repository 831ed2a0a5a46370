//! Shared procedure shapes: configure the throttle, then act.

use core::fmt::Write;

use crate::config::Direction;
use crate::registry::ProcedureResult;
use crate::runner::sequence::sweep_steps;
use crate::runner::{RunContext, StatusLine, Termination};
use crate::speed::StepMode;

/// Configure the throttle, report and apply one fixed speed.
///
/// # Errors
///
/// Returns the acquisition error if the throttle cannot be bound.
pub fn fixed_speed(ctx: &mut RunContext<'_>, speed: f32) -> ProcedureResult {
    ctx.configure_throttle()?;
    ctx.report_speed(speed);
    ctx.set_speed(speed);
    Ok(Termination::Completed)
}

/// Configure the throttle, report and apply one step of the configured mode.
///
/// # Errors
///
/// Returns the acquisition error if the throttle cannot be bound.
pub fn single_step(ctx: &mut RunContext<'_>, step: i32) -> ProcedureResult {
    ctx.configure_throttle()?;
    ctx.step_to(step);
    Ok(Termination::Completed)
}

/// Walk the 28-step table under operator control, from stop to ESTOP.
///
/// The throttle is reset to stop and `Test <name> Done.` reported when the
/// operator completes or aborts.
///
/// # Errors
///
/// Returns the acquisition error if the throttle cannot be bound.
pub fn speed_steps(name: &str, ctx: &mut RunContext<'_>, direction: Direction) -> ProcedureResult {
    ctx.config_mut()
        .short_address(3)
        .step_mode(StepMode::TwentyEight)
        .direction(direction);
    ctx.configure_throttle()?;

    let last = ctx.table().estop_step();
    let termination = sweep_steps(ctx, last);

    let mut line = StatusLine::new();
    let _ = write!(line, "Test {} Done.", name);
    ctx.report(&line);
    Ok(termination)
}
