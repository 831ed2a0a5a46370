//! S-9.1: baseline packets at full stop and full speed.

use crate::config::Direction;
use crate::registry::ProcedureResult;
use crate::runner::RunContext;
use crate::speed::{Setpoint, StepMode};

use super::templates::fixed_speed;

fn forward_28(ctx: &mut RunContext<'_>, address: u16) {
    ctx.config_mut()
        .short_address(address)
        .step_mode(StepMode::TwentyEight)
        .direction(Direction::Forward);
}

pub(super) fn cab3_full_stop(_name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    forward_28(ctx, 3);
    fixed_speed(ctx, Setpoint::STOP.value())
}

pub(super) fn cab0_full_stop(_name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    forward_28(ctx, 0);
    fixed_speed(ctx, Setpoint::STOP.value())
}

pub(super) fn cab0_full_speed(_name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    forward_28(ctx, 0);
    fixed_speed(ctx, Setpoint::FULL.value())
}
