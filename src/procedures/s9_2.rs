//! S-9.2: speed step and addressing procedures.

use crate::config::Direction;
use crate::registry::ProcedureResult;
use crate::runner::sequence::sweep_values;
use crate::runner::{Action, ActionSet, PromptField, RunContext, Termination, ValuePrompt};
use crate::speed::StepMode;

use super::templates::{single_step, speed_steps};

const ADDRESS_PROMPT_INFO: &str =
    "Enter the first, mid, and last supported decoder addresses, click 'Done' when ready";

pub(super) fn a1_short(_name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    ctx.config_mut()
        .short_address(122)
        .step_mode(StepMode::TwentyEight)
        .direction(Direction::Forward);
    single_step(ctx, 1)
}

pub(super) fn a1_long(_name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    ctx.config_mut()
        .long_address(122)
        .step_mode(StepMode::TwentyEight)
        .direction(Direction::Forward);
    single_step(ctx, 1)
}

pub(super) fn a2_14step(_name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    ctx.config_mut()
        .short_address(3)
        .step_mode(StepMode::Fourteen)
        .direction(Direction::Reverse);
    single_step(ctx, 12)
}

pub(super) fn a2_28step(_name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    ctx.config_mut()
        .short_address(3)
        .step_mode(StepMode::TwentyEight)
        .direction(Direction::Reverse);
    single_step(ctx, 12)
}

/// Ask for the first, mid and last supported addresses, then hold step 1 on
/// each while the operator moves between them.
pub(super) fn b1_address_range(_name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    ctx.config_mut()
        .short_address(3)
        .step_mode(StepMode::TwentyEight)
        .direction(Direction::Forward);

    let defaults = ctx.address_defaults().as_array();
    ctx.show_prompt(&ValuePrompt {
        info: ADDRESS_PROMPT_INFO,
        fields: [
            PromptField {
                label: "First Documented Address",
                default: defaults[0],
            },
            PromptField {
                label: "Mid Documented Address",
                default: defaults[1],
            },
            PromptField {
                label: "Last Documented Address",
                default: defaults[2],
            },
        ],
    });

    let result = sweep_addresses(ctx, defaults);
    ctx.clear_prompt();
    result
}

fn sweep_addresses(ctx: &mut RunContext<'_>, defaults: [u16; 3]) -> ProcedureResult {
    if ctx.await_action(ActionSet::COMPLETE) == Action::Abort {
        return Ok(Termination::Aborted);
    }

    let addresses = ctx.entered_values(defaults);
    tracing::debug!(?addresses, "address range entered");

    sweep_values(ctx, &addresses, |ctx, address| {
        ctx.config_mut().short_address(address);
        ctx.configure_throttle()?;
        ctx.step_to(1);
        Ok(())
    })
}

pub(super) fn cab3_28steps_forward(name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    speed_steps(name, ctx, Direction::Forward)
}

pub(super) fn cab3_steps_reverse(name: &str, ctx: &mut RunContext<'_>) -> ProcedureResult {
    speed_steps(name, ctx, Direction::Reverse)
}
