//! Built-in conformance procedures.
//!
//! Each procedure is exposed under a `test_<EncodedName>` identifier; the
//! registry derives the display name from it.

mod s9_1;
mod s9_2;
mod templates;

use crate::registry::ProcedureEntry;

pub use templates::{fixed_speed, single_step, speed_steps};

/// Every built-in procedure, in declaration order.
pub static CATALOG: &[ProcedureEntry] = &[
    ProcedureEntry {
        identifier: "test_Sdash9dot1dashcab3_full_stop",
        procedure: s9_1::cab3_full_stop,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot1dashcab0_full_stop",
        procedure: s9_1::cab0_full_stop,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot1dashcab0_full_speed",
        procedure: s9_1::cab0_full_speed,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot2dashAdot1dashshort",
        procedure: s9_2::a1_short,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot2dashAdot1dashlong",
        procedure: s9_2::a1_long,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot2dashAdot2dash14step",
        procedure: s9_2::a2_14step,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot2dashAdot2dash28step",
        procedure: s9_2::a2_28step,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot2dashBdot1",
        procedure: s9_2::b1_address_range,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot2dashcab3_28steps_forward",
        procedure: s9_2::cab3_28steps_forward,
    },
    ProcedureEntry {
        identifier: "test_Sdash9dot2dashcab3_steps_reverse",
        procedure: s9_2::cab3_steps_reverse,
    },
];
