//! Cue to animator parameter table.

use super::components::{AnimRig, AnimatorCommand};
use crate::core::Cue;

const ANIM_STATE: &str = "AnimState";

/// Translate a semantic cue into the animator write for `rig`.
pub fn command_for(rig: AnimRig, cue: Cue) -> AnimatorCommand {
    match cue {
        Cue::Idle => AnimatorCommand::SetInt(ANIM_STATE, rig.idle_state()),
        Cue::Run => AnimatorCommand::SetInt(ANIM_STATE, rig.run_state()),
        Cue::Attack(Some(step)) => AnimatorCommand::Trigger(combo_trigger(step)),
        Cue::Attack(None) => AnimatorCommand::Trigger("Attack"),
        Cue::Hurt => AnimatorCommand::Trigger("Hurt"),
        Cue::Death => AnimatorCommand::Trigger("Death"),
        Cue::Grounded(grounded) => AnimatorCommand::SetBool("Grounded", grounded),
        Cue::NoBlood(no_blood) => AnimatorCommand::SetBool("noBlood", no_blood),
    }
}

fn combo_trigger(step: u8) -> &'static str {
    match step {
        1 => "Attack1",
        2 => "Attack2",
        3 => "Attack3",
        _ => "Attack",
    }
}
