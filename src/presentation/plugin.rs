//! Presentation plugin - maps gameplay cues onto animators and markers.

use bevy::prelude::*;

use super::systems;

/// Presentation plugin - owns the cue to animator table.
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_presentation_systems(app);
    }
}
