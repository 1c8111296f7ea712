use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ViewerState {
    /// Manifest and model are still on their way. The viewport renders a
    /// lit, empty scene in the meantime.
    #[default]
    Loading,
    /// Model normalised and camera framed, one frame before interaction.
    ModelReady,
    /// Interaction and simulation active.
    Running,
    /// Terminal. Everything the viewer owned has been despawned and its
    /// graphics assets released.
    TornDown,
}

/// Leaves `Loading` either forwards (model framed) or sideways into a
/// degraded-but-running empty viewport when the model failed to load.
pub fn transition_to_model_ready(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<ViewerState>>,
) {
    if progress.model_normalised && progress.camera_framed {
        println!("→ Model framed, transitioning to ModelReady state");
        next_state.set(ViewerState::ModelReady);
    } else if progress.load_failed {
        warn!("Model unavailable, running with an empty lit viewport");
        next_state.set(ViewerState::Running);
    }
}

pub fn transition_to_running(mut next_state: ResMut<NextState<ViewerState>>) {
    println!("→ Viewer ready, transitioning to Running state");
    next_state.set(ViewerState::Running);
}
