use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use crate::engine::camera::viewport_camera::ViewerCamera;
use crate::engine::core::app_state::ViewerState;
use crate::engine::interaction::pointer::PointerState;
use crate::engine::loading::manifest_loader::{ManifestLoader, ViewerManifest};
use crate::engine::loading::model_loader::ShowcaseModel;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::ViewerLight;
use crate::engine::systems::fps_tracking::FpsOverlay;

/// Requests a full viewer teardown. Idempotent: events after the first are
/// ignored.
#[derive(Event, Default)]
pub struct TeardownEvent;

/// Every graphics handle the viewer owns, collected while the scene is
/// built and walked exactly once at teardown. GPU-side buffers are freed
/// when the assets leave their storages, so the walk is the deterministic
/// release the renderer does not do for us on despawn alone.
#[derive(Resource, Default)]
pub struct DisposalList {
    pub manifest: Option<Handle<ViewerManifest>>,
    pub scene: Option<Handle<Scene>>,
    pub meshes: Vec<Handle<Mesh>>,
    pub materials: Vec<Handle<StandardMaterial>>,
    pub textures: Vec<Handle<Image>>,
    pub released: bool,
}

/// Escape or a window close request unmounts the viewer.
pub fn request_teardown(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut close_requests: EventReader<WindowCloseRequested>,
    mut teardown: EventWriter<TeardownEvent>,
) {
    let close_requested = close_requests.read().next().is_some();
    if keyboard.just_pressed(KeyCode::Escape) || close_requested {
        teardown.write(TeardownEvent);
    }
}

/// Despawns everything the viewer owns and releases its graphics assets.
///
/// The state flips to `TornDown` first, so no interaction or simulation
/// system can fire against released resources afterwards. Each release step
/// is independent: a handle that already left its storage is skipped and
/// the walk continues.
pub fn teardown_viewer(
    mut events: EventReader<TeardownEvent>,
    state: Res<State<ViewerState>>,
    mut next_state: ResMut<NextState<ViewerState>>,
    mut commands: Commands,
    mut disposal: ResMut<DisposalList>,
    mut progress: ResMut<LoadingProgress>,
    mut manifest_loader: ResMut<ManifestLoader>,
    mut pointer: ResMut<PointerState>,
    owned: Query<
        Entity,
        Or<(
            With<ShowcaseModel>,
            With<ViewerLight>,
            With<ViewerCamera>,
            With<FpsOverlay>,
        )>,
    >,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut scenes: ResMut<Assets<Scene>>,
    mut manifests: ResMut<Assets<ViewerManifest>>,
) {
    if events.read().next().is_none() {
        return;
    }
    if *state.get() == ViewerState::TornDown || disposal.released {
        return;
    }
    next_state.set(ViewerState::TornDown);

    for entity in &owned {
        commands.entity(entity).despawn();
    }

    let mut released = 0usize;
    for handle in disposal.meshes.drain(..) {
        if meshes.remove(handle.id()).is_some() {
            released += 1;
        }
    }
    for handle in disposal.materials.drain(..) {
        if materials.remove(handle.id()).is_some() {
            released += 1;
        }
    }
    for handle in disposal.textures.drain(..) {
        if images.remove(handle.id()).is_some() {
            released += 1;
        }
    }
    if let Some(handle) = disposal.scene.take() {
        if scenes.remove(handle.id()).is_some() {
            released += 1;
        }
    }
    if let Some(handle) = disposal.manifest.take() {
        if manifests.remove(handle.id()).is_some() {
            released += 1;
        }
    }

    *progress = LoadingProgress::default();
    *manifest_loader = ManifestLoader::default();
    *pointer = PointerState::default();
    commands.remove_resource::<ViewerManifest>();
    disposal.released = true;

    println!("→ Viewer torn down, {released} graphics asset(s) released");
}
