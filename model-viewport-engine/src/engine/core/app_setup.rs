// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::render_settings::SHADOW_MAP_SIZE;

// Crate engine modules
use crate::engine::camera::viewport_camera::{
    clamp_pixel_density, frame_camera_to_model, handle_viewport_resize, spawn_viewport_camera,
};
use crate::engine::core::app_state::{ViewerState, transition_to_model_ready, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::interaction::pointer::{PointerState, pointer_controller};
use crate::engine::loading::manifest_loader::{ManifestLoader, ViewerManifest, load_manifest_system, start_loading};
use crate::engine::loading::model_loader::{normalise_model_when_ready, watch_load_failures};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::simulation::animate::{animate_model, flicker_key_light};
use crate::engine::systems::teardown::{DisposalList, TeardownEvent, request_teardown, teardown_viewer};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ViewerManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&["json"]))
        .init_state::<ViewerState>();

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<PointerState>()
        .init_resource::<DisposalList>()
        .insert_resource(DirectionalLightShadowMap { size: SHADOW_MAP_SIZE })
        .add_event::<TeardownEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                load_manifest_system,
                watch_load_failures,
                normalise_model_when_ready,
                frame_camera_to_model,
                transition_to_model_ready,
            )
                .chain()
                .run_if(in_state(ViewerState::Loading)),
        )
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(ViewerState::ModelReady)),
        )
        .add_systems(
            Update,
            (pointer_controller, animate_model)
                .chain()
                .run_if(in_state(ViewerState::Running)),
        );

    // The lit viewport keeps breathing while the model is still on its way;
    // after teardown these queries are empty and the systems no-op.
    app.add_systems(
        Update,
        (flicker_key_light, handle_viewport_resize, clamp_pixel_density),
    );

    // Teardown runs in every state and guards its own idempotence.
    app.add_systems(Update, (request_teardown, teardown_viewer).chain());

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that only handles scene scaffolding
fn setup(mut commands: Commands) {
    spawn_viewport_camera(&mut commands);
    spawn_lighting(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        spawn_fps_overlay(&mut commands);
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
