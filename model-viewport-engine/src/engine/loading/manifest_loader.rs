use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::path::{DEFAULT_MODEL_PATH, RELATIVE_MANIFEST_PATH};
use constants::render_settings::{FRAME_HEADROOM, MODEL_TARGET_SIZE};

use crate::engine::loading::model_loader::ShowcaseModel;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::systems::teardown::DisposalList;

/// Model entry of the viewer manifest. Mirrors the JSON structure exactly;
/// omitted fields fall back to the tuned defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_model_file")]
    pub file: String,
    #[serde(default = "default_target_size")]
    pub target_size: f32,
    #[serde(default = "default_frame_headroom")]
    pub frame_headroom: f32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            file: default_model_file(),
            target_size: default_target_size(),
            frame_headroom: default_frame_headroom(),
        }
    }
}

fn default_model_file() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

fn default_target_size() -> f32 {
    MODEL_TARGET_SIZE
}

fn default_frame_headroom() -> f32 {
    FRAME_HEADROOM
}

/// Viewer manifest as a Bevy asset, loaded from `assets/viewer/manifest.json`.
#[derive(Asset, Debug, Clone, Default, Serialize, Deserialize, TypePath, Resource)]
pub struct ViewerManifest {
    #[serde(default)]
    pub model: ModelSettings,
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ViewerManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{}/manifest.json", RELATIVE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(&manifest_path));
}

/// Promotes the parsed manifest to a resource and spawns the model scene.
/// The render loop keeps producing lit empty frames while the glTF binary
/// is still in flight.
pub fn load_manifest_system(
    mut progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut disposal: ResMut<DisposalList>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ViewerManifest>>,
) {
    if progress.manifest_loaded {
        return;
    }

    if let Some(ref handle) = manifest_loader.handle {
        if let Some(manifest) = manifests.get(handle) {
            println!("✓ Viewer manifest loaded, model: {}", manifest.model.file);
            progress.manifest_loaded = true;

            let scene: Handle<Scene> = asset_server
                .load(GltfAssetLabel::Scene(0).from_asset(manifest.model.file.clone()));
            commands.spawn((SceneRoot(scene.clone()), ShowcaseModel));

            disposal.manifest = Some(handle.clone());
            disposal.scene = Some(scene);
            commands.insert_resource(manifest.clone());
            progress.scene_spawned = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_defaults_fill_missing_fields() {
        let manifest: ViewerManifest =
            serde_json::from_str(r#"{ "model": { "file": "models/moon.glb" } }"#).unwrap();
        assert_eq!(manifest.model.file, "models/moon.glb");
        assert_eq!(manifest.model.target_size, MODEL_TARGET_SIZE);
        assert_eq!(manifest.model.frame_headroom, FRAME_HEADROOM);
    }

    #[test]
    fn empty_manifest_is_usable() {
        let manifest: ViewerManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest.model.file, DEFAULT_MODEL_PATH);
    }

    #[test]
    fn explicit_values_survive_round_trip() {
        let manifest = ViewerManifest {
            model: ModelSettings {
                file: "models/planet.glb".into(),
                target_size: 1.2,
                frame_headroom: 2.0,
            },
        };
        let json = serde_json::to_string(&manifest).unwrap();
        let back: ViewerManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.model.file, "models/planet.glb");
        assert_eq!(back.model.target_size, 1.2);
        assert_eq!(back.model.frame_headroom, 2.0);
    }
}
