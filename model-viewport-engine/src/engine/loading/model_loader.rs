use bevy::asset::UntypedAssetLoadFailedEvent;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use constants::render_settings::{DEFAULT_METALLIC, DEFAULT_ROUGHNESS};

use crate::engine::loading::manifest_loader::ViewerManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::systems::teardown::DisposalList;

/// Marker for the root entity of the loaded showcase model.
#[derive(Component)]
pub struct ShowcaseModel;

/// Accumulated yaw/pitch driven by the simulation. Kept as plain Euler
/// angles so hover easing and inertial spin stay per-axis, as tuned.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct SpinState {
    pub yaw: f32,
    pub pitch: f32,
}

/// Rest translation of the normalised model; the levitation bob oscillates
/// around its y component.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct ModelAnchor {
    pub base_translation: Vec3,
}

/// Root transform that recentres a model whose merged bounding box sits at
/// `center` and rescales it so its largest dimension equals `target_size`.
/// A degenerate box leaves the scale untouched.
pub fn normalised_transform(center: Vec3, max_dimension: f32, target_size: f32) -> Transform {
    let scale = if max_dimension > 0.0 {
        target_size / max_dimension
    } else {
        1.0
    };
    Transform {
        translation: -center * scale,
        rotation: Quat::IDENTITY,
        scale: Vec3::splat(scale),
    }
}

/// Merged world-space bounding box over mesh nodes, as (center, size).
pub fn merged_world_aabb<'a>(
    nodes: impl Iterator<Item = (&'a GlobalTransform, &'a Aabb)>,
) -> Option<(Vec3, Vec3)> {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    let mut any = false;

    for (transform, aabb) in nodes {
        any = true;
        let center = Vec3::from(aabb.center);
        let half = Vec3::from(aabb.half_extents);
        for signs in [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ] {
            let corner = transform.transform_point(center + half * signs);
            min = min.min(corner);
            max = max.max(corner);
        }
    }

    any.then(|| ((min + max) * 0.5, max - min))
}

/// Applies the showcase PBR conventions to one material. glTF files that
/// omit `pbrMetallicRoughness` come through with the format's fallback
/// factors (metallic 1.0, roughness 1.0); only that exact pairing is
/// replaced.
/// Alpha mode, emissive, and texture maps are never touched.
pub fn apply_material_conventions(material: &mut StandardMaterial) -> bool {
    if material.metallic == 1.0 && material.perceptual_roughness == 1.0 {
        material.perceptual_roughness = DEFAULT_ROUGHNESS;
        material.metallic = DEFAULT_METALLIC;
        true
    } else {
        false
    }
}

fn record_material_textures(material: &StandardMaterial, disposal: &mut DisposalList) {
    for texture in [
        &material.base_color_texture,
        &material.emissive_texture,
        &material.metallic_roughness_texture,
        &material.normal_map_texture,
        &material.occlusion_texture,
    ] {
        if let Some(handle) = texture {
            disposal.textures.push(handle.clone());
        }
    }
}

/// Waits for the spawned glTF scene to produce mesh nodes with computed
/// bounds, then normalises the root transform, applies material
/// conventions, and records every graphics handle for teardown.
pub fn normalise_model_when_ready(
    mut progress: ResMut<LoadingProgress>,
    manifest: Option<Res<ViewerManifest>>,
    mut disposal: ResMut<DisposalList>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut roots: Query<(Entity, &mut Transform), With<ShowcaseModel>>,
    meshes: Query<(
        &GlobalTransform,
        &Aabb,
        &Mesh3d,
        Option<&MeshMaterial3d<StandardMaterial>>,
    )>,
    mut commands: Commands,
) {
    if progress.model_normalised || !progress.scene_spawned {
        return;
    }
    let Some(manifest) = manifest else { return; };
    let Ok((root, mut transform)) = roots.single_mut() else { return; };

    // Mesh nodes appear a frame or two after the scene handle resolves.
    let Some((center, size)) = merged_world_aabb(meshes.iter().map(|(t, a, _, _)| (t, a))) else {
        return;
    };

    *transform = normalised_transform(center, size.max_element(), manifest.model.target_size);
    // Record the post-normalisation extent so framing works from the
    // measured box, not the requested target size. A degenerate box keeps
    // unit scale and reports zero.
    progress.model_max_dimension = size.max_element() * transform.scale.x;

    let mut mesh_count = 0;
    for (_, _, mesh, material_handle) in &meshes {
        mesh_count += 1;
        disposal.meshes.push(mesh.0.clone());
        if let Some(material_handle) = material_handle {
            if let Some(material) = materials.get_mut(&material_handle.0) {
                apply_material_conventions(material);
                record_material_textures(material, &mut disposal);
            }
            disposal.materials.push(material_handle.0.clone());
        }
    }

    commands.entity(root).insert((
        SpinState::default(),
        ModelAnchor {
            base_translation: transform.translation,
        },
    ));

    progress.model_normalised = true;
    println!("✓ Model normalised: {mesh_count} mesh node(s)");
}

/// A failed load is logged and degrades to an empty lit viewport. One
/// attempt only, no retries.
pub fn watch_load_failures(
    mut progress: ResMut<LoadingProgress>,
    mut failures: EventReader<UntypedAssetLoadFailedEvent>,
) {
    for failure in failures.read() {
        error!("Asset load failed for {}: {}", failure.path, failure.error);
        progress.load_failed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::render_settings::MODEL_TARGET_SIZE;

    #[test]
    fn normalisation_centres_and_rescales() {
        // Box of size (2,2,2) centred at (5,5,5).
        let transform = normalised_transform(Vec3::splat(5.0), 2.0, MODEL_TARGET_SIZE);

        let scale = MODEL_TARGET_SIZE / 2.0;
        assert!((transform.scale - Vec3::splat(scale)).length() < 1e-6);
        assert!((transform.translation - Vec3::splat(-5.0 * scale)).length() < 1e-6);

        // The original box centre lands on the origin.
        let mapped = transform.transform_point(Vec3::splat(5.0));
        assert!(mapped.length() < 1e-5);

        // The largest dimension now equals the target size.
        assert!((2.0 * scale - MODEL_TARGET_SIZE).abs() < 1e-6);
    }

    #[test]
    fn degenerate_box_keeps_scale() {
        let transform = normalised_transform(Vec3::new(1.0, 2.0, 3.0), 0.0, MODEL_TARGET_SIZE);
        assert_eq!(transform.scale, Vec3::ONE);
        assert_eq!(transform.translation, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn measured_extent_after_normalisation_matches_target() {
        let size = Vec3::new(2.0, 1.0, 0.5);
        let transform = normalised_transform(Vec3::ZERO, size.max_element(), MODEL_TARGET_SIZE);
        // The extent handed to camera framing is the rescaled box, which for
        // any non-degenerate model lands exactly on the target size.
        let measured = size.max_element() * transform.scale.x;
        assert!((measured - MODEL_TARGET_SIZE).abs() < 1e-6);
    }

    #[test]
    fn merged_aabb_spans_all_nodes() {
        let identity = GlobalTransform::IDENTITY;
        let a = Aabb {
            center: Vec3::new(-1.0, 0.0, 0.0).into(),
            half_extents: Vec3::splat(0.5).into(),
        };
        let b = Aabb {
            center: Vec3::new(2.0, 0.0, 0.0).into(),
            half_extents: Vec3::splat(0.5).into(),
        };

        let (center, size) =
            merged_world_aabb([(&identity, &a), (&identity, &b)].into_iter()).unwrap();
        assert!((center - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
        assert!((size - Vec3::new(4.0, 1.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn merged_aabb_of_nothing_is_none() {
        assert!(merged_world_aabb(std::iter::empty()).is_none());
    }

    #[test]
    fn fallback_factors_get_showcase_defaults() {
        let mut material = StandardMaterial {
            metallic: 1.0,
            perceptual_roughness: 1.0,
            ..default()
        };
        assert!(apply_material_conventions(&mut material));
        assert_eq!(material.perceptual_roughness, DEFAULT_ROUGHNESS);
        assert_eq!(material.metallic, DEFAULT_METALLIC);
    }

    #[test]
    fn authored_factors_are_untouched() {
        let mut material = StandardMaterial {
            metallic: 0.3,
            perceptual_roughness: 0.7,
            ..default()
        };
        assert!(!apply_material_conventions(&mut material));
        assert_eq!(material.metallic, 0.3);
        assert_eq!(material.perceptual_roughness, 0.7);
    }
}
