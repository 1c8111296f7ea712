use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::camera::{ClearColorConfig, Exposure};
use bevy::window::{PrimaryWindow, WindowResized};

use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, DEFAULT_CAMERA_DISTANCE, MAX_PIXEL_DENSITY,
    MIN_FRAME_DISTANCE,
};

use crate::engine::loading::manifest_loader::ViewerManifest;
use crate::engine::loading::progress::LoadingProgress;

/// Marker for the single viewport camera.
#[derive(Component)]
pub struct ViewerCamera;

pub fn spawn_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            // No opaque background: the canvas overlays the host page.
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Exposure::INDOOR,
        Msaa::Sample4,
        Transform::from_xyz(0.0, 0.0, DEFAULT_CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        ViewerCamera,
    ));
}

/// Distance along the view axis at which a box of the given largest
/// dimension fits the vertical field of view, loosened by the headroom
/// factor and clamped clear of the near plane.
pub fn frame_distance(max_dimension: f32, fov_radians: f32, headroom: f32) -> f32 {
    let tight_fit = (max_dimension * 0.5) / (fov_radians * 0.5).tan();
    (tight_fit.abs() * headroom).max(MIN_FRAME_DISTANCE)
}

/// Frames the camera against the freshly normalised model. Its bounding box
/// is centred at the origin, so framing needs only the measured largest
/// dimension, the manifest's headroom and the current window. A flat or
/// empty model measures zero and lands on the minimum distance clamp.
pub fn frame_camera_to_model(
    mut progress: ResMut<LoadingProgress>,
    manifest: Option<Res<ViewerManifest>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<ViewerCamera>>,
) {
    if progress.camera_framed || !progress.model_normalised {
        return;
    }
    let Some(manifest) = manifest else { return; };
    let Ok((mut transform, mut projection)) = cameras.single_mut() else { return; };

    let Projection::Perspective(perspective) = &mut *projection else { return; };
    let distance = frame_distance(
        progress.model_max_dimension,
        perspective.fov,
        manifest.model.frame_headroom,
    );
    *transform = Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y);

    if let Ok(window) = windows.single() {
        if window.height() > 0.0 {
            perspective.aspect_ratio = window.width() / window.height();
        }
    }

    progress.camera_framed = true;
    println!("✓ Camera framed at distance {distance:.2}");
}

/// Keeps the projection in step with the viewport when the host resizes it.
pub fn handle_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<ViewerCamera>>,
) {
    for event in resize_events.read() {
        if event.height <= 0.0 {
            continue;
        }
        for mut projection in &mut cameras {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = event.width / event.height;
            }
        }
    }
}

/// Caps the device pixel ratio so high-DPI displays do not quadruple the
/// fragment load of what is a decorative viewport.
pub fn clamp_pixel_density(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    let Ok(mut window) = windows.single_mut() else { return; };
    if window.resolution.scale_factor() > MAX_PIXEL_DENSITY
        && window.resolution.scale_factor_override() != Some(MAX_PIXEL_DENSITY)
    {
        window
            .resolution
            .set_scale_factor_override(Some(MAX_PIXEL_DENSITY));
    }
}
