use bevy::prelude::*;

use constants::render_settings::{
    AMBIENT_BRIGHTNESS, KEY_LIGHT_ILLUMINANCE, POINT_LIGHT_INTENSITY, POINT_LIGHT_RANGE,
    RIM_LIGHT_ILLUMINANCE,
};

/// Marker for every light the viewer owns, so teardown can collect them.
#[derive(Component)]
pub struct ViewerLight;

/// Marker for the shadow-casting key light, target of the intensity flicker.
#[derive(Component)]
pub struct KeyLight;

/// Fixed rig: ambient fill, key, rim, and point fill. Intensities and
/// positions are deliberate constants, not user configuration.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        KeyLight,
        ViewerLight,
    ));

    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(136, 136, 255),
            illuminance: RIM_LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-5.0, 2.0, -5.0).looking_at(Vec3::ZERO, Vec3::Y),
        ViewerLight,
    ));

    commands.spawn((
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(2.0, 2.0, 2.0),
        ViewerLight,
    ));
}
