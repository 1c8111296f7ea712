use bevy::math::EulerRot;
use bevy::prelude::*;

use constants::interaction::{HOVER_EASE_FACTOR, VELOCITY_DAMPING, VELOCITY_REST_EPSILON};
use constants::render_settings::{
    AUTO_ROTATION_SPEED, KEY_LIGHT_FLICKER_DEPTH, KEY_LIGHT_FLICKER_FREQUENCY,
    KEY_LIGHT_ILLUMINANCE, LEVITATION_AMPLITUDE, LEVITATION_FREQUENCY,
};

use crate::engine::interaction::pointer::PointerState;
use crate::engine::loading::model_loader::{ModelAnchor, ShowcaseModel, SpinState};
use crate::engine::scene::lighting::KeyLight;

/// One step of exponential smoothing toward a target angle.
pub fn ease_toward(current: f32, target: f32) -> f32 {
    current + (target - current) * HOVER_EASE_FACTOR
}

/// Geometric per-frame decay with a snap to exact zero below the rest
/// epsilon, so spin ends instead of drifting imperceptibly forever.
pub fn decay_velocity(velocity: Vec2) -> Vec2 {
    let mut decayed = velocity * VELOCITY_DAMPING;
    if decayed.x.abs() < VELOCITY_REST_EPSILON {
        decayed.x = 0.0;
    }
    if decayed.y.abs() < VELOCITY_REST_EPSILON {
        decayed.y = 0.0;
    }
    decayed
}

/// The per-frame motion step, in tuned order: hover easing, inertial spin,
/// autonomous yaw, levitation, velocity decay.
pub fn animate_model(
    time: Res<Time>,
    mut pointer: ResMut<PointerState>,
    mut models: Query<(&mut Transform, &mut SpinState, &ModelAnchor), With<ShowcaseModel>>,
) {
    if let Ok((mut transform, mut spin, anchor)) = models.single_mut() {
        // Hover steering only applies while idle under the pointer; a drag
        // or a free spin overrides it.
        if !pointer.is_dragging && pointer.pointer_over {
            spin.yaw = ease_toward(spin.yaw, pointer.hover_target.x);
            spin.pitch = ease_toward(spin.pitch, pointer.hover_target.y);
        }

        // Inertial spin from accumulated drag velocity.
        spin.yaw += pointer.velocity.x;
        spin.pitch += pointer.velocity.y;

        // Slow endless idle rotation.
        spin.yaw += AUTO_ROTATION_SPEED;

        transform.rotation = Quat::from_euler(EulerRot::YXZ, spin.yaw, spin.pitch, 0.0);

        // Levitation runs on wall-clock time, independent of frame rate.
        let seconds = time.elapsed_secs();
        transform.translation.y = anchor.base_translation.y
            + (seconds * LEVITATION_FREQUENCY).sin() * LEVITATION_AMPLITUDE;
    }

    pointer.velocity = decay_velocity(pointer.velocity);
}

/// Subtle sinusoidal intensity flicker on the key light.
pub fn flicker_key_light(
    time: Res<Time>,
    mut lights: Query<&mut DirectionalLight, With<KeyLight>>,
) {
    if let Ok(mut light) = lights.single_mut() {
        let seconds = time.elapsed_secs();
        light.illuminance = KEY_LIGHT_ILLUMINANCE
            * (1.0 + (seconds * KEY_LIGHT_FLICKER_FREQUENCY).sin() * KEY_LIGHT_FLICKER_DEPTH);
    }
}
