use bevy::prelude::*;
use bevy::window::{CursorEntered, CursorLeft, CursorMoved, PrimaryWindow};

use constants::interaction::{DRAG_AXIS_WEIGHT, DRAG_SENSITIVITY, HOVER_INFLUENCE, MAX_VELOCITY};

/// Pointer interaction state, written by the controller below and consumed
/// by the simulation each frame. Single-threaded schedule ordering is the
/// only synchronisation this needs.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerState {
    pub is_dragging: bool,
    /// Accumulated spin velocity, clamped per axis to `MAX_VELOCITY`.
    pub velocity: Vec2,
    /// Rotation offset the model eases toward while hovered.
    pub hover_target: Vec2,
    pub pointer_over: bool,
}

/// Maps a cursor position to normalised device coordinates in [-1, 1] and
/// scales by the per-axis hover influence. Cursor origin is top-left, so
/// the vertical axis flips.
pub fn hover_target_from_cursor(cursor: Vec2, viewport: Vec2) -> Vec2 {
    let ndc_x = (cursor.x / viewport.x.max(1.0)) * 2.0 - 1.0;
    let ndc_y = -((cursor.y / viewport.y.max(1.0)) * 2.0 - 1.0);
    Vec2::new(ndc_x * HOVER_INFLUENCE.x, ndc_y * HOVER_INFLUENCE.y)
}

/// Folds one frame's pointer displacement into the spin velocity.
/// Displacement is normalised by the viewport size so drag feel is
/// resolution-independent, then clamped so a flick can never exceed the
/// velocity cap.
pub fn accumulate_drag(velocity: Vec2, delta: Vec2, viewport: Vec2) -> Vec2 {
    let normalised = delta / viewport.max(Vec2::ONE);
    let accumulated =
        velocity + normalised * std::f32::consts::PI * DRAG_SENSITIVITY * DRAG_AXIS_WEIGHT;
    accumulated.clamp(Vec2::splat(-MAX_VELOCITY), Vec2::splat(MAX_VELOCITY))
}

pub fn pointer_controller(
    mut pointer: ResMut<PointerState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut cursor_entered: EventReader<CursorEntered>,
    mut cursor_left: EventReader<CursorLeft>,
) {
    for _ in cursor_entered.read() {
        pointer.pointer_over = true;
    }
    for _ in cursor_left.read() {
        pointer.pointer_over = false;
        // Reset so the model eases back to its rest orientation.
        pointer.hover_target = Vec2::ZERO;
    }

    // Cursor deltas are logical units, matching the logical window size
    // `accumulate_drag` normalises by, so drag feel does not change with
    // the display's scale factor. The windowing layer keeps them arriving
    // while the button is held, which is the capture behaviour drags need.
    let drag_delta: Vec2 = cursor_moved.read().filter_map(|motion| motion.delta).sum();

    let Ok(window) = windows.single() else { return; };
    let viewport = Vec2::new(window.width(), window.height());
    let cursor = window.cursor_position();

    if mouse_button.just_pressed(MouseButton::Left) && pointer.pointer_over && cursor.is_some() {
        // Existing velocity is kept so grabbing a spinning model doesn't jump.
        pointer.is_dragging = true;
    }

    if pointer.is_dragging {
        if drag_delta != Vec2::ZERO {
            pointer.velocity = accumulate_drag(pointer.velocity, drag_delta, viewport);
        }
        if mouse_button.just_released(MouseButton::Left) {
            // Velocity survives the release and decays as inertial spin.
            pointer.is_dragging = false;
        }
    } else if pointer.pointer_over {
        if let Some(position) = cursor {
            pointer.hover_target = hover_target_from_cursor(position, viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    const VIEWPORT: Vec2 = Vec2::new(400.0, 300.0);

    /// Minimal app running the pointer controller against a 400x300
    /// primary window.
    fn pointer_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<PointerState>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_event::<CursorMoved>()
            .add_event::<CursorEntered>()
            .add_event::<CursorLeft>()
            .add_systems(Update, pointer_controller);
        let window = app
            .world_mut()
            .spawn((
                Window {
                    resolution: WindowResolution::new(VIEWPORT.x, VIEWPORT.y),
                    ..Default::default()
                },
                PrimaryWindow,
            ))
            .id();
        (app, window)
    }

    #[test]
    fn pointer_leave_resets_hover_target() {
        let (mut app, window) = pointer_app();
        {
            let mut pointer = app.world_mut().resource_mut::<PointerState>();
            pointer.pointer_over = true;
            pointer.hover_target = Vec2::new(0.1, -0.05);
        }

        app.world_mut().send_event(CursorLeft { window });
        app.update();

        let pointer = app.world().resource::<PointerState>();
        assert!(!pointer.pointer_over);
        assert_eq!(pointer.hover_target, Vec2::ZERO);
    }

    #[test]
    fn drag_velocity_builds_from_cursor_deltas() {
        let (mut app, window) = pointer_app();
        app.world_mut().resource_mut::<PointerState>().is_dragging = true;

        // One +5-logical-pixel move per frame; deltas and the window size
        // share the same units, so the accumulated velocity is the same on
        // any display density.
        for step in 0..10 {
            app.world_mut().send_event(CursorMoved {
                window,
                position: Vec2::new(100.0 + 5.0 * step as f32, 150.0),
                delta: Some(Vec2::new(5.0, 0.0)),
            });
            app.update();
        }

        let pointer = app.world().resource::<PointerState>();
        assert!(pointer.is_dragging);
        // Ten increments sum past the cap, so the velocity sits at it.
        assert_eq!(pointer.velocity.x, MAX_VELOCITY);
        assert_eq!(pointer.velocity.y, 0.0);
    }

    #[test]
    fn hover_target_is_neutral_at_centre() {
        let target = hover_target_from_cursor(Vec2::new(200.0, 150.0), VIEWPORT);
        assert!(target.length() < 1e-6);
    }

    #[test]
    fn hover_target_maxes_out_at_corners() {
        // Top-right corner: +x, +y after the vertical flip.
        let target = hover_target_from_cursor(Vec2::new(400.0, 0.0), VIEWPORT);
        assert!((target.x - HOVER_INFLUENCE.x).abs() < 1e-6);
        assert!((target.y - HOVER_INFLUENCE.y).abs() < 1e-6);

        let target = hover_target_from_cursor(Vec2::new(0.0, 300.0), VIEWPORT);
        assert!((target.x + HOVER_INFLUENCE.x).abs() < 1e-6);
        assert!((target.y + HOVER_INFLUENCE.y).abs() < 1e-6);
    }

    #[test]
    fn drag_accumulates_per_event_increments() {
        // Ten +5px horizontal moves in a 400px-wide viewport.
        let increment = 5.0 / VIEWPORT.x * std::f32::consts::PI * DRAG_SENSITIVITY * DRAG_AXIS_WEIGHT.x;
        let mut velocity = Vec2::ZERO;
        for step in 1..=10 {
            velocity = accumulate_drag(velocity, Vec2::new(5.0, 0.0), VIEWPORT);
            let expected = (increment * step as f32).min(MAX_VELOCITY);
            assert!((velocity.x - expected).abs() < 1e-6, "step {step}");
        }
        // The tuned increment sums past the cap within ten events.
        assert_eq!(velocity.x, MAX_VELOCITY);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn extreme_flick_is_clamped() {
        let velocity = accumulate_drag(Vec2::ZERO, Vec2::new(10_000.0, -10_000.0), VIEWPORT);
        assert_eq!(velocity.x, MAX_VELOCITY);
        assert_eq!(velocity.y, -MAX_VELOCITY);
    }

    #[test]
    fn clamp_holds_for_any_sequence() {
        let mut velocity = Vec2::ZERO;
        for i in 0..100 {
            let delta = Vec2::new((i as f32) * 7.0, -(i as f32) * 3.0);
            velocity = accumulate_drag(velocity, delta, VIEWPORT);
            assert!(velocity.x.abs() <= MAX_VELOCITY);
            assert!(velocity.y.abs() <= MAX_VELOCITY);
        }
    }

    #[test]
    fn degenerate_viewport_does_not_divide_by_zero() {
        let velocity = accumulate_drag(Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::ZERO);
        assert!(velocity.x.is_finite());
        assert!(velocity.y.is_finite());
    }
}
