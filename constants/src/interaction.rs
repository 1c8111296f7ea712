use bevy::prelude::*;

/// Overall drag sensitivity multiplier applied to normalised pointer deltas.
pub const DRAG_SENSITIVITY: f32 = 0.9;

/// Per-axis drag weighting. Yaw spin reads better than pitch spin, so the
/// horizontal axis gets the larger share.
pub const DRAG_AXIS_WEIGHT: Vec2 = Vec2::new(0.45, 0.28);

/// Hard cap on accumulated spin velocity per axis, so a fast flick can never
/// send the model spinning wildly.
pub const MAX_VELOCITY: f32 = 0.12;

/// Geometric decay applied to spin velocity every frame after a drag ends.
pub const VELOCITY_DAMPING: f32 = 0.90;

/// Below this magnitude velocity snaps to exactly zero, ending the spin
/// instead of drifting imperceptibly forever.
pub const VELOCITY_REST_EPSILON: f32 = 1e-4;

/// How far hover steering tilts the model, per axis, at the viewport edges.
/// Horizontal influence is deliberately larger than vertical.
pub const HOVER_INFLUENCE: Vec2 = Vec2::new(0.14, 0.08);

/// Exponential smoothing factor easing the model toward the hover target
/// each frame. Tuned for a lagged, springy feel rather than an instant snap.
pub const HOVER_EASE_FACTOR: f32 = 0.06;
