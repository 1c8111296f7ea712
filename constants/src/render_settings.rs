/// Vertical field of view for the viewport camera (degrees).
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Near/far clip planes.
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera rest distance before a model has been framed.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 3.0;

/// Largest bounding-box dimension after normalisation. Kept below a naive
/// 1-unit fit so the model never crops against the viewport edges.
pub const MODEL_TARGET_SIZE: f32 = 0.85;

/// Headroom multiplier on the tight-fit framing distance, so the model sits
/// centred with margin rather than filling the frustum.
pub const FRAME_HEADROOM: f32 = 1.7;

/// Framing distance never drops below this, keeping the near plane clear.
pub const MIN_FRAME_DISTANCE: f32 = 1.0;

/// Device pixel ratio cap, bounding GPU cost on high-DPI displays.
pub const MAX_PIXEL_DENSITY: f32 = 2.0;

/// Fallback PBR factors for materials whose exporter omitted them.
pub const DEFAULT_ROUGHNESS: f32 = 0.95;
pub const DEFAULT_METALLIC: f32 = 0.05;

/// Shadow map resolution for the key light.
pub const SHADOW_MAP_SIZE: usize = 2048;

/// Fixed lighting rig intensities. Ambient brightness is in Bevy's ambient
/// units, directional lights in lux, the point light in lumens.
pub const AMBIENT_BRIGHTNESS: f32 = 120.0;
pub const KEY_LIGHT_ILLUMINANCE: f32 = 4_000.0;
pub const RIM_LIGHT_ILLUMINANCE: f32 = 1_400.0;
pub const POINT_LIGHT_INTENSITY: f32 = 500_000.0;
pub const POINT_LIGHT_RANGE: f32 = 10.0;

/// Slow endless yaw applied every frame regardless of interaction.
pub const AUTO_ROTATION_SPEED: f32 = 0.0006;

/// Levitation bob: amplitude in world units, frequency in radians per second
/// of wall-clock time, so the bob period is independent of frame rate.
pub const LEVITATION_AMPLITUDE: f32 = 0.06;
pub const LEVITATION_FREQUENCY: f32 = 1.0;

/// Key light flicker: relative intensity depth and frequency (rad/s).
pub const KEY_LIGHT_FLICKER_DEPTH: f32 = 0.06;
pub const KEY_LIGHT_FLICKER_FREQUENCY: f32 = 0.8;
