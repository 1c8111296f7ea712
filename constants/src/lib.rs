/// Pointer interaction tuning: drag sensitivity, velocity limits, hover easing.
pub mod interaction;

/// Asset path conventions shared between the engine and deployment.
pub mod path;

/// Fixed render, camera, and animation settings for the showcase viewport.
pub mod render_settings;
