//! Viewport camera for the showcase scene.
//!
//! Provides camera spawning, auto-framing against the normalised model,
//! resize-driven aspect updates, and pixel-density clamping.

/// Camera marker, framing maths, and resize handling systems.
pub mod viewport_camera;
