//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the viewport camera, lighting rig, asset
/// loading systems, and platform-specific configuration.
pub mod app_setup;

/// Viewer state machine and loading progress transitions.
///
/// Manages states from initial loading through model framing to runtime
/// execution and terminal teardown.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
