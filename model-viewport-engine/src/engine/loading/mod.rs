//! Asset loading and initialisation systems for the showcase model.
//!
//! Manages the loading pipeline from manifest parsing through glTF scene
//! spawning to transform normalisation, with progress tracking.

/// Viewer manifest loading from JSON configuration.
///
/// Kicks off the glTF scene load once the manifest has parsed.
pub mod manifest_loader;

/// Model scene spawning, material conventions, and transform normalisation.
///
/// Recentres and rescales the loaded model and records its graphics
/// resources for teardown.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
