//! Cross-cutting runtime systems.

/// Native FPS overlay driven by the frame time diagnostics.
pub mod fps_tracking;

/// Disposal list, teardown event, and idempotent resource release.
pub mod teardown;
