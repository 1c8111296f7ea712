//! Pointer interaction for the showcase viewport.
//!
//! Hover steering, drag capture, and inertial spin velocity accumulation.

/// Pointer state resource and controller system.
pub mod pointer;
