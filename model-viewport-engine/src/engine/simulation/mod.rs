//! Per-frame simulation of the showcase model.
//!
//! Combines hover easing, inertial spin, autonomous rotation, levitation,
//! and the key-light flicker.

/// Motion step and light flicker systems.
pub mod animate;
