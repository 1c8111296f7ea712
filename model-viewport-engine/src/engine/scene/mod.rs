//! Scene scaffolding for the showcase viewport.

/// Fixed four-light rig: ambient fill, shadow-casting key, rim, point fill.
pub mod lighting;
