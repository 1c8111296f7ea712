use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub scene_spawned: bool,
    pub model_normalised: bool,
    pub camera_framed: bool,
    pub load_failed: bool,
    /// Largest world-space extent of the normalised model, measured from
    /// its merged bounding box. Zero until normalisation runs.
    pub model_max_dimension: f32,
}
