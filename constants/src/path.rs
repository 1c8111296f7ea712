/// Directory under `assets/` holding the viewer manifest.
pub const RELATIVE_MANIFEST_PATH: &str = "viewer";

/// Model file loaded when the manifest omits one.
pub const DEFAULT_MODEL_PATH: &str = "models/moon.glb";
