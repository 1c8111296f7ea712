pub mod camera;
pub mod core;
pub mod interaction;
pub mod loading;
pub mod scene;
pub mod simulation;
pub mod systems;
