pub mod chase;
pub mod cities;
pub mod cli;
pub mod core;
pub mod flight;
pub mod geo;
pub mod loaders;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod types;

pub use chase::{CameraPose, ChaseCamera};
pub use flight::{FlightController, FlightState};
pub use geo::GeoPoint;
pub use scene::SceneContext;
