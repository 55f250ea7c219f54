pub mod controller;
pub mod error;
pub mod intensity;
pub mod selection;
pub mod state;
pub mod store;
pub mod telemetry;
