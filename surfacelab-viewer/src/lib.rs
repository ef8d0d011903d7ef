//! Viewer core for surfacelab
//!
//! This crate ties materials and geometry together behind a renderer-agnostic
//! controller:
//! - Camera with framing, orbit and zoom
//! - Active surface state and slider-to-shading mapping
//! - Generation-fenced background mesh loading
//! - Renderer and logging collaborators
//! - TOML viewer configuration

pub mod camera;
pub mod config;
pub mod controller;
pub mod events;
pub mod loading;
pub mod renderer;
pub mod sink;
pub mod surface;

pub use camera::*;
pub use config::*;
pub use controller::*;
pub use events::*;
pub use loading::*;
pub use renderer::*;
pub use sink::*;
pub use surface::*;
