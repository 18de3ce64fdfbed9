//! Critter evolution simulation core
//!
//! This crate implements:
//! - Randomized trigonometric movement patterns chained into lifelong gaits
//! - A fixed-size food pool with consume-and-respawn
//! - Critters that age, burn health by moving, eat, and mate once per lifetime
//! - Population orchestration with deferred births and deaths per frame
//!
//! Rendering, windowing and config file parsing live outside this crate. The
//! core hands out positions, rotations and bounding boxes for drawing.

pub mod agent;
pub mod config;
pub mod geometry;
pub mod movement;
pub mod population;
pub mod resource;
pub mod sprite;
pub mod stats;

// Re-export main types for convenience
pub use agent::{Agent, Color, CritterRenderData, Vitality};
pub use config::SimConfig;
pub use geometry::Rect;
pub use movement::{MovementPattern, MovementSequence, NUM_MOVEMENTS};
pub use population::Population;
pub use resource::ResourcePool;
pub use sprite::CritterSprite;
pub use stats::FrameStats;

/// Width of the simulated area. Shared with the renderer's canvas size.
pub const WORLD_WIDTH: f32 = 800.0;

/// Height of the simulated area. Shared with the renderer's canvas size.
pub const WORLD_HEIGHT: f32 = 600.0;
