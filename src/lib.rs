//! Perching boids: a 2D flock steered by separation, cohesion, alignment and
//! a movable homing target, with boids that land on the ground for a while.
//!
//! | Module         | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | [`config`]     | `FlockConfig`, validation, JSON loading           |
//! | [`boid`]       | `Boid`, `BoidId`                                  |
//! | [`flock`]      | `Flock` update/render/target, the steering rules  |
//! | [`render`]     | `Renderer`, `Pose`, `Appearance`, `FrameRecorder` |
//! | [`input`]      | `InputEvent`, `InputSource`, `ScriptedInput`      |
//! | [`rng`]        | `RandomSource`, `SimRng`                          |
//! | [`sim`]        | `Simulation` frame loop, `FlockSummary`           |
//!
//! Everything is in viewport coordinates (origin top-left, `y` down).

pub mod boid;
pub mod config;
pub mod constants;
pub mod error;
pub mod flock;
pub mod input;
pub mod render;
pub mod rng;
pub mod sim;


pub use boid::{Boid, BoidId};
pub use config::FlockConfig;
pub use error::{ConfigError, Result};
pub use flock::Flock;
pub use input::{InputEvent, InputSource, ScriptedInput};
pub use render::{Appearance, FrameRecorder, Pose, Renderer, Rgb};
pub use rng::{RandomSource, SimRng};
pub use sim::{FlockSummary, FrameOutcome, Simulation};
