use std::collections::VecDeque;

use bevy::prelude::*;
use perching_boids::{BoidId, FrameRecorder, InputEvent, Simulation};

#[derive(Resource)]
pub struct FlockSim(pub Simulation);

/// Events gathered from bevy this frame, drained by the simulation.
#[derive(Resource, Default)]
pub struct PendingInput(pub VecDeque<InputEvent>);

/// Draw calls of the last simulated frame.
#[derive(Resource, Default)]
pub struct FrameDraws(pub FrameRecorder);

#[derive(Resource, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Viewport (top-left origin, y down) to bevy world (centred, y up).
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }
}

#[derive(Resource)]
pub struct DebugMode(pub bool);

#[derive(Component)]
pub struct BoidSprite(pub BoidId);
