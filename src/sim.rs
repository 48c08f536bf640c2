//! The per-frame driving loop: input, then one update, then one render.

use glam::Vec2;
use log::info;
use serde::Serialize;

use crate::boid::BoidId;
use crate::flock::Flock;
use crate::input::{InputEvent, InputSource};
use crate::render::Renderer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

pub struct Simulation {
    flock: Flock,
    frame: u64,
}

impl Simulation {
    pub fn new(flock: Flock) -> Self {
        Self { flock, frame: 0 }
    }

    /// Run one frame.
    ///
    /// All pending events are drained first. If a close was among them the
    /// frame stops there, otherwise the flock is updated once and rendered once.
    pub fn frame<I, R>(&mut self, input: &mut I, renderer: &mut R) -> FrameOutcome
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        input.begin_frame(self.frame);

        let mut close = false;
        while let Some(event) = input.poll_event() {
            match event {
                InputEvent::Close => close = true,
                InputEvent::LeftClick { x, y } => self.flock.set_target(x as f32, y as f32),
            }
        }
        if close {
            info!("close requested after {} frames", self.frame);
            return FrameOutcome::Stop;
        }

        self.flock.update();
        renderer.begin_frame();
        self.flock.render(renderer);
        self.frame += 1;
        FrameOutcome::Continue
    }

    /// Run up to `frames` frames; returns how many completed.
    pub fn run<I, R>(&mut self, frames: u64, input: &mut I, renderer: &mut R) -> u64
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let start = self.frame;
        while self.frame - start < frames {
            if self.frame(input, renderer) == FrameOutcome::Stop {
                break;
            }
        }
        self.frame - start
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn flock_mut(&mut self) -> &mut Flock {
        &mut self.flock
    }

    pub fn summary(&self) -> FlockSummary {
        FlockSummary::of(&self.flock, self.frame)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct BoidSummary {
    pub id: BoidId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub perching: bool,
    pub perch_timer: u32,
}

/// Serializable picture of the flock after some number of frames.
#[derive(Clone, Debug, Serialize)]
pub struct FlockSummary {
    pub frame: u64,
    pub target: Vec2,
    pub perching: usize,
    pub mean_speed: f32,
    pub boids: Vec<BoidSummary>,
}

impl FlockSummary {
    pub fn of(flock: &Flock, frame: u64) -> Self {
        let boids: Vec<BoidSummary> = flock
            .boids()
            .iter()
            .map(|b| BoidSummary {
                id: b.id(),
                position: b.position(),
                velocity: b.velocity(),
                perching: b.is_perching(),
                perch_timer: b.perch_timer(),
            })
            .collect();
        let mean_speed = if boids.is_empty() {
            0.0
        } else {
            boids.iter().map(|b| b.velocity.length()).sum::<f32>() / boids.len() as f32
        };
        Self {
            frame,
            target: flock.target(),
            perching: boids.iter().filter(|b| b.perching).count(),
            mean_speed,
            boids,
        }
    }
}
