//! What the simulation hands to whoever draws it.
//!
//! Nothing in here depends on a graphics library: a [`Renderer`] receives a
//! pose and the boid's [`Appearance`] and turns that into draw calls.

use glam::Vec2;

use crate::boid::BoidId;
use crate::constants::HEADING_OFFSET_DEGREES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
}

/// Local-space triangle, "forward" pointing along `-y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleShape {
    pub vertices: [Vec2; 3],
}

impl TriangleShape {
    pub fn from_radius(r: f32) -> Self {
        Self {
            vertices: [
                Vec2::new(0.0, -r * 2.0),
                Vec2::new(-r, r * 2.0),
                Vec2::new(r, r * 2.0),
            ],
        }
    }
}

/// Cosmetic state, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub shape: TriangleShape,
    pub fill: Rgb,
    pub outline: Rgb,
    pub outline_thickness: f32,
}

/// Where and how a boid is drawn this frame. Rotation is clockwise degrees in
/// viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub rotation_degrees: f32,
}

impl Pose {
    pub fn from_motion(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            rotation_degrees: heading_degrees(velocity) + HEADING_OFFSET_DEGREES,
        }
    }
}

/// `atan2(v.y, v.x)` in degrees.
pub fn heading_degrees(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

pub trait Renderer {
    /// Called once per frame before the first draw.
    fn begin_frame(&mut self) {}

    fn draw(&mut self, id: BoidId, pose: Pose, appearance: &Appearance);
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub id: BoidId,
    pub pose: Pose,
    pub appearance: Appearance,
}

/// Renderer that keeps the draw calls of the most recent frame.
#[derive(Default, Debug)]
pub struct FrameRecorder {
    calls: Vec<DrawCall>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }
}

impl Renderer for FrameRecorder {
    fn begin_frame(&mut self) {
        self.calls.clear();
    }

    fn draw(&mut self, id: BoidId, pose: Pose, appearance: &Appearance) {
        self.calls.push(DrawCall {
            id,
            pose,
            appearance: *appearance,
        });
    }
}
