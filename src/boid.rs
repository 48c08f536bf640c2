use std::f32::consts::TAU;
use std::fmt;

use glam::Vec2;
use serde::Serialize;

use crate::config::FlockConfig;
use crate::render::{Appearance, Rgb, TriangleShape};
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BoidId(pub u32);

impl BoidId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BoidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoidId({})", self.0)
    }
}

/// Simulation state of one boid.
///
/// Position and velocity are only ever written by [`crate::flock::Flock`].
#[derive(Clone, Debug)]
pub struct Boid {
    pub(crate) id: BoidId,
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) radius: f32,
    pub(crate) is_perching: bool,
    /// Drawn once at construction, never refilled.
    pub(crate) perch_timer: u32,
}

impl Boid {
    /// Build a boid at `position` together with its cosmetic state.
    ///
    /// Draw order: perch timer, heading, then the three fill channels.
    pub fn new(
        id: BoidId,
        position: Vec2,
        config: &FlockConfig,
        rng: &mut impl RandomSource,
    ) -> (Self, Appearance) {
        let perch_timer = rng.next_in_range(config.perch_timer_range());
        let velocity = random_unit(rng);
        let fill = random_color(rng);

        let boid = Self {
            id,
            position,
            velocity,
            radius: config.boid_radius,
            is_perching: false,
            perch_timer,
        };
        let appearance = Appearance {
            shape: TriangleShape::from_radius(config.boid_radius),
            fill,
            outline: Rgb::WHITE,
            outline_thickness: config.outline_thickness,
        };
        (boid, appearance)
    }

    pub fn set_perching(&mut self, perching: bool) {
        self.is_perching = perching;
    }

    pub fn id(&self) -> BoidId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_perching(&self) -> bool {
        self.is_perching
    }

    pub fn perch_timer(&self) -> u32 {
        self.perch_timer
    }
}

fn random_unit(rng: &mut impl RandomSource) -> Vec2 {
    let angle = rng.next_unit() * TAU;
    Vec2::new(angle.cos(), angle.sin())
}

fn random_color(rng: &mut impl RandomSource) -> Rgb {
    let mut channel = || (rng.next_unit() * 256.0).min(255.0) as u8;
    Rgb {
        r: channel(),
        g: channel(),
        b: channel(),
    }
}
