use glam::Vec2;
use log::{debug, info, trace};

use crate::boid::{Boid, BoidId};
use crate::config::FlockConfig;
use crate::error::Result;
use crate::render::{Appearance, Pose, Renderer};
use crate::rng::RandomSource;

/// Read-only copy of a boid's kinematics, taken at the start of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    pub id: BoidId,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Kinematics {
    pub fn of(boid: &Boid) -> Self {
        Self {
            id: boid.id,
            position: boid.position,
            velocity: boid.velocity,
        }
    }
}

/// The four weighted rules for one boid, before their weights are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Forces {
    pub homing: Vec2,
    pub separation: Vec2,
    pub cohesion: Vec2,
    pub alignment: Vec2,
}

impl Forces {
    pub fn compute(
        config: &FlockConfig,
        target: Vec2,
        me: &Kinematics,
        others: &[Kinematics],
    ) -> Self {
        let (cohesion, alignment) = cohesion_and_alignment(config, me, others);
        Self {
            homing: (target - me.position) / config.homing_divisor,
            separation: separation(me, others, config.safety_distance),
            cohesion,
            alignment,
        }
    }

    pub fn weighted(&self, config: &FlockConfig) -> Vec2 {
        self.homing * config.homing_weight
            + self.separation * config.separation_weight
            + self.cohesion * config.cohesion_weight
            + self.alignment * config.alignment_weight
    }
}

/// Other boids strictly inside `(0, radius)` of `me`.
fn neighbors<'a>(
    me: &'a Kinematics,
    others: &'a [Kinematics],
    radius: f32,
) -> impl Iterator<Item = &'a Kinematics> + 'a {
    others.iter().filter(move |other| {
        if other.id == me.id {
            return false;
        }
        let dist = me.position.distance(other.position);
        dist > 0.0 && dist < radius
    })
}

/// Mean offset away from every boid closer than `safety_distance`.
pub fn separation(me: &Kinematics, others: &[Kinematics], safety_distance: f32) -> Vec2 {
    let (sum, count) = neighbors(me, others, safety_distance)
        .fold((Vec2::ZERO, 0u32), |(sum, n), other| {
            (sum + (me.position - other.position), n + 1)
        });
    if count == 0 {
        Vec2::ZERO
    } else {
        sum / count as f32
    }
}

/// Pull toward the neighbours' centre and their mean velocity, in one scan.
pub fn cohesion_and_alignment(
    config: &FlockConfig,
    me: &Kinematics,
    others: &[Kinematics],
) -> (Vec2, Vec2) {
    let (pos_sum, vel_sum, count) = neighbors(me, others, config.perceptual_distance).fold(
        (Vec2::ZERO, Vec2::ZERO, 0u32),
        |(p, v, n), other| (p + other.position, v + other.velocity, n + 1),
    );
    if count == 0 {
        return (Vec2::ZERO, Vec2::ZERO);
    }
    let n = count as f32;
    let cohesion = (pos_sum / n - me.position) * config.clamping_mag;
    let alignment = (vel_sum / n - me.velocity) * config.schooling_mag;
    (cohesion, alignment)
}

/// Constant push back inside the viewport, per axis, when within `radius`
/// of an edge. Not weighted.
pub fn boundary_push(position: Vec2, radius: f32, config: &FlockConfig) -> Vec2 {
    let push = |coord: f32, extent: f32| {
        if coord < radius {
            config.turn_factor
        } else if coord > extent - radius {
            -config.turn_factor
        } else {
            0.0
        }
    };
    Vec2::new(
        push(position.x, config.width),
        push(position.y, config.height),
    )
}

/// Rescale `velocity` into `[min, max]`. A zero vector is returned untouched.
pub fn clamp_speed(velocity: Vec2, min: f32, max: f32) -> Vec2 {
    let length = velocity.length();
    if length == 0.0 {
        velocity
    } else if length > max {
        velocity / length * max
    } else if length < min {
        velocity / length * min
    } else {
        velocity
    }
}

/// A fixed population of boids plus the homing target they steer toward.
pub struct Flock {
    config: FlockConfig,
    boids: Vec<Boid>,
    appearances: Vec<Appearance>,
    target: Vec2,
    // Start-of-frame state every force computation reads from.
    snapshot: Vec<Kinematics>,
}

impl Flock {
    /// Spawn `config.boid_count` boids at the configured spawn point.
    pub fn new(config: FlockConfig, rng: &mut impl RandomSource) -> Result<Self> {
        config.validate()?;
        let positions = vec![config.spawn_point(); config.boid_count];
        Self::build(config, &positions, rng)
    }

    /// One boid per entry of `positions`, ids following slice order.
    /// Overrides `config.boid_count`.
    pub fn with_positions(
        mut config: FlockConfig,
        positions: &[Vec2],
        rng: &mut impl RandomSource,
    ) -> Result<Self> {
        config.boid_count = positions.len();
        config.validate()?;
        Self::build(config, positions, rng)
    }

    fn build(config: FlockConfig, positions: &[Vec2], rng: &mut impl RandomSource) -> Result<Self> {
        let (boids, appearances): (Vec<_>, Vec<_>) = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| Boid::new(BoidId(i as u32), position, &config, rng))
            .unzip();

        info!(
            "flock of {} boids, viewport {}x{}, ground at y={}",
            boids.len(),
            config.width,
            config.height,
            config.ground_level()
        );

        Ok(Self {
            target: config.initial_target(),
            snapshot: Vec::with_capacity(boids.len()),
            config,
            boids,
            appearances,
        })
    }

    /// Advance every boid by one frame.
    pub fn update(&mut self) {
        self.snapshot.clear();
        self.snapshot.extend(self.boids.iter().map(Kinematics::of));

        let ground = self.config.ground_level();
        let mut perching = 0usize;

        for (i, boid) in self.boids.iter_mut().enumerate() {
            if boid.is_perching {
                if boid.perch_timer > 0 {
                    boid.perch_timer -= 1;
                    perching += 1;
                    continue;
                }
                boid.set_perching(false);
                debug!("{} takes off", boid.id);
            }

            let forces = Forces::compute(&self.config, self.target, &self.snapshot[i], &self.snapshot);

            let grounded = boid.position.y > ground;
            if grounded {
                boid.position.y = ground;
                boid.set_perching(true);
                debug!("{} perches for {} frames", boid.id, boid.perch_timer);
            }
            let push = boundary_push(boid.position, boid.radius, &self.config);

            let velocity = boid.velocity + forces.weighted(&self.config) + push;
            boid.velocity = clamp_speed(velocity, self.config.vel_min, self.config.vel_max);

            // A boid that just landed stays on the ground.
            if !grounded {
                boid.position += boid.velocity;
            }
        }

        trace!("update: {} of {} boids perching", perching, self.boids.len());
    }

    /// Hand every boid's pose to `renderer`, in id order.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for (boid, appearance) in self.boids.iter().zip(&self.appearances) {
            let pose = Pose::from_motion(boid.position, boid.velocity);
            renderer.draw(boid.id, pose, appearance);
        }
    }

    /// Takes effect on the next [`Flock::update`]. Any point is accepted.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
        debug!("target moved to ({x}, {y})");
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boid(&self, id: BoidId) -> Option<&Boid> {
        self.boids.get(id.index())
    }

    pub fn appearances(&self) -> &[Appearance] {
        &self.appearances
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }
}
