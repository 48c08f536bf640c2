use std::ops::RangeInclusive;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, Result};

/// Every tunable of the simulation in one place.
///
/// Coordinates are viewport coordinates: origin at the top-left corner, `y`
/// growing downwards, so the ground sits near `y = height`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
    pub width: f32,
    pub height: f32,
    /// Distance between the bottom edge and the ground level.
    pub ground_margin: f32,
    pub boid_count: usize,
    /// Where every boid starts. `None` means the viewport centre.
    pub spawn: Option<Vec2>,
    /// Initial homing target. `None` means the viewport centre.
    pub target: Option<Vec2>,
    pub homing_weight: f32,
    /// The homing pull is `(target - position) / homing_divisor`.
    pub homing_divisor: f32,
    pub separation_weight: f32,
    pub cohesion_weight: f32,
    pub alignment_weight: f32,
    /// Scale applied to the cohesion offset before weighting.
    pub clamping_mag: f32,
    /// Scale applied to the alignment offset before weighting.
    pub schooling_mag: f32,
    pub safety_distance: f32,
    pub perceptual_distance: f32,
    pub turn_factor: f32,
    pub vel_min: f32,
    pub vel_max: f32,
    pub boid_radius: f32,
    pub perch_timer_min: u32,
    pub perch_timer_max: u32,
    pub outline_thickness: f32,
    pub seed: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            ground_margin: GROUND_MARGIN,
            boid_count: BOID_COUNT,
            spawn: None,
            target: None,
            homing_weight: HOMING_WEIGHT,
            homing_divisor: HOMING_DIVISOR,
            separation_weight: SEPARATION_WEIGHT,
            cohesion_weight: COHESION_WEIGHT,
            alignment_weight: ALIGNMENT_WEIGHT,
            clamping_mag: CLAMPING_MAG,
            schooling_mag: SCHOOLING_MAG,
            safety_distance: SAFETY_DISTANCE,
            perceptual_distance: PERCEPTUAL_DISTANCE,
            turn_factor: TURN_FACTOR,
            vel_min: VEL_MIN,
            vel_max: VEL_MAX,
            boid_radius: BOID_RADIUS,
            perch_timer_min: PERCH_TIMER_MIN,
            perch_timer_max: PERCH_TIMER_MAX,
            outline_thickness: OUTLINE_THICKNESS,
            seed: DEFAULT_SEED,
        }
    }
}

impl FlockConfig {
    pub fn ground_level(&self) -> f32 {
        self.height - self.ground_margin
    }

    pub fn viewport_center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.spawn.unwrap_or_else(|| self.viewport_center())
    }

    pub fn initial_target(&self) -> Vec2 {
        self.target.unwrap_or_else(|| self.viewport_center())
    }

    pub fn perch_timer_range(&self) -> RangeInclusive<u32> {
        self.perch_timer_min..=self.perch_timer_max
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.ground_margin.is_finite()
            || self.ground_margin < 0.0
            || self.ground_margin >= self.height
        {
            return Err(ConfigError::InvalidGroundMargin(self.ground_margin));
        }
        if self.boid_count == 0 {
            return Err(ConfigError::NoAgents);
        }
        if !self.safety_distance.is_finite() || self.safety_distance <= 0.0 {
            return Err(ConfigError::InvalidSafetyDistance(self.safety_distance));
        }
        if !self.perceptual_distance.is_finite()
            || self.safety_distance >= self.perceptual_distance
        {
            return Err(ConfigError::SafetyNotInsidePerception {
                safety: self.safety_distance,
                perceptual: self.perceptual_distance,
            });
        }
        if !(self.vel_min.is_finite() && self.vel_max.is_finite())
            || self.vel_min <= 0.0
            || self.vel_min >= self.vel_max
        {
            return Err(ConfigError::InvalidVelocityBounds {
                min: self.vel_min,
                max: self.vel_max,
            });
        }
        if !self.boid_radius.is_finite() || self.boid_radius < 0.0 {
            return Err(ConfigError::InvalidRadius(self.boid_radius));
        }
        if self.perch_timer_min > self.perch_timer_max {
            return Err(ConfigError::InvalidPerchRange {
                min: self.perch_timer_min,
                max: self.perch_timer_max,
            });
        }

        let scalars = [
            ("homing_weight", self.homing_weight),
            ("separation_weight", self.separation_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("alignment_weight", self.alignment_weight),
            ("clamping_mag", self.clamping_mag),
            ("schooling_mag", self.schooling_mag),
            ("turn_factor", self.turn_factor),
            ("outline_thickness", self.outline_thickness),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(name));
        }
        if !self.homing_divisor.is_finite() || self.homing_divisor == 0.0 {
            return Err(ConfigError::NonFinite("homing_divisor"));
        }
        for (name, point) in [("spawn", self.spawn), ("target", self.target)] {
            if point.is_some_and(|p| !p.is_finite()) {
                return Err(ConfigError::NonFinite(name));
            }
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded flock config from {}", path.as_ref().display());
        Ok(config)
    }
}
