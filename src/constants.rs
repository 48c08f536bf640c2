// Viewport
pub const WINDOW_WIDTH: f32 = 720.0;
pub const WINDOW_HEIGHT: f32 = 360.0;
pub const GROUND_MARGIN: f32 = 10.0;

pub const BOID_COUNT: usize = 50;
pub const BOID_RADIUS: f32 = 1.0;

// Rule weights
pub const HOMING_WEIGHT: f32 = 1.0;
pub const HOMING_DIVISOR: f32 = 100.0;
pub const SEPARATION_WEIGHT: f32 = 0.05;
pub const COHESION_WEIGHT: f32 = 0.0005;
pub const ALIGNMENT_WEIGHT: f32 = 0.05;
pub const CLAMPING_MAG: f32 = 0.01;
pub const SCHOOLING_MAG: f32 = 0.125;

pub const SAFETY_DISTANCE: f32 = 30.0;
pub const PERCEPTUAL_DISTANCE: f32 = 150.0;
pub const TURN_FACTOR: f32 = 10.0;

pub const VEL_MIN: f32 = 5.0;
pub const VEL_MAX: f32 = 10.0;

// Frames spent on the ground once perched
pub const PERCH_TIMER_MIN: u32 = 100;
pub const PERCH_TIMER_MAX: u32 = 200;

pub const OUTLINE_THICKNESS: f32 = 1.0;
// Rotation between the triangle's local "forward" (-y) and the heading angle.
pub const HEADING_OFFSET_DEGREES: f32 = 90.0;

pub const DEFAULT_SEED: u64 = 42;
