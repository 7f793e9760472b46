//! Deep Sea Fishing - A depth-scrolling arcade fishing game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (camera, boat, hook, fish, collisions)
//! - `tuning`: Data-driven species and level tables
//! - `renderer`: Draw-call composition against an abstract 2D surface
//! - `assets`: Image cache with placeholder fallback
//! - `audio`: Cue playback capability
//! - `game`: Orchestrator tying input, simulation, timer and HUD together

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{Game, LoopStep};
pub use settings::{BoatSkin, HookSkin, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Water surface height as a fraction of the viewport height
    pub const WATER_SURFACE_RATIO: f32 = 0.35;

    /// Boat geometry and motion
    pub const BOAT_WIDTH: f32 = 120.0;
    pub const BOAT_HEIGHT: f32 = 80.0;
    /// How far the boat may sink below its resting depth
    pub const BOAT_MAX_DIVE: f32 = 500.0;
    /// Fraction of hook depth the boat follows
    pub const BOAT_DAMPING: f32 = 0.25;
    /// Per-frame easing toward the boat's target depth (heavier than the hook)
    pub const BOAT_FOLLOW_RATE: f32 = 0.04;

    /// Hook defaults
    pub const HOOK_STEP: f32 = 20.0;
    pub const HOOK_HORIZONTAL_SPEED: f32 = 5.0;
    pub const HOOK_CAPACITY: usize = 5;
    pub const HOOK_RADIUS: f32 = 15.0;
    /// Offset below the boat where a docked hook rests
    pub const HOOK_DOCK_OFFSET: f32 = 15.0;
    /// Hook can't get closer than this to the sea floor
    pub const HOOK_BOTTOM_MARGIN: f32 = 50.0;
    /// Horizontal clamp margin from the viewport edges
    pub const HOOK_SIDE_MARGIN: f32 = 20.0;

    /// Extra reach added to a fish radius when testing for a catch
    pub const CATCH_MARGIN: f32 = 10.0;
    /// Hook within this distance of the boat delivers its catch
    pub const DELIVERY_TOLERANCE: f32 = 15.0;

    /// Caught fish trail the hook in a fanned stack
    pub const SLOT_STRIDE_X: f32 = 35.0;
    pub const SLOT_STRIDE_Y: f32 = 40.0;
    pub const SLOT_LIFT: f32 = 50.0;
    /// Fraction of the gap to its slot a caught fish closes each frame
    pub const FOLLOW_RATE: f32 = 0.2;

    /// Camera tuning
    pub const CAMERA_COMFORT_BAND: f32 = 100.0;
    pub const CAMERA_RATE_UP: f32 = 0.08;
    pub const CAMERA_RATE_DOWN: f32 = 0.05;
    pub const CAMERA_BIAS_DESCENDING: f32 = 0.7;
    pub const CAMERA_BIAS_ASCENDING: f32 = 1.2;

    /// Fish spawning
    pub const FISH_MIN_SPEED: f32 = 1.0;
    pub const FISH_MAX_SPEED: f32 = 3.0;
    /// Fish enter within this many pixels of their starting edge
    pub const FISH_EDGE_SPREAD: f32 = 100.0;
    pub const FALLBACK_FISH_SIZE: f32 = 60.0;
    pub const FALLBACK_FISH_POINTS: u32 = 10;

    /// Obstacle spawning
    pub const OBSTACLE_FIRST_DEPTH: f32 = 500.0;
    pub const OBSTACLE_FLOOR_CLEARANCE: f32 = 500.0;
    pub const OBSTACLE_STRIDE: f32 = 200.0;
    pub const OBSTACLE_BAND_HEIGHT: f32 = 150.0;
    pub const OBSTACLE_MIN_SIZE: f32 = 60.0;
    pub const OBSTACLE_SIZE_SPREAD: f32 = 40.0;
    /// Keeps obstacles fully inside the viewport horizontally
    pub const OBSTACLE_SIDE_ROOM: f32 = 80.0;
    /// Released fish scatter this far horizontally (total span)
    pub const RELEASE_JITTER_X: f32 = 100.0;
    /// Released fish drop up to this far below the obstacle edge
    pub const RELEASE_DROP_Y: f32 = 50.0;

    /// Countdown ticks once per simulated second
    pub const TIMER_INTERVAL_MS: i32 = 1000;
}

/// Distance between two points, `None` when degenerate (NaN, infinite or coincident).
#[inline]
pub fn finite_distance(a: Vec2, b: Vec2) -> Option<f32> {
    let d = a.distance(b);
    (d.is_finite() && d > 0.0).then_some(d)
}

/// Strict-less-than contact test between two points.
///
/// Degenerate geometry never counts as contact.
#[inline]
pub fn within_reach(a: Vec2, b: Vec2, reach: f32) -> bool {
    match finite_distance(a, b) {
        Some(d) => reach.is_finite() && d < reach,
        None => false,
    }
}

/// Exponential easing of `current` toward `target` by `rate` (0-1).
#[inline]
pub fn ease_toward(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}
