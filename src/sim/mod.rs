//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per displayed frame, one countdown step per second
//! - Seeded RNG only
//! - Stable iteration order (spawn order, attach order)
//! - No rendering or platform dependencies; sound goes through `CuePlayer`

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use camera::Camera;
pub use collision::{first_obstacle_hit, hook_at_boat, hook_catches, release_position, slot_target};
pub use spawn::populate_level;
pub use state::{
    Boat, Direction, Fish, FishId, GameState, Hook, HookState, LevelEnd, Obstacle, Session, Viewport,
};
pub use tick::{TickInput, deliver_catch, end_level, start_level, tick, tick_second};
