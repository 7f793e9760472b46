//! Contact geometry for the hook, fish, obstacles and boat
//!
//! Everything here is a pure function of positions. The frame step in
//! `tick` decides what to do with a hit.

use glam::Vec2;
use rand::Rng;

use super::state::{Boat, Fish, Hook, Obstacle};
use crate::consts::*;
use crate::within_reach;

/// Distance under which a fish is hooked
#[inline]
pub fn catch_reach(fish_radius: f32) -> f32 {
    fish_radius + CATCH_MARGIN
}

/// Check whether the hook is close enough to snag a fish
pub fn hook_catches(hook: &Hook, fish: &Fish) -> bool {
    within_reach(hook.pos(), fish.pos, catch_reach(fish.radius()))
}

/// Check whether the hook overlaps an obstacle
pub fn hook_hits_obstacle(hook: &Hook, obstacle: &Obstacle) -> bool {
    within_reach(hook.pos(), obstacle.pos, hook.radius + obstacle.radius)
}

/// Index of the first obstacle the hook overlaps (scan order wins)
pub fn first_obstacle_hit(hook: &Hook, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|o| hook_hits_obstacle(hook, o))
}

/// Hook has come back up to the boat (within tolerance)
pub fn hook_at_boat(hook: &Hook, boat: &Boat) -> bool {
    hook.world_y <= boat.world_y + DELIVERY_TOLERANCE
}

/// Where a caught fish in `slot` wants to sit relative to the hook.
///
/// Slots fan out to the right and stack upward.
pub fn slot_target(hook: &Hook, slot: usize) -> Vec2 {
    let slot = slot as f32;
    Vec2::new(
        hook.x + slot * SLOT_STRIDE_X,
        hook.world_y - SLOT_LIFT - slot * SLOT_STRIDE_Y,
    )
}

/// Scatter point for a fish knocked off the hook: jittered sideways and
/// dropped beneath the obstacle's edge.
///
/// The drop also clears the hook's catch reach. Free fish only swim
/// horizontally, so a hook left where it is cannot snag them straight back.
pub fn release_position<R: Rng>(obstacle: &Obstacle, hook: &Hook, fish: &Fish, rng: &mut R) -> Vec2 {
    let jitter = (rng.random::<f32>() - 0.5) * RELEASE_JITTER_X;
    let drop = rng.random::<f32>() * RELEASE_DROP_Y;
    let below_obstacle = obstacle.pos.y + obstacle.radius + fish.radius();
    let below_reach = hook.world_y + catch_reach(fish.radius()) + 1.0;
    Vec2::new(fish.pos.x + jitter, below_obstacle.max(below_reach) + drop)
}
