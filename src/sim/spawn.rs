//! Level population
//!
//! Fish go into the level's depth bands, obstacles into fixed-stride slots
//! down the water column. Every call starts from empty lists, so a restart
//! never inherits entities from the previous attempt.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::{Direction, Fish, GameState, Obstacle};
use crate::consts::*;
use crate::tuning::{ObstacleKind, species};

/// Replace all fish and obstacles for the current level
pub fn populate_level(state: &mut GameState) {
    state.hook.attached.clear();
    spawn_fish(state);
    spawn_obstacles(state);
    log::info!(
        "Level {} ({}): {} fish, {} obstacles",
        state.level.id,
        state.level.name,
        state.fish.len(),
        state.obstacles.len()
    );
}

/// Fill each depth band with its configured number of fish
pub fn spawn_fish(state: &mut GameState) {
    state.fish.clear();

    let width = state.viewport.width;
    let bands = state.level.bands.clone();

    for band in &bands {
        for _ in 0..band.fish_count {
            let Some(&species_id) = state.level.species_pool.choose(&mut state.rng) else {
                log::warn!("Level {} has no species to spawn", state.level.id);
                return;
            };

            let (size, base_points) = match species(species_id) {
                Some(s) => (s.size, s.base_points),
                None => {
                    log::warn!("Unknown species {:?}, using fallback size/value", species_id);
                    (FALLBACK_FISH_SIZE, FALLBACK_FISH_POINTS)
                }
            };

            let direction = if state.rng.random_bool(0.5) {
                Direction::Right
            } else {
                Direction::Left
            };
            let edge_offset = state.rng.random::<f32>() * FISH_EDGE_SPREAD;
            let left = match direction {
                Direction::Right => edge_offset,
                Direction::Left => width - edge_offset,
            };
            let speed = state.rng.random_range(FISH_MIN_SPEED..FISH_MAX_SPEED);
            let world_y =
                band.min_depth + state.rng.random::<f32>() * (band.max_depth - band.min_depth);

            let id = state.next_fish_id();
            state.fish.push(Fish {
                id,
                pos: Vec2::new(left + size / 2.0, world_y),
                species: species_id,
                direction,
                speed,
                size,
                caught: false,
                point_value: base_points.max(band.floor_points),
            });
        }
    }
}

/// Scatter obstacles down the water column in fixed strides
pub fn spawn_obstacles(state: &mut GameState) {
    state.obstacles.clear();

    let floor = state.level.world_height - OBSTACLE_FLOOR_CLEARANCE;
    let per_stride = state.level.obstacle_density / 4;
    let room = (state.viewport.width - OBSTACLE_SIDE_ROOM).max(0.0);

    let mut depth = OBSTACLE_FIRST_DEPTH;
    while depth < floor {
        let count = per_stride + state.rng.random_range(0..2u32);
        for _ in 0..count {
            let kind = *ObstacleKind::ALL
                .choose(&mut state.rng)
                .unwrap_or(&ObstacleKind::Shell);
            let size = OBSTACLE_MIN_SIZE + state.rng.random::<f32>() * OBSTACLE_SIZE_SPREAD;
            let left = state.rng.random::<f32>() * room;
            let world_y = depth + state.rng.random::<f32>() * OBSTACLE_BAND_HEIGHT;
            state
                .obstacles
                .push(Obstacle::new(Vec2::new(left + size / 2.0, world_y), size, kind));
        }
        depth += OBSTACLE_STRIDE;
    }
}
