//! Vertical scroll camera
//!
//! Follows the hook through the water column with asymmetric smoothing:
//! snappy when pulling back toward the surface, lazy when sinking.

use serde::{Deserialize, Serialize};

use super::state::{HookState, Viewport};
use crate::consts::*;
use crate::ease_toward;

/// Scroll offset in world pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position_y: f32,
    pub target_y: f32,
}

/// How far below (< 1) or above (> 1) center the hook is framed
fn bias_for(state: HookState) -> f32 {
    match state {
        HookState::Descending => CAMERA_BIAS_DESCENDING,
        HookState::Ascending => CAMERA_BIAS_ASCENDING,
        _ => 1.0,
    }
}

impl Camera {
    /// Advance one frame toward the hook. `max_y` is `world_height - viewport height`.
    pub fn update(&mut self, hook_world_y: f32, hook_state: HookState, viewport: &Viewport, max_y: f32) {
        let max_y = max_y.max(0.0);

        if hook_world_y <= viewport.water_surface_y() {
            self.target_y = 0.0;
        } else {
            let center = viewport.center_y();
            let hook_screen_y = hook_world_y - self.position_y;
            // Inside the comfort band the previous target stands
            if (hook_screen_y - center).abs() > CAMERA_COMFORT_BAND {
                self.target_y = hook_world_y - center * bias_for(hook_state);
            }
            self.target_y = self.target_y.clamp(0.0, max_y);
        }

        let rate = if self.target_y < self.position_y {
            CAMERA_RATE_UP
        } else {
            CAMERA_RATE_DOWN
        };
        self.position_y = ease_toward(self.position_y, self.target_y, rate).clamp(0.0, max_y);
    }

    /// Jump straight to the top of the world
    pub fn reset(&mut self) {
        self.position_y = 0.0;
        self.target_y = 0.0;
    }
}
