//! Scene composition
//!
//! Turns a `GameState` into draw calls, back to front: water column, surface
//! waves, depth markers, sea floor, obstacles, line and hook, fish, boat.
//! Reads state only; nothing here feeds back into the simulation.

use glam::Vec2;

use super::palette::{DEPTH_DARKEN, Palette, depth_ratio, palette};
use super::{Color, Rect, Stroke, Surface};
use crate::assets::{ImageCache, ImageRef};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Direction, GameState};
use crate::tuning::species;

/// Hook sprite size and the line length past which the line sags
const HOOK_SPRITE: Vec2 = Vec2::new(30.0, 50.0);
const LINE_CURVE_MIN: f32 = 100.0;
const LINE_ANCHOR_DROP: f32 = 15.0;

const WAVE_SAMPLE_STEP: f32 = 10.0;
const WAVE_BAND: f32 = 20.0;

const FLOOR_BAND: f32 = 80.0;
const FLOOR_LIFT: f32 = 30.0;
const ROCK_SPACING: f32 = 120.0;

const MARKER_LABEL_INSET: f32 = 70.0;

/// Draw one frame. `time_secs` drives the wave and line sway.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    state: &GameState,
    images: &ImageCache<S::Image>,
    settings: &Settings,
    time_secs: f64,
) {
    let time = if settings.reduced_motion { 0.0 } else { time_secs as f32 };
    let colors = palette(state.level.id);

    surface.clear();
    draw_water(surface, state, colors, time);
    draw_waves(surface, state, colors, time);
    draw_depth_markers(surface, state);
    draw_sea_floor(surface, state, colors);
    draw_obstacles(surface, state, images);
    draw_line_and_hook(surface, state, images, settings, time);
    draw_fish(surface, state, images);
    draw_boat(surface, state, images, settings);
}

fn draw_water<S: Surface>(surface: &mut S, state: &GameState, colors: &Palette, time: f32) {
    let size = surface.size();
    let surface_y = state.to_screen_y(state.viewport.water_surface_y());

    if surface_y > 0.0 {
        surface.fill_rect(Rect::new(0.0, 0.0, size.x, surface_y.min(size.y)), colors.sky);
    }

    let top = surface_y.max(0.0);
    if top >= size.y {
        return;
    }
    let water = Rect::new(0.0, top, size.x, size.y - top);
    let ratio = depth_ratio(state.camera.position_y, state.level.world_height);
    let stops: Vec<(f32, Color)> = colors
        .stops
        .iter()
        .map(|(offset, color)| (*offset, color.darken(ratio, DEPTH_DARKEN)))
        .collect();
    surface.fill_rect(water, colors.base);
    surface.fill_gradient(water, &stops);

    // Drifting specks in the deeper levels
    if ratio > 0.1 && state.level.id > 1 {
        let count = (20.0 * ratio * state.level.id as f32) as u32;
        let speck = Color::rgba(255, 255, 255, 0.2);
        for i in 0..count {
            let x = unit_hash(i * 3) * size.x;
            let drift = time * (8.0 + 6.0 * unit_hash(i * 3 + 1));
            let y = water.y + (unit_hash(i * 3 + 2) * water.h + drift).rem_euclid(water.h.max(1.0));
            let r = 1.0 + unit_hash(i * 7 + 5) * state.level.id as f32;
            surface.fill_ellipse(Vec2::new(x, y), Vec2::splat(r), speck);
        }
    }
}

/// Screen-space points along the animated surface line
pub fn wave_points(surface_y: f32, width: f32, time: f32) -> Vec<Vec2> {
    let steps = (width / WAVE_SAMPLE_STEP).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let x = (i as f32 * WAVE_SAMPLE_STEP).min(width);
            let y = surface_y
                + (x * 0.015 + time * 2.0).sin() * 10.0
                + (x * 0.007 + time * 1.3).cos() * 6.0;
            Vec2::new(x, y)
        })
        .collect()
}

fn draw_waves<S: Surface>(surface: &mut S, state: &GameState, colors: &Palette, time: f32) {
    let size = surface.size();
    let surface_y = state.to_screen_y(state.viewport.water_surface_y());
    if surface_y < -WAVE_BAND || surface_y > size.y + WAVE_BAND {
        return;
    }

    let crest = wave_points(surface_y, size.x, time);
    let mut band = crest.clone();
    band.push(Vec2::new(size.x, surface_y + WAVE_BAND));
    band.push(Vec2::new(0.0, surface_y + WAVE_BAND));
    surface.fill_polygon(&band, colors.surface);
    surface.stroke_path(
        &crest,
        Stroke {
            color: Color::rgba(255, 255, 255, 0.6),
            width: 2.0,
            dashed: false,
        },
    );
}

fn draw_depth_markers<S: Surface>(surface: &mut S, state: &GameState) {
    let interval = state.level.marker_interval;
    if interval <= 0.0 {
        return;
    }
    let size = surface.size();
    let surface_y = state.to_screen_y(state.viewport.water_surface_y());
    let line = Stroke {
        color: Color::rgba(255, 255, 255, 0.4),
        width: 1.0,
        dashed: true,
    };

    let mut depth = interval;
    while depth < state.level.world_height {
        let y = state.to_screen_y(depth);
        if y > surface_y && y < size.y {
            let label = format!("{}m", (depth / 100.0).floor() as u32);
            surface.fill_text(
                &label,
                Vec2::new(size.x - MARKER_LABEL_INSET, y),
                16.0,
                Color::rgba(255, 255, 255, 0.7),
            );
            surface.stroke_path(&[Vec2::new(0.0, y), Vec2::new(size.x, y)], line);
        }
        depth += interval;
    }
}

fn draw_sea_floor<S: Surface>(surface: &mut S, state: &GameState, colors: &Palette) {
    let size = surface.size();
    let floor_y = state.to_screen_y(state.level.world_height);
    if floor_y >= size.y + FLOOR_LIFT + 20.0 {
        return;
    }

    surface.fill_rect(
        Rect::new(0.0, floor_y - FLOOR_LIFT, size.x, FLOOR_BAND),
        colors.floor,
    );

    let mut i = 0u32;
    let mut x = 0.0;
    while x < size.x {
        let seed = i * 5 + state.level.id * 101;
        let height = 20.0 + unit_hash(seed) * 25.0;
        let center = Vec2::new(x + unit_hash(seed + 1) * 100.0, floor_y - height / 2.0);
        let radii = Vec2::new(30.0 + unit_hash(seed + 2) * 20.0, height / 2.0);
        surface.fill_ellipse(center, radii, colors.rocks);
        x += ROCK_SPACING;
        i += 1;
    }
}

fn draw_obstacles<S: Surface>(surface: &mut S, state: &GameState, images: &ImageCache<S::Image>) {
    let height = surface.size().y;
    for obstacle in &state.obstacles {
        let center = Vec2::new(obstacle.pos.x, state.to_screen_y(obstacle.pos.y));
        if !on_screen(center.y, obstacle.size, height) {
            continue;
        }
        draw_sprite(
            surface,
            images,
            obstacle.kind.image(),
            Rect::centered(center, obstacle.size),
            false,
        );
    }
}

/// Control point for the fishing line, or `None` when it is short enough to be straight
pub fn line_control(from: Vec2, to: Vec2, time: f32) -> Option<Vec2> {
    let length = to.y - from.y;
    if length <= LINE_CURVE_MIN {
        return None;
    }
    let sway = (time / 2.0).sin() * 20.0;
    Some(Vec2::new(from.x + (to.x - from.x) * 0.5 + sway, from.y + length * 0.5))
}

fn draw_line_and_hook<S: Surface>(
    surface: &mut S,
    state: &GameState,
    images: &ImageCache<S::Image>,
    settings: &Settings,
    time: f32,
) {
    let anchor = Vec2::new(
        state.boat.screen_x,
        state.to_screen_y(state.boat.world_y) + LINE_ANCHOR_DROP,
    );
    let hook = Vec2::new(state.hook.x, state.to_screen_y(state.hook.world_y));
    let line = Stroke {
        color: Color::rgba(0, 0, 0, 0.8),
        width: 2.0,
        dashed: false,
    };

    match line_control(anchor, hook, time) {
        Some(control) => surface.stroke_quadratic(anchor, control, hook, line),
        None => surface.stroke_path(&[anchor, hook], line),
    }

    draw_sprite(
        surface,
        images,
        settings.hook.as_str(),
        Rect::new(hook.x - HOOK_SPRITE.x / 2.0, hook.y, HOOK_SPRITE.x, HOOK_SPRITE.y),
        false,
    );
}

fn draw_fish<S: Surface>(surface: &mut S, state: &GameState, images: &ImageCache<S::Image>) {
    let height = surface.size().y;
    let surface_y = state.to_screen_y(state.viewport.water_surface_y());

    for fish in &state.fish {
        let y = state.to_screen_y(fish.pos.y);
        // Nothing swims in the sky
        if y < surface_y - fish.size || !on_screen(y, fish.size, height) {
            continue;
        }
        let key = species(fish.species).map(|s| s.image).unwrap_or("fish1");
        let mirrored = !fish.caught && fish.direction == Direction::Left;
        draw_sprite(
            surface,
            images,
            key,
            Rect::centered(Vec2::new(fish.pos.x, y), fish.size),
            mirrored,
        );
    }
}

fn draw_boat<S: Surface>(
    surface: &mut S,
    state: &GameState,
    images: &ImageCache<S::Image>,
    settings: &Settings,
) {
    let y = state.to_screen_y(state.boat.world_y);
    if y > surface.size().y || y + BOAT_HEIGHT < 0.0 {
        return;
    }
    let rect = Rect::new(state.boat.screen_x - BOAT_WIDTH / 2.0, y, BOAT_WIDTH, BOAT_HEIGHT);
    draw_sprite(surface, images, settings.boat.as_str(), rect, false);
}

/// Draw an image, or the red "Missing" box when it isn't available
fn draw_sprite<S: Surface>(
    surface: &mut S,
    images: &ImageCache<S::Image>,
    key: &str,
    rect: Rect,
    mirrored: bool,
) {
    match images.get(key) {
        ImageRef::Ready(image) => surface.draw_image(image, rect, mirrored),
        ImageRef::Placeholder => {
            surface.fill_rect(rect, Color::PLACEHOLDER);
            let text_size = (rect.h * 0.12).max(8.0);
            surface.fill_text(
                "Missing",
                Vec2::new(rect.x + rect.w * 0.25, rect.y + rect.h * 0.5),
                text_size,
                Color::WHITE,
            );
        }
    }
}

fn on_screen(center_y: f32, size: f32, height: f32) -> bool {
    center_y + size >= 0.0 && center_y - size <= height
}

/// Stable pseudo-random value in [0, 1) for decorative scatter
fn unit_hash(seed: u32) -> f32 {
    let mut x = seed.wrapping_mul(0x9e37_79b9).wrapping_add(0x7f4a_7c15);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85eb_ca6b);
    x ^= x >> 13;
    x = x.wrapping_mul(0xc2b2_ae35);
    x ^= x >> 16;
    (x >> 8) as f32 / (1u32 << 24) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Fish, Obstacle, Viewport};
    use crate::tuning::{ObstacleKind, SpeciesId, level};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Rect(Rect, Color),
        Gradient,
        Ellipse,
        Polygon,
        Path(usize, bool),
        Quadratic,
        Image(String, Rect, bool),
        Text(String),
    }

    /// Records every call for inspection
    struct Recorder {
        size: Vec2,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                size: Vec2::new(1000.0, 720.0),
                ops: Vec::new(),
            }
        }

        fn images(&self) -> Vec<(&str, bool)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Image(key, _, mirrored) => Some((key.as_str(), *mirrored)),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        type Image = String;

        fn size(&self) -> Vec2 {
            self.size
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ops.push(Op::Rect(rect, color));
        }
        fn fill_gradient(&mut self, _rect: Rect, _stops: &[(f32, Color)]) {
            self.ops.push(Op::Gradient);
        }
        fn fill_ellipse(&mut self, _center: Vec2, _radii: Vec2, _color: Color) {
            self.ops.push(Op::Ellipse);
        }
        fn fill_polygon(&mut self, _points: &[Vec2], _color: Color) {
            self.ops.push(Op::Polygon);
        }
        fn stroke_path(&mut self, points: &[Vec2], stroke: Stroke) {
            self.ops.push(Op::Path(points.len(), stroke.dashed));
        }
        fn stroke_quadratic(&mut self, _from: Vec2, _control: Vec2, _to: Vec2, _stroke: Stroke) {
            self.ops.push(Op::Quadratic);
        }
        fn draw_image(&mut self, image: &String, rect: Rect, mirrored: bool) {
            self.ops.push(Op::Image(image.clone(), rect, mirrored));
        }
        fn fill_text(&mut self, text: &str, _at: Vec2, _size_px: f32, _color: Color) {
            self.ops.push(Op::Text(text.to_string()));
        }
    }

    fn loaded(keys: &[&str]) -> ImageCache<String> {
        let mut cache = ImageCache::new();
        for key in keys {
            cache.request(key);
            cache.resolve(key, Ok(key.to_string()));
        }
        cache
    }

    fn bare_state() -> GameState {
        GameState::new(level(1).unwrap(), Viewport::new(1000.0, 720.0), 4)
    }

    fn fish(id: u32, pos: Vec2, direction: Direction, caught: bool) -> Fish {
        Fish {
            id,
            pos,
            species: SpeciesId(2),
            direction,
            speed: 1.0,
            size: 55.0,
            caught,
            point_value: 15,
        }
    }

    #[test]
    fn test_fish_above_water_not_drawn() {
        let mut state = bare_state();
        let surface_y = state.viewport.water_surface_y();
        state.fish.push(fish(1, Vec2::new(300.0, surface_y - 100.0), Direction::Right, false));
        state.fish.push(fish(2, Vec2::new(300.0, surface_y + 100.0), Direction::Right, false));

        let mut out = Recorder::new();
        draw_frame(&mut out, &state, &loaded(&["fish2", "boat1", "hook1"]), &Settings::default(), 0.0);
        let fish_draws = out.images().iter().filter(|(k, _)| *k == "fish2").count();
        assert_eq!(fish_draws, 1);
    }

    #[test]
    fn test_left_swimmers_mirrored_unless_caught() {
        let mut state = bare_state();
        state.fish.push(fish(1, Vec2::new(200.0, 400.0), Direction::Left, false));
        state.fish.push(fish(2, Vec2::new(400.0, 400.0), Direction::Right, false));
        state.fish.push(fish(3, Vec2::new(600.0, 400.0), Direction::Left, true));

        let mut out = Recorder::new();
        draw_frame(&mut out, &state, &loaded(&["fish2"]), &Settings::default(), 0.0);
        let fish: Vec<bool> = out
            .images()
            .iter()
            .filter(|(k, _)| *k == "fish2")
            .map(|(_, m)| *m)
            .collect();
        assert_eq!(fish, vec![true, false, false]);
    }

    #[test]
    fn test_missing_image_draws_placeholder() {
        let mut state = bare_state();
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(500.0, 500.0), 60.0, ObstacleKind::Jellyfish));

        let mut out = Recorder::new();
        draw_frame(&mut out, &state, &loaded(&["boat1", "hook1"]), &Settings::default(), 0.0);
        assert!(out.images().iter().all(|(k, _)| *k != "jellyfish"));
        assert!(out.ops.contains(&Op::Rect(
            Rect::centered(Vec2::new(500.0, 500.0), 60.0),
            Color::PLACEHOLDER
        )));
        assert_eq!(out.texts().iter().filter(|t| **t == "Missing").count(), 1);
    }

    #[test]
    fn test_depth_markers_below_surface() {
        let state = bare_state();
        let mut out = Recorder::new();
        draw_frame(&mut out, &state, &loaded(&[]), &Settings::default(), 0.0);
        let labels: Vec<&str> = out.texts().into_iter().filter(|t| t.ends_with('m')).collect();
        // Surface sits at 252px; markers every 300 world px on level 1
        assert_eq!(labels, vec!["3m", "6m"]);
        assert!(out.ops.contains(&Op::Path(2, true)));
    }

    #[test]
    fn test_line_curves_only_when_long() {
        let from = Vec2::new(500.0, 100.0);
        assert!(line_control(from, Vec2::new(520.0, 180.0), 0.0).is_none());
        let control = line_control(from, Vec2::new(600.0, 500.0), 0.0).unwrap();
        assert_eq!(control, Vec2::new(550.0, 300.0));
    }

    #[test]
    fn test_docked_hook_draws_straight_line() {
        let state = bare_state();
        let mut out = Recorder::new();
        draw_frame(&mut out, &state, &loaded(&["boat1", "hook1"]), &Settings::default(), 0.0);
        assert!(!out.ops.contains(&Op::Quadratic));
        let images = out.images();
        assert_eq!(images.last(), Some(&("boat1", false)));
        assert!(images.contains(&("hook1", false)));
    }

    #[test]
    fn test_sea_floor_only_near_bottom() {
        let mut state = bare_state();
        let mut out = Recorder::new();
        draw_frame(&mut out, &state, &loaded(&[]), &Settings::default(), 0.0);
        let floor = palette(1).floor;
        assert!(!out.ops.iter().any(|op| matches!(op, Op::Rect(_, c) if *c == floor)));

        state.camera.position_y = state.max_camera_y();
        let mut out = Recorder::new();
        draw_frame(&mut out, &state, &loaded(&[]), &Settings::default(), 0.0);
        assert!(out.ops.iter().any(|op| matches!(op, Op::Rect(_, c) if *c == floor)));
    }

    #[test]
    fn test_waves_follow_formula() {
        let points = wave_points(200.0, 100.0, 0.0);
        assert_eq!(points.len(), 11);
        assert!((points[0].y - (200.0 + 6.0)).abs() < 0.001);
        assert_eq!(points.last().map(|p| p.x), Some(100.0));
    }

    #[test]
    fn test_unit_hash_range() {
        for seed in 0..1000 {
            let v = unit_hash(seed);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
