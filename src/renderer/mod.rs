//! 2D rendering module
//!
//! The scene is composed as draw calls against the `Surface` trait. In the
//! browser `CanvasSurface` forwards them to a `CanvasRenderingContext2d`;
//! tests record them instead.

pub mod palette;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use palette::{Palette, palette};
pub use scene::draw_frame;

use glam::Vec2;

/// RGBA colour, alpha in 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const PLACEHOLDER: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Darken toward black with per-channel weights scaled by `amount` (0-1)
    pub fn darken(self, amount: f32, weights: [f32; 3]) -> Self {
        let sub = |c: u8, w: f32| (c as f32 - amount * w).max(0.0) as u8;
        Self {
            r: sub(self.r, weights[0]),
            g: sub(self.g, weights[1]),
            b: sub(self.b, weights[2]),
            a: self.a,
        }
    }

    /// CSS colour string
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` centred on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }
}

/// Line style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub dashed: bool,
}

/// Abstract 2D drawing target sized to the viewport
pub trait Surface {
    /// Ready-to-draw image handle
    type Image;

    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Vertical gradient over `rect`; stops are `(offset 0-1, colour)`
    fn fill_gradient(&mut self, rect: Rect, stops: &[(f32, Color)]);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_path(&mut self, points: &[Vec2], stroke: Stroke);
    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke);
    /// `mirrored` flips the image horizontally within `rect`
    fn draw_image(&mut self, image: &Self::Image, rect: Rect, mirrored: bool);
    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, color: Color);
}
