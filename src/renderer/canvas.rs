//! `Surface` over a browser 2D canvas context

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Color, Rect, Stroke, Surface};
use crate::error::GameError;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| GameError::Platform("canvas has no 2d context".into()))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the element's layout size
    pub fn fit_to_element(&self) -> Vec2 {
        let w = self.canvas.client_width().max(1) as u32;
        let h = self.canvas.client_height().max(1) as u32;
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
        Vec2::new(w as f32, h as f32)
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn apply_stroke(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
        let dash = if stroke.dashed {
            js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(10.0))
        } else {
            js_sys::Array::new()
        };
        let _ = self.ctx.set_line_dash(&dash);
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.set_fill(color);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_gradient(&mut self, rect: Rect, stops: &[(f32, Color)]) {
        let gradient = self.ctx.create_linear_gradient(
            0.0,
            rect.y as f64,
            0.0,
            (rect.y + rect.h) as f64,
        );
        for (offset, color) in stops {
            if let Err(e) = gradient.add_color_stop(offset.clamp(0.0, 1.0), &color.to_css()) {
                log::warn!("Bad gradient stop {}: {:?}", offset, e);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.set_fill(color);
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x.max(0.0) as f64,
            radii.y.max(0.0) as f64,
            0.0,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_fill(color);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_path(&mut self, points: &[Vec2], stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }

    fn stroke_quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx
            .quadratic_curve_to(control.x as f64, control.y as f64, to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Rect, mirrored: bool) {
        let result = if mirrored {
            self.ctx.save();
            let _ = self.ctx.translate((rect.x + rect.w) as f64, rect.y as f64);
            let _ = self.ctx.scale(-1.0, 1.0);
            let r = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                0.0,
                0.0,
                rect.w as f64,
                rect.h as f64,
            );
            self.ctx.restore();
            r
        } else {
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                rect.x as f64,
                rect.y as f64,
                rect.w as f64,
                rect.h as f64,
            )
        };
        if let Err(e) = result {
            log::warn!("drawImage failed: {:?}", e);
        }
    }

    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, color: Color) {
        self.set_fill(color);
        self.ctx.set_font(&format!("{}px Arial", size_px.round()));
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
