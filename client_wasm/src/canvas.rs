//! Canvas 2D drawing surface

use game_core::{DrawSurface, Tint};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::css_rgba;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or_else(|| "Canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| format!("Unexpected context type: {:?}", e))?;

        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], tint: Tint) {
        self.ctx.set_stroke_style_str(&css_rgba(tint));
        self.ctx.begin_path();
        for (from, to) in segments {
            self.ctx.move_to(from.x as f64, from.y as f64);
            self.ctx.line_to(to.x as f64, to.y as f64);
        }
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, tint: Tint) {
        self.ctx.set_fill_style_str(&css_rgba(tint));
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, tint: Tint, glow: f32) {
        let color = css_rgba(tint);

        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            console_log!("Failed to trace circle: {:?}", e);
            return;
        }

        self.ctx.set_fill_style_str(&color);
        self.ctx.set_shadow_color(&color);
        self.ctx.set_shadow_blur(glow as f64);
        self.ctx.fill();
        // Glow must not leak into the next frame's shapes
        self.ctx.set_shadow_blur(0.0);
    }
}
