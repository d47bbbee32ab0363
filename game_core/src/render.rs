//! Frame rendering against an abstract 2D drawing surface
//!
//! Rendering only reads the game state, so drawing the same state twice
//! issues the same calls.

use glam::Vec2;

use crate::{Config, Game, Params, Side};

/// RGBA color, components in 0..=1
pub type Tint = [f32; 4];

/// Primitive operations a host surface provides
pub trait DrawSurface {
    /// Erase the whole surface
    fn clear(&mut self, width: f32, height: f32);
    /// Stroke each `(from, to)` segment as part of one path
    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], tint: Tint);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, tint: Tint);
    /// Filled circle; `glow` is a blur radius, 0 for none
    fn fill_circle(&mut self, center: Vec2, radius: f32, tint: Tint, glow: f32);
}

/// Paint one frame: clear, net, paddles, ball
pub fn render<S: DrawSurface>(game: &Game, surface: &mut S) {
    let config = &game.config;

    surface.clear(config.width, config.height);
    surface.stroke_segments(&net_segments(config), Params::NET_TINT);

    for side in [Side::Left, Side::Right] {
        if let Some(paddle) = game.paddle(side) {
            surface.fill_rect(
                config.paddle_x(side),
                paddle.y,
                config.paddle_width,
                config.paddle_height,
                paddle_tint(side),
            );
        }
    }

    if let Some(ball) = game.ball() {
        surface.fill_circle(
            ball.pos,
            config.ball_radius,
            Params::BALL_TINT,
            Params::BALL_GLOW,
        );
    }
}

/// Dashes of the center line, top to bottom
pub fn net_segments(config: &Config) -> Vec<(Vec2, Vec2)> {
    let x = config.width / 2.0;
    let mut segments = Vec::new();
    let mut y = 0.0;
    while y < config.height {
        segments.push((Vec2::new(x, y), Vec2::new(x, y + Params::NET_DASH)));
        y += Params::NET_PERIOD;
    }
    segments
}

pub fn paddle_tint(side: Side) -> Tint {
    match side {
        Side::Left => Params::PLAYER_TINT,
        Side::Right => Params::OPPONENT_TINT,
    }
}

/// A draw call captured by `RecordingSurface`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        width: f32,
        height: f32,
    },
    StrokeSegments {
        segments: Vec<(Vec2, Vec2)>,
        tint: Tint,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        tint: Tint,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        tint: Tint,
        glow: f32,
    },
}

/// Headless surface that records every call
///
/// Test fixture for checking what a frame draws; hosts draw to a real surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the calls recorded so far
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], tint: Tint) {
        self.ops.push(DrawOp::StrokeSegments {
            segments: segments.to_vec(),
            tint,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, tint: Tint) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            tint,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, tint: Tint, glow: f32) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            tint,
            glow,
        });
    }
}
