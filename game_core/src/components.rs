use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::resources::GameRng;

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,  // Player, driven by the pointer
    Right, // Scripted opponent
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to surface)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }

    /// Whether `y` lies strictly between the paddle's top and bottom edges
    pub fn spans(&self, y: f32, height: f32) -> bool {
        y > self.y && y < self.y + height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from the center: random side, launch angle within ±max_launch_angle
    ///
    /// Horizontal speed is always exactly `ball_speed`; the angle only sets
    /// the vertical component.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.center();

        let angle: f32 = if config.max_launch_angle > 0.0 {
            rng.0
                .gen_range(-config.max_launch_angle..config.max_launch_angle)
        } else {
            0.0
        };
        let direction = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        self.vel = Vec2::new(
            config.ball_speed * direction,
            config.ball_speed * angle.tan(),
        );
    }
}
