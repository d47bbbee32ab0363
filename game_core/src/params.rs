/// Game tuning parameters for Pong
///
/// Distances are surface pixels, speeds are pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between paddle and side edge

    // Opponent
    pub const OPPONENT_SPEED: f32 = 5.0;
    pub const OPPONENT_DEAD_ZONE: f32 = 16.0;

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED: f32 = 6.0;
    pub const SPIN_FACTOR: f32 = 0.15; // Extra vy per unit of offset from paddle center
    pub const MAX_LAUNCH_ANGLE: f32 = std::f32::consts::PI / 8.0; // 22.5°

    // Net
    pub const NET_DASH: f32 = 16.0;
    pub const NET_PERIOD: f32 = 32.0;

    // Palette (rgba)
    pub const NET_TINT: [f32; 4] = [0.0, 1.0, 1.0, 0.4];
    pub const PLAYER_TINT: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const OPPONENT_TINT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BALL_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL_GLOW: f32 = 15.0;
}
