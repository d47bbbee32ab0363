pub mod components;
pub mod config;
pub mod driver;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use params::*;
pub use render::{render, DrawSurface, Tint};
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the simulation by one frame
///
/// Speeds are per frame, so the host is expected to call this at a steady
/// display rate.
pub fn step(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    commands: &mut CommandQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest host commands (player paddle target)
    ingest_commands(world, config, commands);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 4. Scripted opponent follows the ball
    move_opponent(world, config);

    // 5. Serve again if the ball left the field
    check_scoring(world, config, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Complete simulation state, owned by the frame driver
pub struct Game {
    pub world: World,
    pub config: Config,
    pub events: Events,
    pub commands: CommandQueue,
    pub rng: GameRng,
}

impl Game {
    /// Centered paddles and a freshly served ball
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Left, config.paddle_start_y());
        create_paddle(&mut world, Side::Right, config.paddle_start_y());

        let mut ball = Ball::new(config.center(), Vec2::ZERO);
        ball.reset(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            config,
            events: Events::new(),
            commands: CommandQueue::new(),
            rng,
        }
    }

    pub fn update(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.events,
            &mut self.commands,
            &mut self.rng,
        );
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
    }
}
