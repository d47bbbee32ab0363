use crate::{Ball, Config, Events, GameRng};
use hecs::World;

/// Serve again once the ball leaves the field horizontally
///
/// No score is kept; the exit side is only reported through `events`.
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            events.ball_exited_left = true;
            ball.reset(config, rng);
        } else if ball.pos.x > config.width {
            events.ball_exited_right = true;
            ball.reset(config, rng);
        }
    }
}
