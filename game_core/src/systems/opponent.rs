use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Scripted opponent: follow the ball's height outside a dead zone
///
/// Moves a fixed step per frame toward the ball; no prediction.
pub fn move_opponent(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let ball_y = match ball_y {
        Some(y) => y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        let center = paddle.center(config.paddle_height);
        if ball_y < center - config.opponent_dead_zone {
            paddle.y -= config.opponent_speed;
        } else if ball_y > center + config.opponent_dead_zone {
            paddle.y += config.opponent_speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
