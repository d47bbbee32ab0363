use hecs::World;

use crate::{Command, CommandQueue, Config, Paddle, Side};

/// Apply queued host commands to the player paddle
///
/// Only the latest pointer position matters; earlier ones are dropped.
pub fn ingest_commands(world: &mut World, config: &Config, commands: &mut CommandQueue) {
    let mut target = None;
    for command in commands.drain() {
        match command {
            Command::PointerMoved { y } => target = Some(y),
        }
    }

    let pointer_y = match target {
        Some(y) => y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0);
        }
    }
}
