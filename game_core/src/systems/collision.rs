use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddles first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, config, events);
        for paddle in &paddles {
            bounce_off_paddle(ball, paddle, config, events);
        }
    }
}

/// Reflect off the top and bottom edges
pub fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;

    if ball.pos.y - radius < 0.0 {
        ball.pos.y = radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
    if ball.pos.y + radius > config.height {
        ball.pos.y = config.height - radius;
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Reflect off a paddle face and add spin
///
/// Overlap is tested against the ball's center only, and the direction of
/// travel is not checked, so a ball still inside the paddle's depth on the
/// next frame bounces again.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let paddle_x = config.paddle_x(paddle.side);

    if !paddle.spans(ball.pos.y, config.paddle_height) {
        return;
    }

    let touching = match paddle.side {
        Side::Left => ball.pos.x - radius < paddle_x + config.paddle_width,
        Side::Right => ball.pos.x + radius > paddle_x,
    };
    if !touching {
        return;
    }

    // Push ball out of paddle
    ball.pos.x = match paddle.side {
        Side::Left => paddle_x + config.paddle_width + radius,
        Side::Right => paddle_x - radius,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y += (ball.pos.y - paddle.center(config.paddle_height)) * config.spin_factor;

    events.ball_hit_paddle = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        let ball = world.query::<&Ball>().iter().next().map(|(_e, b)| *b);
        ball.unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 5.0), Vec2::new(6.0, -4.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos.y, config.ball_radius, "Ball clamped to top edge");
        assert_eq!(ball.vel.y, 4.0, "Y velocity reversed");
        assert_eq!(ball.vel.x, 6.0, "X velocity unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 595.0), Vec2::new(-6.0, 3.5));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos.y, config.height - config.ball_radius);
        assert_eq!(ball.vel.y, -3.5, "Y velocity reversed");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_touching_wall_exactly_does_not_bounce() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(400.0, config.ball_radius),
            Vec2::new(6.0, -1.0),
        );

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.y, -1.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);
        create_ball(&mut world, Vec2::new(10.0, 300.0), Vec2::new(-6.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos.x, 44.0, "Ball pushed just outside paddle face");
        assert_eq!(ball.vel.x, 6.0, "Ball should bounce right");
        assert_eq!(ball.vel.y, 0.0, "Center hit adds no spin");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, 250.0);
        create_ball(&mut world, Vec2::new(760.0, 300.0), Vec2::new(6.0, 1.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos.x, 768.0 - config.ball_radius);
        assert_eq!(ball.vel.x, -6.0, "Ball should bounce left");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_hit_adds_spin_from_offset() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);
        create_ball(&mut world, Vec2::new(40.0, 330.0), Vec2::new(-6.0, 1.0));

        check_collisions(&mut world, &config, &mut events);

        // 30 below center
        let ball = ball(&world);
        assert!((ball.vel.y - (1.0 + 30.0 * 0.15)).abs() < 1e-5);

        world.clear();
        create_paddle(&mut world, Side::Left, 250.0);
        create_ball(&mut world, Vec2::new(40.0, 260.0), Vec2::new(-6.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = self::ball(&world);
        assert!(ball.vel.y < 0.0, "Top half deflects upward");
    }

    #[test]
    fn test_right_paddle_hit_adds_mirrored_spin() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, 250.0);
        // 30 above center
        create_ball(&mut world, Vec2::new(760.0, 270.0), Vec2::new(6.0, 1.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x, -6.0);
        assert!((ball.vel.y - (1.0 - 30.0 * 0.15)).abs() < 1e-5);
        assert!(ball.vel.y < 0.0, "Top half deflects upward");
    }

    #[test]
    fn test_paddle_hit_preserves_horizontal_speed() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, 100.0);
        create_ball(&mut world, Vec2::new(765.0, 190.0), Vec2::new(7.25, -2.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x.abs(), 7.25);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_ball_outside_paddle_span_passes() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);
        // Exactly on the paddle's top edge
        create_ball(&mut world, Vec2::new(30.0, 250.0), Vec2::new(-6.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.x, -6.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_inside_paddle_depth_bounces_regardless_of_direction() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);
        // Already moving away, but still overlapping the paddle face
        create_ball(&mut world, Vec2::new(40.0, 300.0), Vec2::new(6.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.x, -6.0, "No already-bounced guard");
        assert_eq!(ball.pos.x, 44.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, 250.0);

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
