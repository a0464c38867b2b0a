//! Collision handling for the court: keeping the ball inside the walls and
//! bouncing it off athletes' heads.

use glam::Vec2;

use crate::consts::*;
use crate::state::{Athlete, Ball};

/// Keep the ball inside the court. Side walls and the ceiling reflect it at
/// full speed; the floor bounce loses energy so the ball settles over time.
pub fn confine_ball(ball: &mut Ball) {
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.abs();
    }
    if ball.pos.x + ball.radius > COURT_WIDTH {
        ball.pos.x = COURT_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
    }
    if ball.pos.y + ball.radius > GROUND_Y {
        ball.pos.y = GROUND_Y - ball.radius;
        ball.vel.y = -ball.vel.y * FLOOR_RESTITUTION;
    }
}

/// Circle-circle test against the athlete's head. On contact the ball leaves
/// along the ball-to-head angle with amplified speed, picks up a share of the
/// athlete's horizontal momentum plus an upward kick, and is pushed just
/// clear of the head so it cannot stick across frames.
///
/// Returns whether a rebound happened.
pub fn head_rebound(ball: &mut Ball, athlete: &Athlete) -> bool {
    let head = athlete.head_center();
    let delta = ball.pos - head;
    let dist = delta.length();

    if dist >= ball.radius + athlete.head_radius {
        return false;
    }

    let angle = delta.y.atan2(delta.x);
    let speed = ball.vel.length();

    ball.vel.x = angle.cos() * speed * HEAD_BOUNCE_GAIN + athlete.vel.x * HEAD_MOMENTUM_TRANSFER;
    ball.vel.y = angle.sin() * speed * HEAD_BOUNCE_GAIN + HEAD_BOUNCE_LIFT;

    let separation = ball.radius + athlete.head_radius + HEAD_SEPARATION;
    ball.pos = head + Vec2::new(angle.cos(), angle.sin()) * separation;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CourtSide;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: BALL_RADIUS,
        }
    }

    #[test]
    fn test_left_wall_reflects_rightward() {
        let mut ball = ball_at(5.0, 200.0, -6.0, 0.0);

        confine_ball(&mut ball);

        assert_eq!(ball.pos.x, BALL_RADIUS);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_right_wall_reflects_leftward() {
        let mut ball = ball_at(COURT_WIDTH - 5.0, 200.0, 6.0, 0.0);

        confine_ball(&mut ball);

        assert_eq!(ball.pos.x, COURT_WIDTH - BALL_RADIUS);
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_ceiling_reflects_downward() {
        let mut ball = ball_at(400.0, 5.0, 0.0, -8.0);

        confine_ball(&mut ball);

        assert_eq!(ball.pos.y, BALL_RADIUS);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_floor_bounce_loses_energy() {
        let mut ball = ball_at(400.0, GROUND_Y - 1.0, 0.0, 10.0);

        confine_ball(&mut ball);

        assert_eq!(ball.pos.y, GROUND_Y - BALL_RADIUS);
        assert_eq!(ball.vel.y, -10.0 * FLOOR_RESTITUTION);
    }

    #[test]
    fn test_ball_clear_of_everything_is_untouched() {
        let mut ball = ball_at(400.0, 200.0, 3.0, 2.0);
        let before = ball;

        confine_ball(&mut ball);

        assert_eq!(ball.pos, before.pos);
        assert_eq!(ball.vel, before.vel);
    }

    #[test]
    fn test_head_rebound_pushes_ball_clear_of_the_head() {
        let athlete = Athlete::new(CourtSide::Left);
        let head = athlete.head_center();
        // Ball overlapping the head from the upper right, falling.
        let mut ball = ball_at(head.x + 20.0, head.y - 20.0, -2.0, 5.0);

        let hit = head_rebound(&mut ball, &athlete);

        assert!(hit);
        let dist = (ball.pos - head).length();
        assert!(dist >= ball.radius + athlete.head_radius);
    }

    #[test]
    fn test_head_rebound_amplifies_speed_and_adds_lift() {
        let mut athlete = Athlete::new(CourtSide::Left);
        athlete.vel.x = 0.0;
        let head = athlete.head_center();
        // Directly above the head, falling straight down at speed 10.
        let mut ball = ball_at(head.x, head.y - 30.0, 0.0, 10.0);

        assert!(head_rebound(&mut ball, &athlete));

        // Rebound is straight up: |vy| = 10 * gain, plus the upward kick.
        assert!((ball.vel.y - (-10.0 * HEAD_BOUNCE_GAIN + HEAD_BOUNCE_LIFT)).abs() < 1e-3);
        assert!(ball.vel.x.abs() < 1e-3);
    }

    #[test]
    fn test_head_rebound_transfers_running_momentum() {
        let mut athlete = Athlete::new(CourtSide::Left);
        athlete.vel.x = RUN_SPEED;
        let head = athlete.head_center();
        let mut ball = ball_at(head.x, head.y - 30.0, 0.0, 10.0);

        assert!(head_rebound(&mut ball, &athlete));

        assert!((ball.vel.x - RUN_SPEED * HEAD_MOMENTUM_TRANSFER).abs() < 1e-3);
    }

    #[test]
    fn test_no_rebound_without_overlap() {
        let athlete = Athlete::new(CourtSide::Left);
        let mut ball = ball_at(600.0, 100.0, 1.0, 1.0);
        let before = ball;

        assert!(!head_rebound(&mut ball, &athlete));
        assert_eq!(ball.pos, before.pos);
        assert_eq!(ball.vel, before.vel);
    }
}
