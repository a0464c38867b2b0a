//! Reactive stand-in controller for the athlete nobody is steering locally.
//!
//! It chases the ball's horizontal position at reduced speed and jumps when
//! the ball is close and overhead. It runs for the remote athlete whether or
//! not a second human is in the match; remote inputs are never transmitted.

use crate::consts::*;
use crate::state::{Athlete, Ball};

pub fn drive_opponent(athlete: &mut Athlete, ball: &Ball) {
    let center_x = athlete.pos.x + athlete.width / 2.0;

    if ball.pos.x > center_x + AI_FOLLOW_DEADZONE {
        athlete.vel.x = RUN_SPEED * AI_SPEED_FACTOR;
    } else if ball.pos.x < center_x - AI_FOLLOW_DEADZONE {
        athlete.vel.x = -RUN_SPEED * AI_SPEED_FACTOR;
    } else {
        athlete.vel.x = 0.0;
    }

    if (ball.pos.x - athlete.pos.x).abs() < AI_JUMP_RANGE
        && ball.pos.y < athlete.pos.y
        && !athlete.airborne
    {
        athlete.jump();
    }
}
