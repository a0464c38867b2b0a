//! Per-frame advancement of a live match.
//!
//! One [`tick`] call moves every entity by one frame: apply the local
//! player's input, let the fallback controller steer the other athlete,
//! integrate motion, resolve collisions, and check both hoops.

use crate::ai;
use crate::collision;
use crate::consts::*;
use crate::state::{ArenaState, Athlete, CourtSide};

/// The local player's input state for one frame.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Which athlete the local player controls.
    pub side: CourtSide,
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl TickInput {
    pub fn idle(side: CourtSide) -> Self {
        TickInput {
            side,
            move_left: false,
            move_right: false,
            jump: false,
        }
    }
}

/// A made basket. The scorer is the athlete defending the far side from the
/// hoop the ball dropped through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Basket {
    pub scorer: CourtSide,
    pub points: i32,
}

/// Advance the match by one frame. Returns the basket made this frame, if
/// any; the ball is already re-served when one is returned.
pub fn tick(state: &mut ArenaState, input: &TickInput) -> Option<Basket> {
    apply_input(state.athlete_mut(input.side), input);

    let ball = state.ball;
    ai::drive_opponent(state.athlete_mut(input.side.opposite()), &ball);

    integrate_athlete(&mut state.left);
    integrate_athlete(&mut state.right);

    state.ball.pos += state.ball.vel;
    state.ball.vel.y += BALL_GRAVITY;
    collision::confine_ball(&mut state.ball);

    collision::head_rebound(&mut state.ball, &state.left);
    collision::head_rebound(&mut state.ball, &state.right);

    check_baskets(state)
}

/// Direct velocity control: held keys set the run speed outright, releasing
/// them stops the athlete dead.
fn apply_input(athlete: &mut Athlete, input: &TickInput) {
    if input.move_left {
        athlete.vel.x = -RUN_SPEED;
    } else if input.move_right {
        athlete.vel.x = RUN_SPEED;
    } else {
        athlete.vel.x = 0.0;
    }

    if input.jump {
        athlete.jump();
    }
}

fn integrate_athlete(athlete: &mut Athlete) {
    athlete.pos += athlete.vel;
    athlete.vel.y += PLAYER_GRAVITY;

    // Ground collision
    if athlete.pos.y > GROUND_Y - athlete.height {
        athlete.pos.y = GROUND_Y - athlete.height;
        athlete.vel.y = 0.0;
        athlete.airborne = false;
    }

    // Each athlete stays on their half of the court
    let (min_x, max_x) = athlete.side.x_bounds();
    if athlete.pos.x < min_x {
        athlete.pos.x = min_x;
    }
    if athlete.pos.x + athlete.width > max_x {
        athlete.pos.x = max_x - athlete.width;
    }
}

/// A basket counts only while the ball is descending through the rim window.
/// The ball is re-served toward the scorer's half.
fn check_baskets(state: &mut ArenaState) -> Option<Basket> {
    let ball = state.ball;
    if ball.vel.y <= 0.0 {
        return None;
    }

    let in_window = ball.pos.y > RIM_Y - RIM_WINDOW_ABOVE && ball.pos.y < RIM_Y + RIM_WINDOW_BELOW;
    if !in_window {
        return None;
    }

    if ball.pos.x < HOOP_WIDTH + HOOP_EDGE_MARGIN {
        state.ball.serve(CourtSide::Right);
        return Some(Basket {
            scorer: CourtSide::Right,
            points: POINTS_PER_BASKET,
        });
    }

    if ball.pos.x > COURT_WIDTH - HOOP_WIDTH - HOOP_EDGE_MARGIN {
        state.ball.serve(CourtSide::Left);
        return Some(Basket {
            scorer: CourtSide::Left,
            points: POINTS_PER_BASKET,
        });
    }

    None
}
