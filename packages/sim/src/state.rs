//! Court entities and per-match simulation state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which half of the court an athlete defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourtSide {
    Left,
    Right,
}

impl CourtSide {
    pub fn opposite(self) -> Self {
        match self {
            CourtSide::Left => CourtSide::Right,
            CourtSide::Right => CourtSide::Left,
        }
    }

    /// The x range an athlete on this side may occupy, midline buffer
    /// excluded.
    pub fn x_bounds(self) -> (f32, f32) {
        match self {
            CourtSide::Left => (0.0, COURT_WIDTH / 2.0 - MIDLINE_BUFFER),
            CourtSide::Right => (COURT_WIDTH / 2.0 + MIDLINE_BUFFER, COURT_WIDTH),
        }
    }
}

/// The ball.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Put the ball back at center court, moving toward the given side.
    pub fn serve(&mut self, toward: CourtSide) {
        self.pos = Vec2::new(BALL_SERVE_X, BALL_SERVE_Y);
        self.vel = Vec2::new(
            match toward {
                CourtSide::Right => BALL_SERVE_SPEED,
                CourtSide::Left => -BALL_SERVE_SPEED,
            },
            0.0,
        );
    }
}

/// One athlete: a body box with a head circle sitting on its top edge.
/// `pos` is the top-left corner of the body box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Athlete {
    pub side: CourtSide,
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub head_radius: f32,
    pub airborne: bool,
}

impl Athlete {
    pub fn new(side: CourtSide) -> Self {
        let x = match side {
            CourtSide::Left => LEFT_START_X,
            CourtSide::Right => RIGHT_START_X,
        };
        Athlete {
            side,
            pos: Vec2::new(x, PLAYER_START_Y),
            vel: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            head_radius: HEAD_RADIUS,
            airborne: false,
        }
    }

    /// Center of the head hit-circle.
    pub fn head_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.width / 2.0, self.pos.y)
    }

    /// Jumps only take effect from the ground; there is no double jump.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vel.y = JUMP_VELOCITY;
            self.airborne = true;
        }
    }
}

/// Everything that moves during a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaState {
    pub ball: Ball,
    pub left: Athlete,
    pub right: Athlete,
}

impl ArenaState {
    /// Fresh match layout, ball served toward the given side.
    pub fn new(serve_toward: CourtSide) -> Self {
        let mut ball = Ball {
            pos: Vec2::new(BALL_SERVE_X, BALL_SERVE_Y),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        };
        ball.serve(serve_toward);

        ArenaState {
            ball,
            left: Athlete::new(CourtSide::Left),
            right: Athlete::new(CourtSide::Right),
        }
    }

    pub fn athlete(&self, side: CourtSide) -> &Athlete {
        match side {
            CourtSide::Left => &self.left,
            CourtSide::Right => &self.right,
        }
    }

    pub fn athlete_mut(&mut self, side: CourtSide) -> &mut Athlete {
        match side {
            CourtSide::Left => &mut self.left,
            CourtSide::Right => &mut self.right,
        }
    }
}
