//! Court geometry and motion tuning.
//!
//! All velocities and accelerations are in pixels per frame; the simulation
//! is advanced once per rendered frame with no delta-time scaling.

/// Court width in pixels.
pub const COURT_WIDTH: f32 = 800.0;
/// Court height in pixels.
pub const COURT_HEIGHT: f32 = 450.0;
/// Y coordinate of the floor line.
pub const GROUND_Y: f32 = 400.0;

/// Downward acceleration applied to athletes each frame.
pub const PLAYER_GRAVITY: f32 = 0.4;
/// Downward acceleration applied to the ball each frame (half the athletes').
pub const BALL_GRAVITY: f32 = 0.2;
/// Vertical velocity set by a jump (negative = upward).
pub const JUMP_VELOCITY: f32 = -12.0;
/// Horizontal running speed of an athlete.
pub const RUN_SPEED: f32 = 5.0;
/// Horizontal speed of a fresh serve.
pub const BALL_SERVE_SPEED: f32 = 6.0;

pub const BALL_RADIUS: f32 = 20.0;
pub const HEAD_RADIUS: f32 = 30.0;
pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 60.0;

/// No-go strip either side of the court midline.
pub const MIDLINE_BUFFER: f32 = 20.0;

/// Energy kept by the ball when it bounces off the floor.
pub const FLOOR_RESTITUTION: f32 = 0.7;

/// Speed multiplier applied on a headed ball.
pub const HEAD_BOUNCE_GAIN: f32 = 1.2;
/// Fraction of the athlete's horizontal velocity transferred to the ball.
pub const HEAD_MOMENTUM_TRANSFER: f32 = 0.5;
/// Upward kick added to every header.
pub const HEAD_BOUNCE_LIFT: f32 = -5.0;
/// Gap left between ball and head after a rebound, so they never stay
/// overlapped across frames.
pub const HEAD_SEPARATION: f32 = 1.0;

/// Y coordinate of both rims.
pub const RIM_Y: f32 = 120.0;
/// Horizontal extent of each hoop zone.
pub const HOOP_WIDTH: f32 = 60.0;
/// Extra reach of the hoop zone past the backboard.
pub const HOOP_EDGE_MARGIN: f32 = 10.0;
/// Scoring window above the rim line.
pub const RIM_WINDOW_ABOVE: f32 = 10.0;
/// Scoring window below the rim line.
pub const RIM_WINDOW_BELOW: f32 = 40.0;

/// Where the ball is served from.
pub const BALL_SERVE_X: f32 = COURT_WIDTH / 2.0;
pub const BALL_SERVE_Y: f32 = 200.0;

/// Spawn positions.
pub const LEFT_START_X: f32 = 100.0;
pub const RIGHT_START_X: f32 = 660.0;
pub const PLAYER_START_Y: f32 = 350.0;

/// Fallback controller tuning: fraction of run speed, follow deadzone, and
/// the horizontal range within which it will jump for a ball above its head.
pub const AI_SPEED_FACTOR: f32 = 0.7;
pub const AI_FOLLOW_DEADZONE: f32 = 20.0;
pub const AI_JUMP_RANGE: f32 = 100.0;

/// Points awarded per basket.
pub const POINTS_PER_BASKET: i32 = 2;
