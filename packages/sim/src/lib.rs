//! Head-to-head court mini-game simulation.
//!
//! The host calls [`tick::tick`] once per rendered frame while a match is
//! live; each call advances the ball and both athletes by one frame's worth
//! of motion and reports a basket when one is made. All motion constants are
//! per-frame values, so simulation speed follows the caller's frame rate.

pub mod ai;
pub mod collision;
pub mod consts;
pub mod state;
pub mod tick;

pub use state::{ArenaState, Athlete, Ball, CourtSide};
pub use tick::{tick, Basket, TickInput};
