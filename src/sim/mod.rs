//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one 60 Hz frame)
//! - No wall-clock reads; the celebration window is a tick countdown
//! - No rendering or platform dependencies

pub mod collision;
pub mod goal;
pub mod state;
pub mod tick;

pub use collision::{reflect_velocity, resolve_mallet_collision};
pub use goal::check_goals;
pub use state::{
    CELEBRATION_DURATION_TICKS, GoalEvent, Mallet, MatchPhase, MatchState, Player, Puck, Rink,
    ScoreBoard,
};
pub use tick::{TickInput, move_ai, tick};
