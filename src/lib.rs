//! Air Hockey - a two-player rink simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (puck physics, collisions, goals, AI)
//!
//! Rendering and input capture live outside this crate: the embedding layer
//! feeds pointer samples in through [`sim::TickInput`] and reads the
//! post-tick [`sim::MatchState`] back out each frame.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Rink dimensions (rink-local units)
    pub const RINK_WIDTH: f32 = 400.0;
    pub const RINK_HEIGHT: f32 = 800.0;
    /// Width of each goal mouth, centered on the short edges
    pub const GOAL_WIDTH: f32 = 100.0;

    /// Puck defaults
    pub const PUCK_RADIUS: f32 = 20.0;
    /// Serve speed on each axis (rink units per tick)
    pub const PUCK_SERVE_SPEED: f32 = 4.0;

    /// Mallet defaults - player 1 defends the bottom goal, player 2 the top
    pub const MALLET_RADIUS: f32 = 35.0;
    pub const MALLET1_START: (f32, f32) = (200.0, 700.0);
    pub const MALLET2_START: (f32, f32) = (200.0, 100.0);

    /// AI pursuit speed (rink units per tick)
    pub const AI_SPEED: f32 = 4.0;
    /// Fraction of mallet velocity transferred to the puck on contact
    pub const MALLET_PUSH_FACTOR: f32 = 0.2;

    /// How far in from the scored-on edge the celebration overlay anchors
    pub const CELEBRATION_INSET: f32 = 80.0;
}
