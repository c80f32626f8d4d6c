//! Match state and core simulation types
//!
//! All state needed to reproduce a match deterministically lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Active play
    Playing,
    /// Post-goal freeze; simulation is paused until the countdown runs out
    GoalCelebration,
}

/// Player identity for scores and goal events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

/// The puck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Puck {
    pub pos: Vec2,
    /// Rink units per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Puck {
    /// Centered serve with the fixed diagonal serve velocity
    pub fn serve(rink: &Rink) -> Self {
        Self {
            pos: rink.center(),
            vel: Vec2::splat(PUCK_SERVE_SPEED),
            radius: PUCK_RADIUS,
        }
    }

    /// Integrate one tick of motion and bounce off the rink walls.
    ///
    /// Each axis is resolved independently: crossing a boundary negates that
    /// axis's velocity and clamps the coordinate. A corner crossing therefore
    /// double-reflects (both components flip in the same tick). Goal-mouth
    /// crossings still bounce here; scoring is checked afterwards while the
    /// puck sits clamped on the boundary.
    pub fn advance(&mut self, rink: &Rink) {
        self.pos += self.vel;

        if self.pos.x <= self.radius || self.pos.x >= rink.width - self.radius {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(self.radius, rink.width - self.radius);
        }

        if self.pos.y <= self.radius || self.pos.y >= rink.height - self.radius {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(self.radius, rink.height - self.radius);
        }
    }
}

/// A player mallet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mallet {
    pub pos: Vec2,
    /// Rink units per tick; drives the push imparted to the puck on contact
    pub vel: Vec2,
    pub radius: f32,
}

impl Mallet {
    pub fn at(pos: (f32, f32)) -> Self {
        Self {
            pos: Vec2::new(pos.0, pos.1),
            vel: Vec2::ZERO,
            radius: MALLET_RADIUS,
        }
    }
}

/// Playfield geometry. Goal mouths are centered on the short edges: the top
/// edge is the goal player 1 attacks, the bottom edge the goal player 2
/// attacks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rink {
    pub width: f32,
    pub height: f32,
    pub goal_width: f32,
}

impl Default for Rink {
    fn default() -> Self {
        Self {
            width: RINK_WIDTH,
            height: RINK_HEIGHT,
            goal_width: GOAL_WIDTH,
        }
    }
}

impl Rink {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether an x coordinate lies strictly inside a goal mouth
    #[inline]
    pub fn in_goal_mouth(&self, x: f32) -> bool {
        let half = self.goal_width / 2.0;
        x > self.width / 2.0 - half && x < self.width / 2.0 + half
    }

    /// Clamp a pointer sample to mallet 1's legal region (the lower half)
    pub fn clamp_to_player1_half(&self, p: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            p.x.clamp(radius, self.width - radius),
            p.y.clamp(self.height / 2.0 + radius, self.height - radius),
        )
    }
}

/// Per-player goal tally. Mutated only by the goal detector; never decreases
/// within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub player1: u32,
    pub player2: u32,
}

impl ScoreBoard {
    pub fn award(&mut self, scorer: Player) {
        match scorer {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }
}

/// Emitted when a goal is scored; carries the anchor position for the
/// renderer's celebration overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalEvent {
    pub scorer: Player,
    pub celebration_pos: Vec2,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub rink: Rink,
    pub puck: Puck,
    /// Human mallet, bottom half
    pub mallet1: Mallet,
    /// AI mallet, top half
    pub mallet2: Mallet,
    pub score: ScoreBoard,
    pub phase: MatchPhase,
    /// Ticks left in the celebration freeze (0 while playing)
    pub celebration_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Goal scored on the most recent tick, if any (renderer consumes this)
    pub last_goal: Option<GoalEvent>,
    /// Previous clamped pointer sample, for drag-velocity derivation
    #[serde(skip)]
    drag_anchor: Option<Vec2>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Create a fresh match: centered puck on serve, mallets at their start
    /// positions, scores at zero
    pub fn new() -> Self {
        let rink = Rink::default();
        Self {
            puck: Puck::serve(&rink),
            rink,
            mallet1: Mallet::at(MALLET1_START),
            mallet2: Mallet::at(MALLET2_START),
            score: ScoreBoard::default(),
            phase: MatchPhase::Playing,
            celebration_ticks: 0,
            time_ticks: 0,
            last_goal: None,
            drag_anchor: None,
        }
    }

    /// Merge one player-1 pointer sample: clamp it to the lower half and
    /// derive mallet velocity from the delta against the previous sample.
    /// The first sample of a drag has no anchor yet and leaves velocity as-is.
    pub fn apply_pointer_sample(&mut self, sample: Vec2) {
        let clamped = self.rink.clamp_to_player1_half(sample, self.mallet1.radius);
        if let Some(prev) = self.drag_anchor {
            self.mallet1.vel = clamped - prev;
        }
        self.drag_anchor = Some(clamped);
        self.mallet1.pos = clamped;
    }

    /// Drag ended: mallet 1 stops imparting push until the next drag
    pub fn end_drag(&mut self) {
        self.mallet1.vel = Vec2::ZERO;
        self.drag_anchor = None;
    }

    /// Enter the post-goal freeze
    pub fn start_celebration(&mut self, event: GoalEvent) {
        self.last_goal = Some(event);
        self.phase = MatchPhase::GoalCelebration;
        self.celebration_ticks = CELEBRATION_DURATION_TICKS;
    }

    #[inline]
    pub fn is_celebrating(&self) -> bool {
        self.phase == MatchPhase::GoalCelebration
    }
}

/// Celebration freeze duration in ticks (1.2 seconds at 60 Hz)
pub const CELEBRATION_DURATION_TICKS: u32 = 72;
