//! Goal detection and scoring
//!
//! Runs after wall bounce and collision resolution, so a scoring puck sits
//! clamped on the boundary it crossed. Player 1 attacks the top goal,
//! player 2 the bottom one.

use glam::Vec2;

use super::state::{GoalEvent, Player, Puck, Rink, ScoreBoard};
use crate::consts::CELEBRATION_INSET;

/// Check both goal mouths, award the score, and reset the puck to a centered
/// serve on a goal.
///
/// The top check runs first and its reset moves the puck to rink center, so a
/// same-tick double goal cannot happen on any rink taller than two puck radii.
pub fn check_goals(puck: &mut Puck, rink: &Rink, score: &mut ScoreBoard) -> Option<GoalEvent> {
    let mut event = None;

    if puck.pos.y <= puck.radius && rink.in_goal_mouth(puck.pos.x) {
        score.award(Player::One);
        *puck = Puck::serve(rink);
        event = Some(GoalEvent {
            scorer: Player::One,
            celebration_pos: Vec2::new(rink.width / 2.0, CELEBRATION_INSET),
        });
    }

    if puck.pos.y >= rink.height - puck.radius && rink.in_goal_mouth(puck.pos.x) {
        score.award(Player::Two);
        *puck = Puck::serve(rink);
        event = Some(GoalEvent {
            scorer: Player::Two,
            celebration_pos: Vec2::new(rink.width / 2.0, rink.height - CELEBRATION_INSET),
        });
    }

    event
}
