//! Fixed timestep simulation tick
//!
//! Core loop that advances the match deterministically. The embedding layer
//! calls [`tick`] once per 60 Hz frame and reads the resulting
//! [`MatchState`] for rendering.

use glam::Vec2;

use super::collision::resolve_mallet_collision;
use super::goal::check_goals;
use super::state::{Mallet, MatchPhase, MatchState, Rink};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player-1 pointer sample while a drag is active
    pub pointer: Option<Vec2>,
    /// The drag ended this tick; zeroes mallet-1 velocity
    pub drag_ended: bool,
}

/// Advance the match by one fixed timestep.
///
/// While celebrating, only the countdown advances: no input merge, no puck
/// motion, no collision, no scoring. Otherwise the pipeline runs in a fixed
/// order: puck advance, collision against each mallet, goal check, AI move.
/// The goal check must see the post-bounce puck position, so it follows
/// collision resolution.
pub fn tick(state: &mut MatchState, input: &TickInput) {
    if state.phase == MatchPhase::GoalCelebration {
        state.celebration_ticks = state.celebration_ticks.saturating_sub(1);
        if state.celebration_ticks == 0 {
            state.phase = MatchPhase::Playing;
        }
        return;
    }

    state.time_ticks += 1;
    state.last_goal = None;

    if let Some(sample) = input.pointer {
        state.apply_pointer_sample(sample);
    }
    if input.drag_ended {
        state.end_drag();
    }

    state.puck.advance(&state.rink);
    resolve_mallet_collision(&mut state.puck, &state.mallet1);
    resolve_mallet_collision(&mut state.puck, &state.mallet2);

    if let Some(event) = check_goals(&mut state.puck, &state.rink, &mut state.score) {
        log::info!(
            "Goal for player {:?} ({} - {})",
            event.scorer,
            state.score.player1,
            state.score.player2
        );
        state.start_celebration(event);
    }

    move_ai(&mut state.mallet2, state.puck.pos.x, &state.rink);

    debug_assert!(puck_near_rink(state), "puck escaped the rink: {:?}", state.puck);
}

/// Pure horizontal pursuit for the AI mallet.
///
/// Moves toward the puck's x at a fixed speed, clamped to the side walls. A
/// dead-zone of one mallet radius around the puck's x holds position so the
/// mallet does not jitter when the puck is roughly underneath it. Never moves
/// vertically and never reads the puck's y.
///
/// The displacement is recorded as the mallet's velocity so AI contact
/// imparts the same push a dragged mallet does.
pub fn move_ai(mallet: &mut Mallet, puck_x: f32, rink: &Rink) {
    let prev_x = mallet.pos.x;

    if puck_x > mallet.pos.x + mallet.radius {
        mallet.pos.x = (mallet.pos.x + AI_SPEED).min(rink.width - mallet.radius);
    } else if puck_x < mallet.pos.x - mallet.radius {
        mallet.pos.x = (mallet.pos.x - AI_SPEED).max(mallet.radius);
    }

    mallet.vel = Vec2::new(mallet.pos.x - prev_x, 0.0);
}

/// Bounds invariant, with slack for the one-step mallet push: positional
/// correction can leave the puck up to one overlap past a wall until the next
/// advance clamps it back.
fn puck_near_rink(state: &MatchState) -> bool {
    let slack = state.puck.radius + MALLET_RADIUS;
    let p = state.puck.pos;
    p.x >= state.puck.radius - slack
        && p.x <= state.rink.width - state.puck.radius + slack
        && p.y >= state.puck.radius - slack
        && p.y <= state.rink.height - state.puck.radius + slack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{CELEBRATION_DURATION_TICKS, Player};

    #[test]
    fn test_tick_advances_puck_in_open_play() {
        let mut state = MatchState::new();
        tick(&mut state, &TickInput::default());

        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.puck.pos, Vec2::new(204.0, 404.0));
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_goal_tick_enters_celebration() {
        let mut state = MatchState::new();
        state.puck.pos = Vec2::new(200.0, 28.0);
        state.puck.vel = Vec2::new(0.0, -10.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score.player1, 1);
        assert_eq!(state.score.player2, 0);
        assert_eq!(state.phase, MatchPhase::GoalCelebration);
        assert_eq!(state.celebration_ticks, CELEBRATION_DURATION_TICKS);
        let event = state.last_goal.expect("goal event");
        assert_eq!(event.scorer, Player::One);
        assert_eq!(state.puck.pos, state.rink.center());
    }

    #[test]
    fn test_celebration_freezes_simulation() {
        let mut state = MatchState::new();
        state.puck.pos = Vec2::new(200.0, 28.0);
        state.puck.vel = Vec2::new(0.0, -10.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, MatchPhase::GoalCelebration);

        let frozen_puck = state.puck;
        let frozen_mallet2 = state.mallet2;
        let frozen_score = state.score;
        let frozen_ticks = state.time_ticks;

        // Even a pointer sample must not move mallet 1 during the freeze
        let input = TickInput {
            pointer: Some(Vec2::new(150.0, 650.0)),
            drag_ended: false,
        };
        for _ in 0..CELEBRATION_DURATION_TICKS - 1 {
            tick(&mut state, &input);
            assert_eq!(state.phase, MatchPhase::GoalCelebration);
            assert_eq!(state.puck, frozen_puck);
            assert_eq!(state.mallet2, frozen_mallet2);
            assert_eq!(state.score, frozen_score);
            assert_eq!(state.time_ticks, frozen_ticks);
        }

        // Final countdown tick returns to play without touching the puck
        tick(&mut state, &input);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.puck, frozen_puck);

        // Next tick resumes simulation with the post-reset serve velocity
        tick(&mut state, &TickInput::default());
        assert_eq!(state.puck.pos, state.rink.center() + Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_ai_dead_zone_holds_position() {
        let rink = Rink::default();
        let mut mallet = Mallet::at(MALLET2_START);

        // Puck x within one mallet radius of the mallet center
        move_ai(&mut mallet, 200.0 + MALLET_RADIUS, &rink);
        assert_eq!(mallet.pos.x, 200.0);
        assert_eq!(mallet.vel, Vec2::ZERO);

        move_ai(&mut mallet, 200.0 - MALLET_RADIUS, &rink);
        assert_eq!(mallet.pos.x, 200.0);
    }

    #[test]
    fn test_ai_pursues_horizontally() {
        let rink = Rink::default();
        let mut mallet = Mallet::at(MALLET2_START);

        move_ai(&mut mallet, 300.0, &rink);
        assert_eq!(mallet.pos.x, 200.0 + AI_SPEED);
        assert_eq!(mallet.pos.y, 100.0);
        assert_eq!(mallet.vel, Vec2::new(AI_SPEED, 0.0));

        move_ai(&mut mallet, 100.0, &rink);
        assert_eq!(mallet.pos.x, 200.0);
        assert_eq!(mallet.vel, Vec2::new(-AI_SPEED, 0.0));
    }

    #[test]
    fn test_ai_clamped_to_side_walls() {
        let rink = Rink::default();
        let mut mallet = Mallet::at((rink.width - MALLET_RADIUS - 1.0, 100.0));

        move_ai(&mut mallet, rink.width, &rink);
        assert_eq!(mallet.pos.x, rink.width - MALLET_RADIUS);

        let mut mallet = Mallet::at((MALLET_RADIUS + 1.0, 100.0));
        move_ai(&mut mallet, 0.0, &rink);
        assert_eq!(mallet.pos.x, MALLET_RADIUS);
    }

    #[test]
    fn test_drag_input_merges_through_tick() {
        let mut state = MatchState::new();

        let first = TickInput {
            pointer: Some(Vec2::new(200.0, 700.0)),
            drag_ended: false,
        };
        tick(&mut state, &first);
        assert_eq!(state.mallet1.pos, Vec2::new(200.0, 700.0));

        let second = TickInput {
            pointer: Some(Vec2::new(212.0, 690.0)),
            drag_ended: false,
        };
        tick(&mut state, &second);
        assert_eq!(state.mallet1.vel, Vec2::new(12.0, -10.0));

        let ended = TickInput {
            pointer: None,
            drag_ended: true,
        };
        tick(&mut state, &ended);
        assert_eq!(state.mallet1.vel, Vec2::ZERO);
    }

    #[test]
    fn test_determinism() {
        // Two matches fed identical inputs stay bit-identical
        let mut state1 = MatchState::new();
        let mut state2 = MatchState::new();

        let inputs = [
            TickInput {
                pointer: Some(Vec2::new(220.0, 680.0)),
                drag_ended: false,
            },
            TickInput {
                pointer: Some(Vec2::new(230.0, 620.0)),
                drag_ended: false,
            },
            TickInput {
                pointer: None,
                drag_ended: true,
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.puck, state2.puck);
        assert_eq!(state1.mallet1, state2.mallet1);
        assert_eq!(state1.mallet2, state2.mallet2);
        assert_eq!(state1.score, state2.score);
    }

    #[test]
    fn test_scores_never_decrease() {
        let mut state = MatchState::new();
        let mut prev = state.score;

        for i in 0..5000u32 {
            // Wiggle mallet 1 so collisions and goals actually happen
            let x = 150.0 + (i % 100) as f32;
            let input = TickInput {
                pointer: Some(Vec2::new(x, 660.0)),
                drag_ended: false,
            };
            tick(&mut state, &input);

            assert!(state.score.player1 >= prev.player1);
            assert!(state.score.player2 >= prev.player2);
            prev = state.score;
        }
    }
}
