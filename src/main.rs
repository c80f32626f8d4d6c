//! Headless demo entry point
//!
//! Runs a scripted match for a few simulated seconds and dumps the final
//! state as JSON. Real embeddings drive [`air_hockey::sim::tick`] from their
//! own 60 Hz frame clock and render the state themselves.

use glam::Vec2;

use air_hockey::sim::{MatchState, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Air hockey (headless) starting...");

    let mut state = MatchState::new();

    // 30 simulated seconds: drag mallet 1 side to side along its goal line
    // while the AI defends the top.
    for i in 0..1800u32 {
        let phase = (i as f32 / 60.0).sin();
        let input = TickInput {
            pointer: Some(Vec2::new(200.0 + phase * 150.0, 640.0)),
            drag_ended: false,
        };
        tick(&mut state, &input);
    }

    log::info!(
        "Final score after {} ticks: {} - {}",
        state.time_ticks,
        state.score.player1,
        state.score.player2
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize match state: {e}"),
    }
}
