//! HUD text surfaces
//!
//! The core formats the text; drawing it is the host's job.

use std::fmt::Write;

use crate::sim::GameState;

/// Remaining-tries counter rendered as text once per redraw.
#[derive(Debug, Default)]
pub struct ScoreboardDisplay {
    text: String,
}

impl ScoreboardDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the displayed text from the current game state.
    pub fn on_redraw(&mut self, state: &GameState) {
        self.text.clear();
        let _ = write!(self.text, "{}", state.balls_left);
    }

    /// The text the host should draw.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoreboard_shows_balls_left() {
        let mut state = GameState::new(3);
        state.advance(); // Play
        state.advance(); // Dead, one ball spent

        let mut display = ScoreboardDisplay::new();
        display.on_redraw(&state);
        assert_eq!(display.text(), "2");
    }

    #[test]
    fn test_scoreboard_tracks_changes() {
        let mut state = GameState::new(1);
        let mut display = ScoreboardDisplay::new();

        display.on_redraw(&state);
        assert_eq!(display.text(), "1");

        state.advance();
        state.advance(); // last ball -> GameOver
        display.on_redraw(&state);
        assert_eq!(display.text(), "0");
    }
}
