//! State machine definition
//!
//! Guess handling and the end-of-round message are a function of the
//! current state and an event.

use super::events::Event;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Round states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Accepting letter guesses
    #[default]
    Playing,
    /// Word solved; waiting for "play again"
    Won,
    /// Out of guesses; waiting for "play again"
    Lost,
}

impl State {
    /// Check if letter guesses are accepted
    pub fn accepts_guesses(&self) -> bool {
        matches!(self, State::Playing)
    }

    /// Check if the round is over and waiting for a restart
    pub fn is_over(&self) -> bool {
        matches!(self, State::Won | State::Lost)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Playing, WordSolved) => Won,
            (Playing, GuessesExhausted) => Lost,

            (Won, PlayAgain) => Playing,
            (Lost, PlayAgain) => Playing,

            // Default: stay in current state
            _ => self,
        }
    }
}
