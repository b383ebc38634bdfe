//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Every letter of the word has been guessed
    WordSolved,
    /// Wrong guesses reached the configured limit
    GuessesExhausted,
    /// Player asked for another round
    PlayAgain,
}
