//! State machine for a hangman round
//!
//! Decides whether guesses are accepted and which end message the frame
//! shows. The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
