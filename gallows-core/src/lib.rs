//! Board-agnostic game logic for the Gallows display
//!
//! This crate contains everything between a transcribed phrase and an
//! encoded frame, without any transport:
//!
//! - Game state machine (playing, won, lost)
//! - `Game` model: secret word, guesses and transcription parsing
//! - Built-in word list
//! - Display and game configuration types
//! - `FrameRenderer`, which composes a game onto a canvas and encodes it

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod game;
pub mod render;
pub mod state;
pub mod words;

pub use config::{AppConfig, ConfigError, DisplayConfig, GameConfig};
pub use game::{Game, GameError, Outcome, MAX_WORD_LEN};
pub use render::FrameRenderer;
pub use state::{Event, State};
