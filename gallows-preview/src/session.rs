//! Preview session
//!
//! Stands in for the glasses transport: every final transcription goes into
//! the game, and every resulting frame is written to disk as a BMP (and
//! optionally printed as the base64 payload the display call takes).

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use gallows_core::{words, AppConfig, ConfigError, FrameRenderer, Game, GameError, Outcome};
use gallows_raster::RasterError;

/// Session errors
#[derive(Debug)]
pub enum SessionError {
    /// Display geometry was rejected
    Config(ConfigError),
    /// Frame could not be written
    Io(io::Error),
    /// Picked word was rejected
    Game(GameError),
    /// Frame could not be rendered
    Render(RasterError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Config(e) => write!(f, "cannot set up display: {}", e),
            SessionError::Io(e) => write!(f, "cannot write frame: {}", e),
            SessionError::Game(e) => write!(f, "cannot start round: {}", e),
            SessionError::Render(e) => write!(f, "cannot render frame: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        SessionError::Config(e)
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}

impl From<GameError> for SessionError {
    fn from(e: GameError) -> Self {
        SessionError::Game(e)
    }
}

impl From<RasterError> for SessionError {
    fn from(e: RasterError) -> Self {
        SessionError::Render(e)
    }
}

/// One player's game plus the frame sink
pub struct Session<W> {
    renderer: FrameRenderer,
    game: Game,
    seed: u32,
    round: u32,
    frames: usize,
    out_dir: PathBuf,
    /// Receives one base64 line per frame when set
    payload: Option<W>,
}

impl<W: Write> Session<W> {
    /// Start a session and write the opening frame
    pub fn start(
        config: &AppConfig,
        seed: u32,
        out_dir: &Path,
        payload: Option<W>,
    ) -> Result<Self, SessionError> {
        let renderer = FrameRenderer::new(&config.display)?;
        let game = Game::new(words::pick(seed), &config.game)?;
        fs::create_dir_all(out_dir)?;

        let mut session = Self {
            renderer,
            game,
            seed,
            round: 0,
            frames: 0,
            out_dir: out_dir.to_path_buf(),
            payload,
        };
        session.emit()?;
        Ok(session)
    }

    /// Current game
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Frames written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Feed one final transcription and write the refreshed frame
    pub fn handle_transcript(&mut self, text: &str) -> Result<Outcome, SessionError> {
        let outcome = self.game.handle_transcript(text);
        match outcome {
            Outcome::RestartRequested => {
                self.round = self.round.wrapping_add(1);
                self.game
                    .restart(words::pick(self.seed.wrapping_add(self.round)))?;
                eprintln!("round {} started", self.round + 1);
            }
            Outcome::Hit(c) => eprintln!("{c}: hit"),
            Outcome::Miss(c) => eprintln!(
                "{c}: miss ({}/{})",
                self.game.wrong_guesses(),
                self.game.max_wrong_guesses()
            ),
            Outcome::Repeated(c) => eprintln!("{c}: already guessed"),
            Outcome::Ignored => eprintln!("ignored {:?}", text.trim()),
        }

        self.emit()?;
        Ok(outcome)
    }

    fn emit(&mut self) -> Result<(), SessionError> {
        let bytes = self.renderer.render(&self.game)?;
        let path = self.out_dir.join(format!("frame-{:03}.bmp", self.frames));
        fs::write(&path, &bytes)?;
        self.frames += 1;

        if let Some(payload) = self.payload.as_mut() {
            writeln!(payload, "{}", STANDARD.encode(&bytes))?;
        }
        Ok(())
    }
}
