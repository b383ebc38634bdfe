//! Frame rendering
//!
//! Builds the bitmap for one game state.
//!
//! The glasses show a 526x100 monochrome bitmap. Drawing happens on a
//! 524x100 canvas and the encoder pads the extra columns with background.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  T _ G _ R                                          GUESSED  │
//! │      ┌──┐                                           E G R T  │
//! │      │  O                                                    │
//! │      │ /|\                                                   │
//! │      │ / \                                                   │
//! │    ──┴──                                                     │
//! │                YOU WIN! SAY "PLAY AGAIN"                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use alloc::vec::Vec;
use heapless::String;

use gallows_raster::{
    draw_circle, draw_line, draw_text, draw_text_aligned, text_width, Align, Canvas, MonoBmp,
    RasterError, DEFAULT_SPACING,
};

use crate::config::{ConfigError, DisplayConfig, FIGURE_PARTS};
use crate::game::Game;
use crate::state::State;

/// Scale of the word and guessed-letter lines
const HEADLINE_SCALE: u16 = 2;

/// Scale of the end-of-round message
const MESSAGE_SCALE: u16 = 1;

/// Top-left of the masked word
const WORD_ORIGIN: (i32, i32) = (20, 10);

/// Rows of the right-hand "GUESSED" block
const GUESSED_LABEL_Y: i32 = 10;
const GUESSED_LETTERS_Y: i32 = 30;

/// Row of the end-of-round message
const MESSAGE_Y: i32 = 85;

/// Capacity of the end message; the loss text with a 16-letter word is 50
const MESSAGE_LEN: usize = 64;

/// Gallows anchor; every stroke below is relative to it
const GALLOWS_ORIGIN: (i32, i32) = (70, 35);

/// One stroke of the drawing, relative to `GALLOWS_ORIGIN`
#[derive(Clone, Copy)]
enum Stroke {
    Line(i32, i32, i32, i32),
    Circle(i32, i32, i32),
}

/// Base, post, beam, rope
const SCAFFOLD: [Stroke; 4] = [
    Stroke::Line(-20, 50, 20, 50),
    Stroke::Line(0, 50, 0, -10),
    Stroke::Line(0, -10, 30, -10),
    Stroke::Line(30, -10, 30, 0),
];

/// Head, body, arms, legs; one per wrong guess
const FIGURE: [Stroke; FIGURE_PARTS as usize] = [
    Stroke::Circle(30, 5, 5),
    Stroke::Line(30, 10, 30, 25),
    Stroke::Line(30, 15, 25, 20),
    Stroke::Line(30, 15, 35, 20),
    Stroke::Line(30, 25, 25, 35),
    Stroke::Line(30, 25, 35, 35),
];

/// Composes game frames and encodes them for the display
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    display: DisplayConfig,
    encoder: MonoBmp,
}

impl FrameRenderer {
    /// Create a renderer for a display configuration
    ///
    /// Fails with the [`DisplayConfig::validate`] error if any dimension is
    /// zero or the target is smaller than the canvas.
    pub fn new(display: &DisplayConfig) -> Result<Self, ConfigError> {
        display.validate()?;

        let encoder = MonoBmp::new(display.target_width, display.target_height)
            .map_err(|_| ConfigError::InvalidDimension)?
            .with_palette(display.palette());

        Ok(Self {
            display: display.clone(),
            encoder,
        })
    }

    /// Display configuration in use
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Draw a game onto a fresh canvas
    pub fn compose(&self, game: &Game) -> Result<Canvas, RasterError> {
        let mut canvas = Canvas::new(self.display.canvas_width, self.display.canvas_height)?;

        self.draw_word(&mut canvas, game);
        self.draw_gallows(&mut canvas, game);
        self.draw_guessed(&mut canvas, game);
        if game.state().is_over() {
            self.draw_end_message(&mut canvas, game);
        }

        Ok(canvas)
    }

    /// Compose and encode a game as BMP bytes
    pub fn render(&self, game: &Game) -> Result<Vec<u8>, RasterError> {
        let canvas = self.compose(game)?;
        self.encoder.encode(&canvas)
    }

    fn draw_word(&self, canvas: &mut Canvas, game: &Game) {
        let (x, y) = WORD_ORIGIN;
        draw_text(canvas, &game.masked_word(), x, y, HEADLINE_SCALE, DEFAULT_SPACING);
    }

    fn draw_gallows(&self, canvas: &mut Canvas, game: &Game) {
        let parts = usize::from(game.wrong_guesses()).min(FIGURE.len());
        for stroke in SCAFFOLD.iter().chain(&FIGURE[..parts]) {
            draw_stroke(canvas, *stroke);
        }
    }

    /// Label and letters, right-aligned against the declared width
    fn draw_guessed(&self, canvas: &mut Canvas, game: &Game) {
        let right = i32::from(self.display.target_width) - i32::from(self.display.margin);

        draw_text_aligned(
            canvas,
            "GUESSED",
            right,
            GUESSED_LABEL_Y,
            HEADLINE_SCALE,
            DEFAULT_SPACING,
            Align::Right,
        );
        draw_text_aligned(
            canvas,
            &game.guessed_line(),
            right,
            GUESSED_LETTERS_Y,
            HEADLINE_SCALE,
            DEFAULT_SPACING,
            Align::Right,
        );
    }

    /// Centred across the declared width
    fn draw_end_message(&self, canvas: &mut Canvas, game: &Game) {
        let message = end_message(game);
        let width = text_width(&message, MESSAGE_SCALE, DEFAULT_SPACING);
        let x = (i32::from(self.display.target_width) - width).div_euclid(2);
        draw_text(canvas, &message, x, MESSAGE_Y, MESSAGE_SCALE, DEFAULT_SPACING);
    }
}

fn draw_stroke(canvas: &mut Canvas, stroke: Stroke) {
    let (ox, oy) = GALLOWS_ORIGIN;
    match stroke {
        Stroke::Line(x0, y0, x1, y1) => draw_line(canvas, ox + x0, oy + y0, ox + x1, oy + y1, true),
        Stroke::Circle(cx, cy, r) => draw_circle(canvas, ox + cx, oy + cy, r, true),
    }
}

/// End-of-round message; empty while the round is still running
fn end_message(game: &Game) -> String<MESSAGE_LEN> {
    let mut message = String::new();
    let written = match game.state() {
        State::Won => write!(message, "YOU WIN! SAY \"PLAY AGAIN\""),
        State::Lost => write!(
            message,
            "YOU LOSE! WORD: {}. SAY \"PLAY AGAIN\"",
            game.word()
        ),
        State::Playing => Ok(()),
    };
    debug_assert!(written.is_ok(), "end message exceeds {} bytes", MESSAGE_LEN);
    message
}
