//! Configuration types
//!
//! Display geometry and game rules. Every field has a default matching the
//! smart-glasses bitmap view, so a config file only needs the overrides.

use core::fmt;

use gallows_raster::{Palette, Rgb};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Figure parts the gallows drawing can show
pub const FIGURE_PARTS: u8 = 6;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A canvas or target dimension is zero
    InvalidDimension,
    /// Declared output is smaller than the drawing canvas
    TargetSmallerThanCanvas,
    /// Wrong-guess limit outside 1..=FIGURE_PARTS
    InvalidGuessLimit(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimension => write!(f, "display dimensions must be non-zero"),
            ConfigError::TargetSmallerThanCanvas => {
                write!(f, "target size must be at least the canvas size")
            }
            ConfigError::InvalidGuessLimit(limit) => write!(
                f,
                "max_wrong_guesses must be between 1 and {}, got {}",
                FIGURE_PARTS, limit
            ),
        }
    }
}

/// Display geometry and colours
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Drawing area width in pixels
    pub canvas_width: u16,
    /// Drawing area height in pixels
    pub canvas_height: u16,
    /// Encoded bitmap width expected by the display
    pub target_width: u16,
    /// Encoded bitmap height expected by the display
    pub target_height: u16,
    /// Gap between right-aligned text and the target's right edge
    pub margin: u16,
    /// Background RGB (palette index 0)
    pub background: [u8; 3],
    /// Foreground RGB (palette index 1)
    pub foreground: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas_width: 524,
            canvas_height: 100,
            target_width: 526,
            target_height: 100,
            margin: 20,
            background: [0xFF, 0xFF, 0xFF],
            foreground: [0x00, 0x00, 0x00],
        }
    }
}

impl DisplayConfig {
    /// Palette for the encoder
    pub fn palette(&self) -> Palette {
        let [r, g, b] = self.background;
        let background = Rgb::new(r, g, b);
        let [r, g, b] = self.foreground;
        let foreground = Rgb::new(r, g, b);
        Palette {
            background,
            foreground,
        }
    }

    /// Check the geometry is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0
            || self.canvas_height == 0
            || self.target_width == 0
            || self.target_height == 0
        {
            return Err(ConfigError::InvalidDimension);
        }
        if self.target_width < self.canvas_width || self.target_height < self.canvas_height {
            return Err(ConfigError::TargetSmallerThanCanvas);
        }
        Ok(())
    }
}

/// Game rules
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Wrong guesses allowed before the round is lost
    pub max_wrong_guesses: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: FIGURE_PARTS,
        }
    }
}

impl GameConfig {
    /// Check the rules are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=FIGURE_PARTS).contains(&self.max_wrong_guesses) {
            return Err(ConfigError::InvalidGuessLimit(self.max_wrong_guesses));
        }
        Ok(())
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppConfig {
    /// Display geometry
    pub display: DisplayConfig,
    /// Game rules
    pub game: GameConfig,
}

impl AppConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()?;
        self.game.validate()
    }
}
