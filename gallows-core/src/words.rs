//! Built-in word list
//!
//! Every entry is upper-case ASCII and at most `MAX_WORD_LEN` letters long.

/// Words a round can be played with
pub const WORDS: &[&str] = &[
    "APPLE", "BRIDGE", "CASTLE", "DRAGON", "ELEPHANT", "FOREST", "GALAXY", "HARBOR",
    "ISLAND", "JUNGLE", "KITCHEN", "LANTERN", "MOUNTAIN", "NOTEBOOK", "OCEAN", "PENGUIN",
    "QUARTZ", "RAINBOW", "SANDWICH", "TRUMPET", "UMBRELLA", "VOLCANO", "WHISPER", "XYLOPHONE",
    "YOGURT", "ZEPPELIN", "BICYCLE", "COMPASS", "DIAMOND", "GARDEN", "HELMET", "JACKET",
    "LIBRARY", "MAGNET", "PUZZLE", "ROCKET", "SUNSET", "TIGER", "WIZARD", "PLANET",
];

/// Pick a word for a seed; the same seed always yields the same word
pub fn pick(seed: u32) -> &'static str {
    WORDS[seed as usize % WORDS.len()]
}
