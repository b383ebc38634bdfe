//! Hangman round
//!
//! Holds the secret word and guesses, turns final transcriptions into
//! guesses, and drives the state machine.

use core::fmt;

use heapless::String;

use crate::config::{ConfigError, GameConfig};
use crate::state::{Event, State};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest secret word accepted
pub const MAX_WORD_LEN: usize = 16;

/// Capacity of the masked word line ("A _ _ L E")
pub const MASKED_LEN: usize = 2 * MAX_WORD_LEN;

/// Capacity of the guessed-letters line ("A E L P")
pub const GUESSED_LEN: usize = 2 * 26;

/// Phrase that restarts a finished round
const PLAY_AGAIN: &str = "PLAY AGAIN";

/// Word validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    /// Word has no letters
    EmptyWord,
    /// Word is longer than `MAX_WORD_LEN`
    WordTooLong(usize),
    /// Word contains something other than ASCII letters
    InvalidCharacter(char),
    /// Rules failed validation
    InvalidRules(ConfigError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptyWord => write!(f, "secret word is empty"),
            GameError::WordTooLong(len) => write!(
                f,
                "secret word has {} letters, at most {} allowed",
                len, MAX_WORD_LEN
            ),
            GameError::InvalidCharacter(c) => write!(f, "secret word contains {:?}", c),
            GameError::InvalidRules(e) => write!(f, "invalid rules: {}", e),
        }
    }
}

/// What a transcription or guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Nothing recognisable, or the round does not accept it
    Ignored,
    /// New letter that appears in the word
    Hit(char),
    /// New letter that does not appear in the word
    Miss(char),
    /// Letter was already guessed; nothing changed
    Repeated(char),
    /// Round is over and the player asked for another; call `restart`
    RestartRequested,
}

/// One hangman round
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    /// Secret word, upper-case ASCII
    word: String<MAX_WORD_LEN>,
    /// Guessed letters, bit n = 'A' + n
    guessed: u32,
    wrong_guesses: u8,
    max_wrong_guesses: u8,
    state: State,
}

impl Game {
    /// Start a round with `word` (case-insensitive ASCII letters)
    ///
    /// `rules` must pass [`GameConfig::validate`].
    pub fn new(word: &str, rules: &GameConfig) -> Result<Self, GameError> {
        rules.validate().map_err(GameError::InvalidRules)?;
        Ok(Self {
            word: normalize_word(word)?,
            guessed: 0,
            wrong_guesses: 0,
            max_wrong_guesses: rules.max_wrong_guesses,
            state: State::Playing,
        })
    }

    /// Start the next round with a new word, keeping the rules
    pub fn restart(&mut self, word: &str) -> Result<(), GameError> {
        let word = normalize_word(word)?;

        #[cfg(feature = "defmt")]
        defmt::info!("new round, {} letters", word.len());

        self.word = word;
        self.guessed = 0;
        self.wrong_guesses = 0;
        self.state = self.state.transition(Event::PlayAgain);
        Ok(())
    }

    /// Secret word
    pub fn word(&self) -> &str {
        self.word.as_str()
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Wrong guesses so far
    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Wrong guesses allowed
    pub fn max_wrong_guesses(&self) -> u8 {
        self.max_wrong_guesses
    }

    /// Check whether a letter has been guessed (case-insensitive)
    pub fn has_guessed(&self, letter: char) -> bool {
        letter_bit(letter).map_or(false, |bit| self.guessed & bit != 0)
    }

    /// Guessed letters in alphabetical order
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        ('A'..='Z').filter(move |&c| self.has_guessed(c))
    }

    /// Check whether every letter of the word has been guessed
    pub fn is_solved(&self) -> bool {
        self.word.chars().all(|c| self.has_guessed(c))
    }

    /// Word with unguessed letters as `_`, space-separated
    pub fn masked_word(&self) -> String<MASKED_LEN> {
        let mut line = String::new();
        for (i, c) in self.word.chars().enumerate() {
            let shown = if self.has_guessed(c) { c } else { '_' };
            push_spaced(&mut line, i, shown);
        }
        line
    }

    /// Guessed letters, alphabetical and space-separated
    pub fn guessed_line(&self) -> String<GUESSED_LEN> {
        let mut line = String::new();
        for (i, c) in self.guessed_letters().enumerate() {
            push_spaced(&mut line, i, c);
        }
        line
    }

    /// Apply a single letter guess
    pub fn guess(&mut self, letter: char) -> Outcome {
        if !self.state.accepts_guesses() {
            return Outcome::Ignored;
        }
        let letter = letter.to_ascii_uppercase();
        let Some(bit) = letter_bit(letter) else {
            return Outcome::Ignored;
        };
        if self.guessed & bit != 0 {
            return Outcome::Repeated(letter);
        }

        self.guessed |= bit;
        let outcome = if self.word.contains(letter) {
            Outcome::Hit(letter)
        } else {
            self.wrong_guesses = self.wrong_guesses.saturating_add(1);
            Outcome::Miss(letter)
        };

        if self.is_solved() {
            self.state = self.state.transition(Event::WordSolved);
        } else if self.wrong_guesses >= self.max_wrong_guesses {
            self.state = self.state.transition(Event::GuessesExhausted);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("guess {} -> {}, state {}", letter, outcome, self.state);

        outcome
    }

    /// Handle one final transcription
    ///
    /// While the round is over only a phrase containing "play again" does
    /// anything; it is reported as `RestartRequested` so the caller can pick
    /// the next word. While playing, the phrase is parsed with
    /// [`parse_guess`].
    pub fn handle_transcript(&mut self, text: &str) -> Outcome {
        if self.state.is_over() {
            if contains_ignore_case(text, PLAY_AGAIN) {
                return Outcome::RestartRequested;
            }
            return Outcome::Ignored;
        }

        match parse_guess(text) {
            Some(letter) => self.guess(letter),
            None => Outcome::Ignored,
        }
    }
}

/// Extract a guessed letter from a transcribed phrase
///
/// Trailing `.,!?` are dropped, then the phrase must either be a single
/// letter or end in whitespace followed by a letter ("letter b" → `B`).
pub fn parse_guess(text: &str) -> Option<char> {
    let cleaned = text.trim().trim_end_matches(['.', ',', '!', '?']);
    let mut chars = cleaned.chars().rev();
    let last = chars.next()?.to_ascii_uppercase();
    if !last.is_ascii_uppercase() {
        return None;
    }

    match chars.next() {
        None => Some(last),
        Some(prev) if prev.is_whitespace() => Some(last),
        Some(_) => None,
    }
}

fn normalize_word(word: &str) -> Result<String<MAX_WORD_LEN>, GameError> {
    let len = word.chars().count();
    if len == 0 {
        return Err(GameError::EmptyWord);
    }
    if len > MAX_WORD_LEN {
        return Err(GameError::WordTooLong(len));
    }

    let mut normalized = String::new();
    for c in word.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(GameError::InvalidCharacter(c));
        }
        normalized
            .push(c.to_ascii_uppercase())
            .map_err(|_| GameError::WordTooLong(len))?;
    }
    Ok(normalized)
}

/// Append `c`, preceded by a space unless it is the first entry
///
/// Capacities hold `n` letters plus `n - 1` separators.
fn push_spaced<const N: usize>(line: &mut String<N>, index: usize, c: char) {
    if index > 0 {
        let pushed = line.push(' ');
        debug_assert!(pushed.is_ok(), "line capacity {} exceeded", N);
    }
    let pushed = line.push(c);
    debug_assert!(pushed.is_ok(), "line capacity {} exceeded", N);
}

fn letter_bit(letter: char) -> Option<u32> {
    let letter = letter.to_ascii_uppercase();
    letter
        .is_ascii_uppercase()
        .then(|| 1 << (letter as u32 - 'A' as u32))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn game(word: &str) -> Game {
        Game::new(word, &GameConfig::default()).unwrap()
    }

    #[test]
    fn test_new_normalizes_word() {
        assert_eq!(game("apple").word(), "APPLE");
        assert_eq!(game("apple").state(), State::Playing);
    }

    #[test]
    fn test_invalid_words() {
        let rules = GameConfig::default();
        assert_eq!(Game::new("", &rules), Err(GameError::EmptyWord));
        assert_eq!(
            Game::new("ABCDEFGHIJKLMNOPQ", &rules),
            Err(GameError::WordTooLong(17))
        );
        assert_eq!(
            Game::new("ICE CREAM", &rules),
            Err(GameError::InvalidCharacter(' '))
        );
    }

    #[test]
    fn test_rules_validated() {
        let rules = GameConfig {
            max_wrong_guesses: 0,
        };
        assert_eq!(
            Game::new("TIGER", &rules),
            Err(GameError::InvalidRules(ConfigError::InvalidGuessLimit(0)))
        );

        let rules = GameConfig {
            max_wrong_guesses: 7,
        };
        assert!(Game::new("TIGER", &rules).is_err());
    }

    #[test]
    fn test_lines_fit_longest_word() {
        let mut g = game("ABCDEFGHIJKLMNOP");
        assert_eq!(g.masked_word().len(), 31);

        for c in ['Q', 'R', 'S', 'T', 'U'] {
            g.guess(c);
        }
        for c in 'A'..='P' {
            g.guess(c);
        }
        assert_eq!(g.state(), State::Won);
        assert_eq!(g.masked_word().as_str(), "A B C D E F G H I J K L M N O P");
        assert_eq!(g.guessed_line().len(), 2 * 21 - 1);
        assert!(g.guessed_line().ends_with("S T U"));
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("b"), Some('B'));
        assert_eq!(parse_guess("  B.  "), Some('B'));
        assert_eq!(parse_guess("letter c"), Some('C'));
        assert_eq!(parse_guess("I guess the letter e!?"), Some('E'));
        assert_eq!(parse_guess("Is it X,"), Some('X'));
        assert_eq!(parse_guess("hello"), None);
        assert_eq!(parse_guess("7"), None);
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess("..."), None);
        assert_eq!(parse_guess("letter 9"), None);
    }

    #[test]
    fn test_hit_and_miss() {
        let mut g = game("TIGER");
        assert_eq!(g.guess('t'), Outcome::Hit('T'));
        assert_eq!(g.guess('Z'), Outcome::Miss('Z'));
        assert_eq!(g.wrong_guesses(), 1);
        assert_eq!(g.masked_word().as_str(), "T _ _ _ _");
    }

    #[test]
    fn test_repeated_guess_changes_nothing() {
        let mut g = game("TIGER");
        g.guess('Z');
        assert_eq!(g.guess('z'), Outcome::Repeated('Z'));
        assert_eq!(g.wrong_guesses(), 1);
    }

    #[test]
    fn test_guessed_line_is_sorted() {
        let mut g = game("TIGER");
        for c in ['R', 'A', 'T', 'E'] {
            g.guess(c);
        }
        assert_eq!(g.guessed_line().as_str(), "A E R T");
        assert_eq!(g.guessed_letters().collect::<Vec<_>>(), vec!['A', 'E', 'R', 'T']);
    }

    #[test]
    fn test_win() {
        let mut g = game("TOOT");
        g.guess('T');
        assert_eq!(g.state(), State::Playing);
        g.guess('O');
        assert_eq!(g.state(), State::Won);
        assert!(g.is_solved());
        assert_eq!(g.masked_word().as_str(), "T O O T");
    }

    #[test]
    fn test_lose_after_limit() {
        let rules = GameConfig {
            max_wrong_guesses: 2,
        };
        let mut g = Game::new("TIGER", &rules).unwrap();
        g.guess('A');
        assert_eq!(g.state(), State::Playing);
        g.guess('B');
        assert_eq!(g.state(), State::Lost);
        assert_eq!(g.guess('T'), Outcome::Ignored);
    }

    #[test]
    fn test_solving_guess_wins_even_at_limit() {
        let rules = GameConfig {
            max_wrong_guesses: 1,
        };
        let mut g = Game::new("A", &rules).unwrap();
        assert_eq!(g.guess('A'), Outcome::Hit('A'));
        assert_eq!(g.state(), State::Won);
    }

    #[test]
    fn test_transcripts_while_over() {
        let mut g = game("A");
        g.handle_transcript("a");
        assert_eq!(g.state(), State::Won);

        assert_eq!(g.handle_transcript("letter b"), Outcome::Ignored);
        assert_eq!(
            g.handle_transcript("ok, play again please"),
            Outcome::RestartRequested
        );

        g.restart("ocean").unwrap();
        assert_eq!(g.state(), State::Playing);
        assert_eq!(g.word(), "OCEAN");
        assert_eq!(g.wrong_guesses(), 0);
        assert_eq!(g.guessed_letters().count(), 0);
    }

    #[test]
    fn test_play_again_ignored_while_playing() {
        let mut g = game("PLANET");
        assert_eq!(g.handle_transcript("play again"), Outcome::Ignored);
        assert_eq!(g.state(), State::Playing);
    }

    #[test]
    fn test_restart_rejects_bad_word() {
        let mut g = game("A");
        g.guess('A');
        assert_eq!(g.restart("1234"), Err(GameError::InvalidCharacter('1')));
        assert_eq!(g.state(), State::Won);
        assert_eq!(g.word(), "A");
    }

    proptest! {
        #[test]
        fn prop_round_always_ends(word in "[A-Z]{1,16}", guesses in proptest::collection::vec(any::<char>(), 0..60)) {
            let mut g = game(&word);
            for c in guesses {
                g.guess(c);
                prop_assert!(g.wrong_guesses() <= g.max_wrong_guesses());
            }
            for c in 'A'..='Z' {
                g.guess(c);
            }
            prop_assert!(g.state().is_over());
        }
    }
}
