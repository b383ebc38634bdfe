//! Gallows preview
//!
//! Plays hangman on the host. Each stdin line is treated as one final
//! transcription; every frame the glasses would receive is written to the
//! output directory as `frame-NNN.bmp`.
//!
//! ```text
//! echo -e "letter e\nletter a\nplay again" | gallows-preview --out frames --base64
//! ```

mod config;
mod session;

use std::env;
use std::fmt;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use config::LoadError;
use session::{Session, SessionError};

const DEFAULT_OUT_DIR: &str = "frames";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    out_dir: PathBuf,
    seed: Option<u32>,
    base64: bool,
}

#[derive(Debug)]
enum PreviewError {
    Usage(String),
    Config(LoadError),
    Session(SessionError),
    Stdin(io::Error),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Usage(msg) => write!(f, "{}", msg),
            PreviewError::Config(e) => write!(f, "{}", e),
            PreviewError::Session(e) => write!(f, "{}", e),
            PreviewError::Stdin(e) => write!(f, "cannot read stdin: {}", e),
        }
    }
}

impl From<LoadError> for PreviewError {
    fn from(e: LoadError) -> Self {
        PreviewError::Config(e)
    }
}

impl From<SessionError> for PreviewError {
    fn from(e: SessionError) -> Self {
        PreviewError::Session(e)
    }
}

fn main() -> ExitCode {
    match run(env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PreviewError::Usage(msg)) => {
            eprintln!("error: {}", msg);
            eprintln!("{}", help_text());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), PreviewError> {
    let args = parse_args(args)?;
    let config = config::load(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(clock_seed);

    let payload = args.base64.then(io::stdout);
    let mut session = Session::start(&config, seed, &args.out_dir, payload)?;
    eprintln!(
        "{}-letter word, frames in {}",
        session.game().word().len(),
        args.out_dir.display()
    );

    for line in io::stdin().lock().lines() {
        let line = line.map_err(PreviewError::Stdin)?;
        session.handle_transcript(&line)?;
    }

    eprintln!("wrote {} frames", session.frames());
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Args, PreviewError> {
    let mut parsed = Args {
        config: None,
        out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        seed: None,
        base64: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value(&mut iter, &arg)?)),
            "--out" => parsed.out_dir = PathBuf::from(value(&mut iter, &arg)?),
            "--seed" => {
                let raw = value(&mut iter, &arg)?;
                let seed = raw
                    .parse()
                    .map_err(|_| PreviewError::Usage(format!("invalid --seed value: {raw}")))?;
                parsed.seed = Some(seed);
            }
            "--base64" => parsed.base64 = true,
            other => return Err(PreviewError::Usage(format!("unknown argument: {other}"))),
        }
    }

    Ok(parsed)
}

fn value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, PreviewError> {
    iter.next()
        .ok_or_else(|| PreviewError::Usage(format!("{flag} needs a value")))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or_default()
}

fn help_text() -> &'static str {
    "usage: gallows-preview [--config PATH] [--out DIR] [--seed N] [--base64]\n\
     \n\
     Reads one transcription per stdin line and writes frame-NNN.bmp per frame.\n\
     --base64 also prints each frame as a base64 line on stdout."
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_args(Vec::new()).unwrap();
        assert_eq!(parsed.out_dir, PathBuf::from("frames"));
        assert_eq!(parsed.config, None);
        assert_eq!(parsed.seed, None);
        assert!(!parsed.base64);
    }

    #[test]
    fn test_all_flags() {
        let parsed = parse_args(args(&[
            "--config", "g.toml", "--out", "out", "--seed", "42", "--base64",
        ]))
        .unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("g.toml")));
        assert_eq!(parsed.out_dir, PathBuf::from("out"));
        assert_eq!(parsed.seed, Some(42));
        assert!(parsed.base64);
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(
            parse_args(args(&["--seed", "abc"])),
            Err(PreviewError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["--out"])),
            Err(PreviewError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["--verbose"])),
            Err(PreviewError::Usage(_))
        ));
    }
}
