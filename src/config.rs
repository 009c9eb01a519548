//! Run-time configuration: defaults, environment variables, then flags.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::{FALL_INTERVAL_MS, FRAMES_PER_SECOND};

pub const ENV_FALL_MS: &str = "TETROMINO_FALL_MS";
pub const ENV_FPS: &str = "TETROMINO_FPS";
pub const ENV_SEED: &str = "TETROMINO_SEED";
pub const ENV_LOG_PATH: &str = "TETROMINO_LOG_PATH";

pub const USAGE: &str = "usage: tui-tetromino [--fall-ms MS] [--fps N] [--seed N] [--log PATH]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Milliseconds between gravity steps.
    pub fall_interval_ms: u64,
    /// Frame rate of the game loop.
    pub fps: u32,
    /// Fixed RNG seed; the clock is used when unset.
    pub seed: Option<u32>,
    /// JSON-lines event log destination.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS as u64,
            fps: FRAMES_PER_SECOND,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = get(ENV_FALL_MS) {
            config.fall_interval_ms = parse_fall_ms(ENV_FALL_MS, &v)?;
        }
        if let Some(v) = get(ENV_FPS) {
            config.fps = parse_fps(ENV_FPS, &v)?;
        }
        if let Some(v) = get(ENV_SEED) {
            config.seed = Some(parse_seed(ENV_SEED, &v)?);
        }
        if let Some(v) = get(ENV_LOG_PATH) {
            config.log_path = Some(PathBuf::from(v));
        }

        Ok(config)
    }

    /// Apply command-line flags (without the program name) on top of `self`.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--fall-ms" | "--fps" | "--seed" | "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                    match flag {
                        "--fall-ms" => self.fall_interval_ms = parse_fall_ms(flag, v)?,
                        "--fps" => self.fps = parse_fps(flag, v)?,
                        "--seed" => self.seed = Some(parse_seed(flag, v)?),
                        _ => self.log_path = Some(PathBuf::from(v)),
                    }
                }
                other => {
                    return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    /// Environment first, then flags.
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_env()?.apply_args(args)
    }

    pub fn frame_ms(&self) -> u64 {
        (1000 / self.fps.max(1) as u64).max(1)
    }
}

fn parse_fall_ms(name: &str, v: &str) -> Result<u64> {
    match v.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(anyhow!("invalid {} value: {}", name, v)),
    }
}

fn parse_fps(name: &str, v: &str) -> Result<u32> {
    match v.parse::<u32>() {
        Ok(fps) if (1..=1000).contains(&fps) => Ok(fps),
        _ => Err(anyhow!("invalid {} value: {} (expected 1-1000)", name, v)),
    }
}

fn parse_seed(name: &str, v: &str) -> Result<u32> {
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid {} value: {}", name, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_match_game_constants() {
        let config = GameConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.fall_interval_ms, 500);
        assert_eq!(config.fps, 10);
        assert_eq!(config.frame_ms(), 100);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = GameConfig::from_lookup(env(&[
            (ENV_FALL_MS, "250"),
            (ENV_FPS, "30"),
            (ENV_SEED, "42"),
            (ENV_LOG_PATH, " /tmp/game.jsonl "),
        ]))
        .unwrap();
        assert_eq!(config.fall_interval_ms, 250);
        assert_eq!(config.fps, 30);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/game.jsonl")));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = GameConfig::from_lookup(env(&[(ENV_SEED, "  "), (ENV_LOG_PATH, "")])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn invalid_env_value_is_an_error() {
        let err = GameConfig::from_lookup(env(&[(ENV_FPS, "0")])).unwrap_err();
        assert!(err.to_string().contains(ENV_FPS));
        assert!(GameConfig::from_lookup(env(&[(ENV_FALL_MS, "fast")])).is_err());
    }

    #[test]
    fn flags_win_over_env() {
        let config = GameConfig::from_lookup(env(&[(ENV_SEED, "1"), (ENV_FPS, "20")]))
            .unwrap()
            .apply_args(&args(&["--seed", "7", "--log", "out.jsonl"]))
            .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fps, 20);
        assert_eq!(config.log_path, Some(PathBuf::from("out.jsonl")));
    }

    #[test]
    fn flag_errors() {
        let base = GameConfig::default();
        let err = base.clone().apply_args(&args(&["--fall-ms"])).unwrap_err();
        assert!(err.to_string().contains("missing value for --fall-ms"));

        let err = base.clone().apply_args(&args(&["--turbo"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument: --turbo"));

        assert!(base.apply_args(&args(&["--seed", "-3"])).is_err());
    }

    #[test]
    fn frame_ms_never_zero() {
        let config = GameConfig {
            fps: 1000,
            ..GameConfig::default()
        };
        assert_eq!(config.frame_ms(), 1);
    }
}
