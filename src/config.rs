//! Runner configuration read from `FRAMETRIS_*` environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::core::GameConfig;
use crate::types::MAX_LEVEL;

/// Settings for the terminal runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub level: u8,
    pub top_score: u32,
    pub seed: u32,
    /// Log file; no logging when unset
    pub log_path: Option<String>,
    /// `tracing-subscriber` filter directive
    pub log_level: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            level: 0,
            top_score: 0,
            seed: 1,
            log_path: None,
            log_level: "debug".to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let level = match get("FRAMETRIS_LEVEL") {
            Some(s) => {
                let level: u8 = s
                    .parse()
                    .with_context(|| format!("FRAMETRIS_LEVEL is not a number: {s:?}"))?;
                if level > MAX_LEVEL {
                    bail!("FRAMETRIS_LEVEL must be 0..={MAX_LEVEL}, got {level}");
                }
                level
            }
            None => 0,
        };

        let top_score = match get("FRAMETRIS_TOP_SCORE") {
            Some(s) => s
                .parse()
                .with_context(|| format!("FRAMETRIS_TOP_SCORE is not a number: {s:?}"))?,
            None => 0,
        };

        let seed = match get("FRAMETRIS_SEED") {
            Some(s) => s
                .parse()
                .with_context(|| format!("FRAMETRIS_SEED is not a u32: {s:?}"))?,
            None => clock_seed(),
        };

        Ok(Self {
            level,
            top_score,
            seed,
            log_path: get("FRAMETRIS_LOG_PATH"),
            log_level: get("FRAMETRIS_LOG_LEVEL").unwrap_or_else(|| "debug".to_string()),
        })
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.level, self.top_score)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<RunnerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunnerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_reads_all_variables() {
        let cfg = config(&[
            ("FRAMETRIS_LEVEL", "7"),
            ("FRAMETRIS_TOP_SCORE", "12000"),
            ("FRAMETRIS_SEED", "42"),
            ("FRAMETRIS_LOG_PATH", " /tmp/frametris.log "),
            ("FRAMETRIS_LOG_LEVEL", "trace"),
        ])
        .unwrap();
        assert_eq!(cfg.level, 7);
        assert_eq!(cfg.top_score, 12000);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/frametris.log"));
        assert_eq!(cfg.log_level, "trace");
        assert_eq!(cfg.game_config(), GameConfig::new(7, 12000));
    }

    #[test]
    fn test_defaults_when_unset_or_blank() {
        let cfg = config(&[("FRAMETRIS_LOG_PATH", "  "), ("FRAMETRIS_SEED", "5")]).unwrap();
        assert_eq!(cfg.level, 0);
        assert_eq!(cfg.top_score, 0);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn test_rejects_bad_level() {
        assert!(config(&[("FRAMETRIS_LEVEL", "30")]).is_err());
        assert!(config(&[("FRAMETRIS_LEVEL", "-1")]).is_err());
        assert!(config(&[("FRAMETRIS_LEVEL", "two")]).is_err());
        assert!(config(&[("FRAMETRIS_LEVEL", "29")]).is_ok());
    }

    #[test]
    fn test_rejects_bad_seed() {
        let err = config(&[("FRAMETRIS_SEED", "lots")]).unwrap_err();
        assert!(err.to_string().contains("FRAMETRIS_SEED"));
    }
}
