// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "strix";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_REPLY_DELAY: &str = "1500ms";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub responder: Responder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            responder: Responder::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    pub seed_demo: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Responder {
    pub delay: Option<String>,
    pub replies: Option<Vec<String>>,
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            delay: Some(DEFAULT_REPLY_DELAY.to_owned()),
            replies: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("STRIX_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set STRIX_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [ui] and [responder]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(delay) = &self.responder.delay {
            let parsed = parse_duration(delay)?;
            if parsed.is_zero() {
                bail!(
                    "responder.delay in {} must be positive, got {}",
                    path.display(),
                    delay
                );
            }
        }

        if let Some(replies) = &self.responder.replies {
            if replies.is_empty() {
                bail!(
                    "responder.replies in {} must not be an empty list; omit the key to use the built-in set",
                    path.display()
                );
            }
            if replies.iter().any(|reply| reply.trim().is_empty()) {
                bail!(
                    "responder.replies in {} must not contain blank entries",
                    path.display()
                );
            }
        }

        Ok(())
    }

    pub fn seed_demo(&self) -> bool {
        self.ui.seed_demo.unwrap_or(false)
    }

    pub fn reply_delay(&self) -> Result<Duration> {
        parse_duration(self.responder.delay.as_deref().unwrap_or(DEFAULT_REPLY_DELAY))
    }

    pub fn replies(&self) -> Vec<String> {
        match &self.responder.replies {
            Some(replies) => replies.clone(),
            None => strix_sim::CANNED_REPLIES
                .iter()
                .map(|reply| (*reply).to_owned())
                .collect(),
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# strix config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# Start with the demo conversations loaded.\nseed_demo = false\n\n[responder]\ndelay = \"{}\"\n# Optional. Overrides the built-in canned reply set.\n# replies = [\"Let me think about that...\"]\n",
            path.display(),
            DEFAULT_REPLY_DELAY,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid delay duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid delay duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid delay duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 2s)")
}

#[cfg(test)]
mod tests {
    use super::{Config, parse_duration};
    use anyhow::Result;
    use std::fs;
    use std::time::Duration;

    fn write_config(contents: &str) -> Result<(tempfile::TempDir, std::path::PathBuf)> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, contents)?;
        Ok((dir, path))
    }

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = Config::load(&dir.path().join("does-not-exist.toml"))?;
        assert_eq!(config.reply_delay()?, Duration::from_millis(1500));
        assert!(!config.seed_demo());
        assert_eq!(config.replies().len(), strix_sim::CANNED_REPLIES.len());
        Ok(())
    }

    #[test]
    fn versioned_config_round_trips() -> Result<()> {
        let (_dir, path) = write_config(
            "version = 1\n\n[ui]\nseed_demo = true\n\n[responder]\ndelay = \"2s\"\nreplies = [\"short answer\"]\n",
        )?;
        let config = Config::load(&path)?;
        assert!(config.seed_demo());
        assert_eq!(config.reply_delay()?, Duration::from_secs(2));
        assert_eq!(config.replies(), vec!["short answer".to_owned()]);
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected() -> Result<()> {
        let (_dir, path) = write_config("[responder]\ndelay = \"2s\"\n")?;
        let error = Config::load(&path).expect_err("missing version should fail");
        assert!(error.to_string().contains("not versioned"));
        Ok(())
    }

    #[test]
    fn wrong_version_is_rejected() -> Result<()> {
        let (_dir, path) = write_config("version = 7\n")?;
        let error = Config::load(&path).expect_err("wrong version should fail");
        assert!(error.to_string().contains("unsupported config version 7"));
        Ok(())
    }

    #[test]
    fn zero_delay_is_rejected() -> Result<()> {
        let (_dir, path) = write_config("version = 1\n\n[responder]\ndelay = \"0ms\"\n")?;
        let error = Config::load(&path).expect_err("zero delay should fail");
        assert!(error.to_string().contains("must be positive"));
        Ok(())
    }

    #[test]
    fn empty_reply_list_is_rejected() -> Result<()> {
        let (_dir, path) = write_config("version = 1\n\n[responder]\nreplies = []\n")?;
        let error = Config::load(&path).expect_err("empty replies should fail");
        assert!(error.to_string().contains("must not be an empty list"));
        Ok(())
    }

    #[test]
    fn parse_duration_accepts_supported_suffixes() -> Result<()> {
        assert_eq!(parse_duration("500ms")?, Duration::from_millis(500));
        assert_eq!(parse_duration("2s")?, Duration::from_secs(2));
        assert_eq!(parse_duration("1m")?, Duration::from_secs(60));
        Ok(())
    }

    #[test]
    fn parse_duration_rejects_unknown_forms() {
        assert!(parse_duration("fast").is_err());
        assert!(parse_duration("10h").is_err());
        assert!(parse_duration("s").is_err());
    }

    #[test]
    fn example_config_is_loadable() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, Config::example_config(&path))?;
        let config = Config::load(&path)?;
        assert_eq!(config.version, 1);
        Ok(())
    }
}
