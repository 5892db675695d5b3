use crate::INBOX_CAPACITY;
use crate::MAX_COUNTDOWN;
use crate::MAX_DELAY_MS;
use crate::gameroom::Commit;
use crate::gameroom::Rules;
use crate::gameroom::Timing;
use crate::perception::Classifier;
use crate::perception::Gestures;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Environment variable overriding [`Rules::points_to_win`].
pub const POINTS_VAR: &str = "ROCHAMBEAU_POINTS";
/// Environment variable overriding [`Rules::commit`].
pub const COMMIT_VAR: &str = "ROCHAMBEAU_COMMIT";

/// Everything a room needs to know before it starts.
/// Every section is optional in the JSON form and falls back to the crate constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: Rules,
    pub timing: Timing,
    pub gestures: Gestures,
    /// Room inbox capacity.
    pub inbox: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            timing: Timing::default(),
            gestures: Gestures::default(),
            inbox: INBOX_CAPACITY,
        }
    }
}

impl Config {
    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::parse(&text).with_context(|| format!("in {}", path.display()))?;
        log::debug!("[config] loaded {}", path.display());
        Ok(config)
    }
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(text).context("parse config")?;
        config.validate()?;
        Ok(config)
    }
    /// Applies overrides from the process environment.
    pub fn from_env(self) -> anyhow::Result<Self> {
        self.overlay(|key| std::env::var(key).ok())
    }
    /// Applies overrides from any key lookup.
    pub fn overlay<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(points) = lookup(POINTS_VAR) {
            self.rules.points_to_win = points
                .trim()
                .parse()
                .with_context(|| format!("{}={}", POINTS_VAR, points))?;
        }
        if let Some(commit) = lookup(COMMIT_VAR) {
            self.rules.commit = Commit::try_from(commit.as_str())
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("{}={}", COMMIT_VAR, commit))?;
        }
        self.validate()?;
        Ok(self)
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.rules.points_to_win > 0, "points to win must be positive");
        anyhow::ensure!(self.timing.tick_ms > 0, "tick interval must be positive");
        anyhow::ensure!(
            self.rules.countdown <= MAX_COUNTDOWN,
            "countdown must be at most {} seconds",
            MAX_COUNTDOWN
        );
        for (name, ms) in [
            ("tick", self.timing.tick_ms),
            ("grace", self.timing.grace_ms),
            ("pause", self.timing.pause_ms),
        ] {
            anyhow::ensure!(
                ms <= MAX_DELAY_MS,
                "{} delay must be at most {}ms",
                name,
                MAX_DELAY_MS
            );
        }
        anyhow::ensure!(self.inbox > 0, "inbox capacity must be positive");
        self.classifier()?;
        Ok(())
    }
    pub fn classifier(&self) -> anyhow::Result<Classifier> {
        Ok(Classifier::try_from(&self.gestures)?)
    }
}
