//! Startup configuration: defaults, an optional JSON file and command-line
//! flags, in increasing order of precedence.

use super::*;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Initial curve samples per control point; restart returns to this.
    pub steps: usize,
    /// Whether the animation starts paused.
    pub paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WINDOW_SIZE.x as u32,
            height: WINDOW_SIZE.y as u32,
            steps: DEFAULT_STEPS,
            paused: START_PAUSED,
        }
    }
}

impl Config {
    /// Parses a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("invalid config JSON")?;
        Ok(config.sanitized())
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).with_context(|| {
            format!("failed to read config file {}", path.display())
        })?;

        Self::from_json(&json)
            .with_context(|| format!("in config file {}", path.display()))
    }

    /// Resolves the config from the process arguments.
    pub fn from_env() -> Result<Self> {
        Arguments::parse(std::env::args().skip(1))?.resolve()
    }

    /// Resolves the config from the process arguments, logging a warning
    /// and falling back to the defaults if they are invalid.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            log::warn!("{e:#}; using the default configuration");
            Self::default()
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(<f64 as From<_>>::from(self.width), <f64 as From<_>>::from(self.height))
    }

    fn sanitized(mut self) -> Self {
        self.steps = self.steps.max(1);
        self.width = self.width.max(1);
        self.height = self.height.max(1);
        self
    }
}

/// Parsed command-line flags. Every field overrides the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Arguments {
    pub config_path: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub steps: Option<usize>,
    pub paused: Option<bool>,
}

impl Arguments {
    /// Parses flags, not including the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .with_context(|| format!("missing value for {flag}"))
            };

            match flag.as_str() {
                "--config" => parsed.config_path = Some(value()?.into()),
                "--width" => {
                    parsed.width = Some(parse_value(&flag, &value()?)?);
                }
                "--height" => {
                    parsed.height = Some(parse_value(&flag, &value()?)?);
                }
                "--steps" => {
                    parsed.steps = Some(parse_value(&flag, &value()?)?);
                }
                "--paused" => parsed.paused = Some(true),
                "--running" => parsed.paused = Some(false),
                _ => bail!("unknown argument \"{flag}\""),
            }
        }

        Ok(parsed)
    }

    /// Loads the config file, if one was given, and applies the flags on top.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config_path {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(paused) = self.paused {
            config.paused = paused;
        }

        Ok(config.sanitized())
    }
}

fn parse_value<T>(flag: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid value \"{value}\" for {flag}"))
}
