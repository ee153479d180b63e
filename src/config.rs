//! Runtime configuration
//!
//! Precedence: CLI > environment variables > defaults.

use std::env;
use std::time::Duration;

use clap::Parser;

use crate::session::DelayBounds;

/// Widest board the size limits may produce, in columns
pub const MAX_BOARD_COLUMNS: usize = 1024;

/// CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "life_term")]
#[command(version)]
#[command(about = "Conway's Game of Life in the terminal", long_about = None)]
pub struct CliArgs {
    /// Initial board size (rows; columns are size * aspect)
    #[arg(short, long, value_name = "N")]
    pub size: Option<usize>,

    /// Smallest board size reachable with PageDown
    #[arg(long, value_name = "N")]
    pub min_size: Option<usize>,

    /// Largest board size reachable with PageUp
    #[arg(long, value_name = "N")]
    pub max_size: Option<usize>,

    /// Columns per row unit
    #[arg(short, long, value_name = "N")]
    pub aspect: Option<usize>,

    /// Initial delay between generations in microseconds
    #[arg(short, long, value_name = "US")]
    pub delay: Option<u64>,

    /// Amount '+' and '-' change the delay by, in microseconds
    #[arg(long, value_name = "US")]
    pub delay_step: Option<u64>,

    /// Shortest delay in microseconds
    #[arg(long, value_name = "US")]
    pub min_delay: Option<u64>,

    /// Longest delay in microseconds
    #[arg(long, value_name = "US")]
    pub max_delay: Option<u64>,

    /// Start running instead of paused
    #[arg(short, long)]
    pub run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub aspect: usize,
    pub delay: Duration,
    pub delay_step: Duration,
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: 10,
            min_size: 4,
            max_size: 24,
            aspect: 2,
            delay: Duration::from_micros(100_000),
            delay_step: Duration::from_micros(5_000),
            min_delay: Duration::from_micros(5_000),
            max_delay: Duration::from_micros(600_000),
            start_paused: true,
        }
    }
}

/// Configuration error
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub message: String,
    pub field: Option<String>,
}

impl ConfigError {
    fn field(field: &str, message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Config error in '{}': {}", field, self.message)
        } else {
            write!(f, "Config error: {}", self.message)
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_vars();
        config.apply_cli_args(args);
        config.validate()?;
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        if let Some(size) = env_parse("LIFE_SIZE") {
            self.size = size;
        }
        if let Some(aspect) = env_parse("LIFE_ASPECT") {
            self.aspect = aspect;
        }
        if let Some(us) = env_parse("LIFE_DELAY_US") {
            self.delay = Duration::from_micros(us);
        }
    }

    fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(size) = args.size {
            self.size = size;
        }
        if let Some(min) = args.min_size {
            self.min_size = min;
        }
        if let Some(max) = args.max_size {
            self.max_size = max;
        }
        if let Some(aspect) = args.aspect {
            self.aspect = aspect;
        }
        if let Some(us) = args.delay {
            self.delay = Duration::from_micros(us);
        }
        if let Some(us) = args.delay_step {
            self.delay_step = Duration::from_micros(us);
        }
        if let Some(us) = args.min_delay {
            self.min_delay = Duration::from_micros(us);
        }
        if let Some(us) = args.max_delay {
            self.max_delay = Duration::from_micros(us);
        }
        if args.run {
            self.start_paused = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size == 0 {
            return Err(ConfigError::field("min_size", "Board size must be at least 1"));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::field(
                "min_size",
                format!("min_size {} exceeds max_size {}", self.min_size, self.max_size),
            ));
        }
        if !(self.min_size..=self.max_size).contains(&self.size) {
            return Err(ConfigError::field(
                "size",
                format!(
                    "Board size {} outside {}..={}",
                    self.size, self.min_size, self.max_size
                ),
            ));
        }
        if self.aspect == 0 {
            return Err(ConfigError::field("aspect", "Aspect must be at least 1"));
        }
        match self.max_size.checked_mul(self.aspect) {
            Some(cols) if cols <= MAX_BOARD_COLUMNS => {}
            _ => {
                return Err(ConfigError::field(
                    "aspect",
                    format!(
                        "max_size {} * aspect {} exceeds {} columns",
                        self.max_size, self.aspect, MAX_BOARD_COLUMNS
                    ),
                ));
            }
        }
        if self.min_delay.is_zero() {
            return Err(ConfigError::field("min_delay", "Minimum delay must be positive"));
        }
        if self.delay_step.is_zero() {
            return Err(ConfigError::field("delay_step", "Delay step must be positive"));
        }
        if self.min_delay > self.max_delay {
            return Err(ConfigError::field(
                "min_delay",
                "Minimum delay exceeds maximum delay",
            ));
        }
        if self.delay < self.min_delay || self.delay > self.max_delay {
            return Err(ConfigError::field(
                "delay",
                format!(
                    "Delay {}us outside {}..={}us",
                    self.delay.as_micros(),
                    self.min_delay.as_micros(),
                    self.max_delay.as_micros()
                ),
            ));
        }
        Ok(())
    }

    pub fn delay_bounds(&self) -> DelayBounds {
        DelayBounds {
            min: self.min_delay,
            max: self.max_delay,
            step: self.delay_step,
        }
    }

    /// Grid (width, height) for a board size. Exact for any size up to
    /// `max_size` of a validated config; saturates otherwise.
    pub fn dimensions(&self, size: usize) -> (usize, usize) {
        (size.saturating_mul(self.aspect), size)
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let val = env::var(name).ok()?;
    match val.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring unparsable {}={:?}", name, val);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dimensions(config.size), (20, 10));
        assert!(config.start_paused);
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::parse_from(["life_term", "--size", "6", "--aspect", "1", "--run"]);
        let mut config = Config::default();
        config.apply_cli_args(&args);
        assert_eq!(config.size, 6);
        assert_eq!(config.dimensions(6), (6, 6));
        assert!(!config.start_paused);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_size_limits() {
        let config = Config {
            size: 30,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field.as_deref(), Some("size"));

        let config = Config {
            min_size: 8,
            max_size: 5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_delay() {
        let config = Config {
            min_delay: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(config.validate().unwrap_err().field.as_deref(), Some("min_delay"));

        let config = Config {
            delay: Duration::from_secs(5),
            ..Config::default()
        };
        assert_eq!(config.validate().unwrap_err().field.as_deref(), Some("delay"));
    }

    #[test]
    fn test_validate_rejects_huge_aspect() {
        let args = CliArgs::parse_from(["life_term", "--aspect", "18446744073709551615"]);
        let mut config = Config::default();
        config.apply_cli_args(&args);
        assert_eq!(config.validate().unwrap_err().field.as_deref(), Some("aspect"));
        assert_eq!(config.dimensions(config.size), (usize::MAX, 10));

        let config = Config {
            max_size: 1 << 40,
            size: 1 << 30,
            aspect: 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            max_size: MAX_BOARD_COLUMNS / 2,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        let config = Config {
            max_size: MAX_BOARD_COLUMNS / 2 + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::field("aspect", "Aspect must be at least 1");
        assert_eq!(err.to_string(), "Config error in 'aspect': Aspect must be at least 1");
    }
}
