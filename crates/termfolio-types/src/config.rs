//! Console configuration loaded from `termfolio.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock portfolio console.
//!
//! ```toml
//! user = "d2dreamer"
//! host = "portfolio"
//! initial_commands = ["intro", "ls"]
//!
//! [reveal]
//! typing_speed_ms = 15
//! long_threshold = 1500
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};

/// Top-level console configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// User name shown in the prompt.
    #[serde(default = "default_user")]
    pub user: String,
    /// Host name shown in the prompt.
    #[serde(default = "default_host")]
    pub host: String,
    /// Working directory shown in the prompt.
    #[serde(default = "default_cwd")]
    pub cwd: String,
    /// Commands auto-submitted one at a time when the session starts.
    #[serde(default = "default_initial_commands")]
    pub initial_commands: Vec<String>,
    /// Pause before each scripted command, in milliseconds.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Maximum number of submitted lines kept for recall.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_user() -> String {
    "d2dreamer".to_string()
}
fn default_host() -> String {
    "portfolio".to_string()
}
fn default_cwd() -> String {
    "~".to_string()
}
fn default_initial_commands() -> Vec<String> {
    vec!["intro".to_string(), "ls".to_string()]
}
fn default_initial_delay_ms() -> u64 {
    1000
}
fn default_history_limit() -> usize {
    100
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            cwd: default_cwd(),
            initial_commands: default_initial_commands(),
            initial_delay_ms: default_initial_delay_ms(),
            history_limit: default_history_limit(),
            reveal: RevealConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// The prompt echoed before every input, e.g. `d2dreamer@portfolio:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", self.user, self.host, self.cwd)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            return Err(TermfolioError::Config("user must not be empty".to_string()));
        }
        if self.reveal.short_threshold > self.reveal.long_threshold {
            return Err(TermfolioError::Config(format!(
                "reveal.short_threshold ({}) exceeds reveal.long_threshold ({})",
                self.reveal.short_threshold, self.reveal.long_threshold
            )));
        }
        if self.reveal.listing_factor == 0 {
            return Err(TermfolioError::Config(
                "reveal.listing_factor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Timing policy for the typed-output reveal.
#[derive(Debug, Clone, Deserialize)]
pub struct RevealConfig {
    /// Per-chunk delay for interactive submissions.
    #[serde(default = "default_typing_speed_ms")]
    pub typing_speed_ms: u64,
    /// Per-chunk delay for the scripted introductory commands.
    #[serde(default = "default_script_speed_ms")]
    pub script_speed_ms: u64,
    /// The file listing reveals one line per `speed * listing_factor`.
    #[serde(default = "default_listing_factor")]
    pub listing_factor: u32,
    /// Outputs shorter than this (in chars) reveal one char at a time.
    #[serde(default = "default_short_threshold")]
    pub short_threshold: usize,
    /// Outputs longer than this (in chars) reveal one line at a time.
    #[serde(default = "default_long_threshold")]
    pub long_threshold: usize,
    /// Lower bound on the per-word delay.
    #[serde(default = "default_word_floor_ms")]
    pub word_floor_ms: u64,
    /// Delay after the first line in line mode.
    #[serde(default = "default_line_start_ms")]
    pub line_start_ms: u64,
    /// How much faster each subsequent line gets.
    #[serde(default = "default_line_step_ms")]
    pub line_step_ms: u64,
    /// Lower bound on the per-line delay.
    #[serde(default = "default_line_floor_ms")]
    pub line_floor_ms: u64,
}

fn default_typing_speed_ms() -> u64 {
    15
}
fn default_script_speed_ms() -> u64 {
    20
}
fn default_listing_factor() -> u32 {
    3
}
fn default_short_threshold() -> usize {
    200
}
fn default_long_threshold() -> usize {
    1500
}
fn default_word_floor_ms() -> u64 {
    4
}
fn default_line_start_ms() -> u64 {
    30
}
fn default_line_step_ms() -> u64 {
    1
}
fn default_line_floor_ms() -> u64 {
    8
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: default_typing_speed_ms(),
            script_speed_ms: default_script_speed_ms(),
            listing_factor: default_listing_factor(),
            short_threshold: default_short_threshold(),
            long_threshold: default_long_threshold(),
            word_floor_ms: default_word_floor_ms(),
            line_start_ms: default_line_start_ms(),
            line_step_ms: default_line_step_ms(),
            line_floor_ms: default_line_floor_ms(),
        }
    }
}

impl RevealConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }

    pub fn script_speed(&self) -> Duration {
        Duration::from_millis(self.script_speed_ms)
    }
}

/// Frame pacing for the cosmetic animations.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_matrix_frame_ms")]
    pub matrix_frame_ms: u64,
    /// Number of frames before the rain stops.
    #[serde(default = "default_matrix_frames")]
    pub matrix_frames: u32,
    #[serde(default = "default_matrix_columns")]
    pub matrix_columns: usize,
    #[serde(default = "default_matrix_rows")]
    pub matrix_rows: usize,
    /// Delay between lines of the scripted intrusion log.
    #[serde(default = "default_hack_line_ms")]
    pub hack_line_ms: u64,
}

fn default_matrix_frame_ms() -> u64 {
    60
}
fn default_matrix_frames() -> u32 {
    80
}
fn default_matrix_columns() -> usize {
    64
}
fn default_matrix_rows() -> usize {
    16
}
fn default_hack_line_ms() -> u64 {
    220
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            matrix_frame_ms: default_matrix_frame_ms(),
            matrix_frames: default_matrix_frames(),
            matrix_columns: default_matrix_columns(),
            matrix_rows: default_matrix_rows(),
            hack_line_ms: default_hack_line_ms(),
        }
    }
}
