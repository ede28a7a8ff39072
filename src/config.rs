use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
    /// Directory of static UI assets served next to the score API
    pub assets_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "voice-quiz".to_string(),
            http: HttpConfig::default(),
            assets_path: "public".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub start_level: u32,
    /// Optional JSON question file; built-in content is used when absent
    pub content_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_level: 1,
            content_path: None,
        }
    }
}

/// Fixed presentation delays. Only their relative ordering matters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// "Get ready" beat between StartGame and the first question
    pub intro_delay_ms: u64,
    /// How long a memory sequence stays on screen
    pub memory_reveal_ms: u64,
    /// Delay before restarting a recognizer that ended or failed
    pub restart_delay_ms: u64,
    /// Backoff when the recognizer refuses to start
    pub start_retry_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            intro_delay_ms: 2000,
            memory_reveal_ms: 4000,
            restart_delay_ms: 100,
            start_retry_ms: 1000,
        }
    }
}

impl PacingConfig {
    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    pub fn memory_reveal(&self) -> Duration {
        Duration::from_millis(self.memory_reveal_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    pub fn start_retry(&self) -> Duration {
        Duration::from_millis(self.start_retry_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 0.8,
            pitch: 1.1,
            volume: 1.0,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
