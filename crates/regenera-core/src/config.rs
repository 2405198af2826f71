use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (session file, logs)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to counter progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Counters grow at a constant rate
    Linear,
    /// Counters rush ahead and settle onto their targets
    #[default]
    Cubic,
}

/// Timing of the impact counters, the reveal trigger and the mock simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Total wall-clock span of a counter animation
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u64,
    /// Number of discrete frames in a counter animation
    #[serde(default = "default_counter_steps")]
    pub counter_steps: u32,
    /// Easing curve for counters
    #[serde(default)]
    pub easing: EasingType,
    /// Visible fraction (0.0-1.0) of the impact section that starts the counters
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
    /// Delay before a simulated run completes
    #[serde(default = "default_simulation_delay")]
    pub simulation_delay_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: default_counter_duration(),
            counter_steps: default_counter_steps(),
            easing: EasingType::default(),
            visibility_threshold: default_visibility_threshold(),
            simulation_delay_ms: default_simulation_delay(),
        }
    }
}

impl MotionConfig {
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    /// Interval between two counter frames. A zero step count is treated as one step.
    pub fn step_interval(&self) -> Duration {
        self.counter_duration() / self.counter_steps.max(1)
    }

    pub fn simulation_delay(&self) -> Duration {
        Duration::from_millis(self.simulation_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while counters or toasts are animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Lines moved per scroll key press on the landing page
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

impl UiConfig {
    pub fn animation_tick(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

/// Managed identity backend (Supabase-compatible GoTrue endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Project URL, e.g. "https://xyzcompany.supabase.co"
    #[serde(default)]
    pub url: Option<String>,
    /// Public anon key sent as the `apikey` header
    #[serde(default)]
    pub anon_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            request_timeout_secs: default_timeout(),
        }
    }
}

impl AuthConfig {
    /// Both the URL and the key are required to talk to the backend
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("regenera")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_counter_steps() -> u32 {
    60
}

fn default_visibility_threshold() -> f64 {
    0.3
}

fn default_simulation_delay() -> u64 {
    3000
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_timeout() -> u64 {
    30
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// `REGENERA_AUTH_URL` and `REGENERA_AUTH_KEY` win over the file
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("REGENERA_AUTH_URL") {
            self.auth.url = Some(url);
        }
        if let Ok(key) = std::env::var("REGENERA_AUTH_KEY") {
            self.auth.anon_key = Some(key);
        }
    }

    /// Get the configuration file path
    /// Always uses ~/.config/regenera/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("regenera")
            .join("config.toml")
    }

    /// Get the persisted session file path
    pub fn session_path(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Get the log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("regenera.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_motion() {
        let config = AppConfig::default();
        assert_eq!(config.motion.counter_duration_ms, 2000);
        assert_eq!(config.motion.counter_steps, 60);
        assert_eq!(config.motion.easing, EasingType::Cubic);
        assert!((config.motion.visibility_threshold - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.motion.simulation_delay_ms, 3000);
    }

    #[test]
    fn test_step_interval() {
        let motion = MotionConfig::default();
        assert_eq!(motion.step_interval(), Duration::from_millis(2000) / 60);

        let zero_steps = MotionConfig {
            counter_steps: 0,
            ..Default::default()
        };
        assert_eq!(zero_steps.step_interval(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [motion]
            counter_steps = 30
            easing = "linear"

            [auth]
            url = "https://example.supabase.co"
            "#,
        )
        .unwrap();

        assert_eq!(config.motion.counter_steps, 30);
        assert_eq!(config.motion.easing, EasingType::Linear);
        assert_eq!(config.motion.counter_duration_ms, 2000);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(!config.auth.is_configured());
    }

    #[test]
    fn test_unknown_easing_is_rejected() {
        let err = AppConfig::from_toml("[motion]\neasing = \"quintic\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[motion]\ncounter_steps = \"many\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        let path = std::path::Path::new("/tmp/regenera");
        assert_eq!(expand_tilde(path), PathBuf::from("/tmp/regenera"));
    }
}
