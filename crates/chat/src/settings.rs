use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu, ensure};

use crate::theme::ThemeMode;

pub const SETTINGS_DIRECTORY_NAME: &str = "murmur";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SETTINGS_ENV_PREFIX: &str = "MURMUR_";

pub const DEFAULT_EMPTY_TRANSCRIPT_TEXT: &str = "No hay mensajes aún";
pub const DEFAULT_COMPOSER_PLACEHOLDER: &str = "Escribe tu mensaje aquí...";
pub const DEFAULT_COMPOSER_MAX_ROWS: usize = 4;
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 250;
pub const MAX_SCROLL_DURATION_MS: u64 = 5_000;
pub const DEFAULT_CONTENT_MAX_WIDTH: f32 = 600.0;

/// Startup configuration. Read-only: the app never writes it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    pub theme_mode: ThemeMode,
    pub empty_transcript_text: String,
    pub composer_placeholder: String,
    pub composer_max_rows: usize,
    pub smooth_scroll: bool,
    pub scroll_duration_ms: u64,
    pub content_max_width: f32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            empty_transcript_text: DEFAULT_EMPTY_TRANSCRIPT_TEXT.to_string(),
            composer_placeholder: DEFAULT_COMPOSER_PLACEHOLDER.to_string(),
            composer_max_rows: DEFAULT_COMPOSER_MAX_ROWS,
            smooth_scroll: true,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            content_max_width: DEFAULT_CONTENT_MAX_WIDTH,
        }
    }
}

impl ChatSettings {
    /// Defaults, then the JSON file at `path`, then `MURMUR_*` variables.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Json::file(path))
            .merge(Env::prefixed(SETTINGS_ENV_PREFIX))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let settings = Self::figment(path)
            .extract::<Self>()
            .map_err(Box::new)
            .context(ExtractSnafu {
                stage: "extract-settings",
                path: path.to_path_buf(),
            })?
            .normalized();

        settings.validate()?;
        Ok(settings)
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        ensure!(
            self.composer_max_rows >= 1,
            InvalidValueSnafu {
                stage: "validate-settings",
                field: "composer_max_rows",
                details: "must be at least 1".to_string(),
            }
        );
        ensure!(
            self.scroll_duration_ms <= MAX_SCROLL_DURATION_MS,
            InvalidValueSnafu {
                stage: "validate-settings",
                field: "scroll_duration_ms",
                details: format!(
                    "{} exceeds the {MAX_SCROLL_DURATION_MS}ms limit",
                    self.scroll_duration_ms
                ),
            }
        );
        ensure!(
            self.content_max_width.is_finite() && self.content_max_width > 0.0,
            InvalidValueSnafu {
                stage: "validate-settings",
                field: "content_max_width",
                details: format!("{} is not a positive width", self.content_max_width),
            }
        );
        Ok(())
    }

    fn normalized(mut self) -> Self {
        self.empty_transcript_text = non_blank_or(
            &self.empty_transcript_text,
            DEFAULT_EMPTY_TRANSCRIPT_TEXT,
        );
        self.composer_placeholder =
            non_blank_or(&self.composer_placeholder, DEFAULT_COMPOSER_PLACEHOLDER);
        self
    }
}

/// Holds the active settings behind an [`ArcSwap`] so readers never lock.
pub struct SettingsStore {
    settings: Arc<ArcSwap<ChatSettings>>,
    config_path: PathBuf,
}

impl SettingsStore {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(SETTINGS_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".murmur"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn new(config_path: PathBuf) -> Self {
        let settings = Self::load_or_default(&config_path);
        Self {
            settings: Arc::new(ArcSwap::from_pointee(settings)),
            config_path,
        }
    }

    pub fn load() -> Self {
        Self::new(Self::default_config_path())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn settings(&self) -> Arc<ChatSettings> {
        self.settings.load_full()
    }

    /// Re-reads the file and environment, swapping in the result.
    pub fn reload(&self) -> Arc<ChatSettings> {
        let settings = Arc::new(Self::load_or_default(&self.config_path));
        self.settings.store(settings.clone());
        settings
    }

    fn load_or_default(path: &Path) -> ChatSettings {
        if !path.exists() {
            tracing::info!("settings file not found at {:?}, using defaults", path);
        }

        match ChatSettings::load_from(path) {
            Ok(settings) => {
                tracing::info!(
                    theme_mode = %settings.theme_mode,
                    smooth_scroll = settings.smooth_scroll,
                    "loaded settings"
                );
                settings
            }
            Err(error) => {
                tracing::warn!("{error}. using defaults");
                ChatSettings::default()
            }
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SettingsError {
    #[snafu(display("failed to read settings from {path:?} on `{stage}`: {source}"))]
    Extract {
        stage: &'static str,
        path: PathBuf,
        source: Box<figment::Error>,
    },
    #[snafu(display("invalid setting `{field}` on `{stage}`: {details}"))]
    InvalidValue {
        stage: &'static str,
        field: &'static str,
        details: String,
    },
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
