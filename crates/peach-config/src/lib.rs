//! Configuration management for Peach.
//!
//! Parses `peach.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `docs.target` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory. Forces a local source.
    pub source_dir: Option<PathBuf>,
    /// Override rendered content caching (false = development mode).
    pub cache_content: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "peach.toml";

/// Directory (relative to the config file) that remote sources are cloned into.
const REMOTE_CACHE_DIR: &str = "data/docs";

/// Language used when the config does not list any.
const DEFAULT_LANG: &str = "en-US";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Where the documentation lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// A directory on the local filesystem.
    #[default]
    Local,
    /// A git repository cloned into a local cache directory.
    Remote,
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    #[serde(rename = "type")]
    source_type: SourceType,
    target: Option<String>,
    langs: Option<Vec<String>>,
    cache_content: Option<bool>,
}

/// Resolved documentation source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsSource {
    /// Documents are read from `dir` directly.
    Local {
        /// Absolute documentation root.
        dir: PathBuf,
    },
    /// Documents are cloned from `url` into `cache_dir`.
    Remote {
        /// Git URL passed to `git clone`.
        url: String,
        /// Local checkout the documents are read from.
        cache_dir: PathBuf,
    },
}

impl DocsSource {
    /// Local directory documents are read from once the source is synced.
    #[must_use]
    pub fn local_root(&self) -> &Path {
        match self {
            Self::Local { dir } => dir,
            Self::Remote { cache_dir, .. } => cache_dir,
        }
    }
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug)]
pub struct DocsConfig {
    /// Document source.
    pub source: DocsSource,
    /// Language codes; the first one is the default (fallback) language.
    pub langs: Vec<String>,
    /// Render content once at load time (`true`) or on every access (`false`).
    pub cache_content: bool,
}

impl DocsConfig {
    /// Default language used for translation fallback.
    #[must_use]
    pub fn default_lang(&self) -> &str {
        self.langs.first().map_or(DEFAULT_LANG, String::as_str)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            source: DocsSource::Local {
                dir: PathBuf::from("docs"),
            },
            langs: vec![DEFAULT_LANG.to_owned()],
            cache_content: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.target`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `peach.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source = DocsSource::Local {
                dir: source_dir.clone(),
            };
        }
        if let Some(cache_content) = settings.cache_content {
            self.docs_resolved.cache_content = cache_content;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            docs_resolved: DocsConfig {
                source: DocsSource::Local {
                    dir: base.join("docs"),
                },
                ..DocsConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let docs = &self.docs_resolved;

        if docs.langs.is_empty() {
            return Err(ConfigError::Validation(
                "docs.langs must list at least one language".to_owned(),
            ));
        }
        for (i, lang) in docs.langs.iter().enumerate() {
            require_non_empty(lang, "docs.langs")?;
            if docs.langs[..i].contains(lang) {
                return Err(ConfigError::Validation(format!(
                    "docs.langs lists '{lang}' more than once"
                )));
            }
        }

        if let Some(target) = &self.docs.target {
            require_non_empty(target, "docs.target")?;
        }
        if let DocsSource::Remote { url, .. } = &docs.source {
            require_non_empty(url, "docs.target")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref target) = self.docs.target {
            self.docs.target = Some(expand::expand_env(target, "docs.target")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// A remote source requires `target` to be set.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let source = match self.docs.source_type {
            SourceType::Local => DocsSource::Local {
                dir: config_dir.join(self.docs.target.as_deref().unwrap_or("docs")),
            },
            SourceType::Remote => {
                let url = self.docs.target.clone().ok_or_else(|| {
                    ConfigError::Validation(
                        "docs.type = \"remote\" requires docs.target to be set".to_owned(),
                    )
                })?;
                DocsSource::Remote {
                    url,
                    cache_dir: config_dir.join(REMOTE_CACHE_DIR),
                }
            }
        };

        self.docs_resolved = DocsConfig {
            source,
            langs: self
                .docs
                .langs
                .clone()
                .unwrap_or_else(|| vec![DEFAULT_LANG.to_owned()]),
            cache_content: self.docs.cache_content.unwrap_or(true),
        };

        Ok(())
    }
}
