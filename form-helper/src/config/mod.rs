//! Configuration management for form-helper
//!
//! Builder defaults are plain data and can be tuned per service.
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `FORM_HELPER_` prefix)
//! 2. `./config.toml` (development)
//! 3. `~/.config/form-helper/{service}/config.toml` (user config, XDG)
//! 4. `/etc/form-helper/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [form]
//! default_method = "post"
//! upload_method_sentinel = "file"
//! upload_enctype = "multipart/form-data"
//!
//! [input]
//! id_prefix = "form"
//! wrapper_class_prefix = "input"
//! wrap_by_default = true
//!
//! [date]
//! start_year = 1980
//! max_year_span = 200
//!
//! [submit]
//! default_tag = "button"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::FormError;

/// Prefix for environment overrides; `__` separates nested keys
const ENV_PREFIX: &str = "FORM_HELPER_";

/// Settings for the opening `<form>` tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Method used when the caller supplies none
    pub default_method: String,

    /// Method value that requests an upload form
    pub upload_method_sentinel: String,

    /// Enctype added to upload forms
    pub upload_enctype: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            default_method: "post".to_string(),
            upload_method_sentinel: "file".to_string(),
            upload_enctype: "multipart/form-data".to_string(),
        }
    }
}

/// Settings for labeled inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Prefix joined with the field name to derive the default id
    pub id_prefix: String,

    /// First class of the default wrapper div, followed by the input type
    pub wrapper_class_prefix: String,

    /// Wrap inputs in a div unless told otherwise
    pub wrap_by_default: bool,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            id_prefix: "form".to_string(),
            wrapper_class_prefix: "input".to_string(),
            wrap_by_default: true,
        }
    }
}

/// Settings for the date widget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateSettings {
    /// First year offered when the caller supplies none
    pub start_year: i64,

    /// Widest year range a single widget may render
    pub max_year_span: u64,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            start_year: 1980,
            max_year_span: 200,
        }
    }
}

/// Settings for submit controls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitSettings {
    /// Element used for submit controls (`button` or `input`)
    pub default_tag: String,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            default_tag: "button".to_string(),
        }
    }
}

/// Complete form-helper configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Form envelope settings
    #[serde(default)]
    pub form: FormSettings,

    /// Input settings
    #[serde(default)]
    pub input: InputSettings,

    /// Date widget settings
    #[serde(default)]
    pub date: DateSettings,

    /// Submit control settings
    #[serde(default)]
    pub submit: SubmitSettings,
}

impl FormConfig {
    /// Config files consulted for a service, lowest precedence first
    #[must_use]
    pub fn search_paths(service_name: &str) -> Vec<PathBuf> {
        vec![
            Path::new("/etc/form-helper")
                .join(service_name)
                .join("config.toml"),
            Self::recommended_path(service_name),
            PathBuf::from("config.toml"),
        ]
    }

    /// Load configuration for a specific service
    ///
    /// Files from [`search_paths`](Self::search_paths) that exist are layered
    /// over the defaults, then `FORM_HELPER_` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed, a value
    /// has the wrong type, or the merged result fails [`validate`](Self::validate).
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let files = Self::search_paths(service_name)
            .into_iter()
            .filter(|path| path.is_file());
        let config = Self::layered(files)?;
        tracing::debug!(service = service_name, "form-helper configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML, a value has the
    /// wrong type, or the result fails [`validate`](Self::validate).
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::layered([path.as_ref().to_path_buf()])
    }

    fn layered(files: impl IntoIterator<Item = PathBuf>) -> anyhow::Result<Self> {
        let defaults = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));
        let config: Self = files
            .into_iter()
            .fold(defaults, |figment, path| {
                tracing::trace!(path = %path.display(), "merging config file");
                figment.merge(Toml::file(path))
            })
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use form_helper::config::FormConfig;
    ///
    /// let path = FormConfig::recommended_path("my-app");
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("form-helper")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Reject settings that would produce broken markup
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Config`] naming the first offending setting.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.form.default_method.trim().is_empty() {
            return Err(FormError::Config("form.default_method must not be empty".into()));
        }
        if self.date.max_year_span == 0 {
            return Err(FormError::Config("date.max_year_span must be positive".into()));
        }
        if !matches!(self.submit.default_tag.as_str(), "button" | "input") {
            return Err(FormError::Config(format!(
                "submit.default_tag must be \"button\" or \"input\", got {:?}",
                self.submit.default_tag
            )));
        }
        Ok(())
    }
}
