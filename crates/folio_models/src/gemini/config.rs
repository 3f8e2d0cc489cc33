//! Credential and model resolution for the Gemini provider.

use folio_error::{ConfigError, ConfigErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fallback model when neither the caller nor the model file names one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";

/// File under the home directory naming the preferred model.
const GEMINI_MODEL_FILE: &str = ".model-gemini";

/// Resolved Gemini credentials and model selection.
///
/// Resolution happens once, outside the generation core; the orchestrator
/// receives the finished configuration as injected state.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: String,
    model: String,
}

impl GeminiConfig {
    /// Resolves the API key and model.
    ///
    /// Key precedence: `GEMINI_API_KEY`, then `GOOGLE_API_KEY`, then the
    /// contents of `api_key_file`. Model precedence: explicit `model`, then
    /// `~/.model-gemini`, then [`DEFAULT_GEMINI_MODEL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when no environment key is set and the key
    /// file is missing, unreadable, or empty.
    pub fn resolve(model: Option<&str>, api_key_file: &Path) -> Result<Self, ConfigError> {
        let api_key = resolve_api_key(api_key_file)?;
        let model = model
            .map(str::to_string)
            .or_else(|| model_from_file(&home_file(GEMINI_MODEL_FILE)))
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        debug!(model = %model, "Resolved Gemini configuration");
        Ok(Self { api_key, model })
    }

    /// Returns the resolved API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the resolved model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Expands a leading `~` to the user's home directory.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

fn home_file(name: &str) -> PathBuf {
    dirs::home_dir().map(|home| home.join(name)).unwrap_or_else(|| PathBuf::from(name))
}

fn resolve_api_key(api_key_file: &Path) -> Result<String, ConfigError> {
    for var in ["GEMINI_API_KEY", "GOOGLE_API_KEY"] {
        if let Ok(key) = std::env::var(var) {
            let key = key.trim().to_string();
            if !key.is_empty() {
                debug!(source = var, "Resolved API key from environment");
                return Ok(key);
            }
        }
    }

    read_key_file(&expand_home(api_key_file))
}

fn read_key_file(path: &Path) -> Result<String, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::new(ConfigErrorKind::MissingApiKey(
            path.display().to_string(),
        )));
    }

    let key = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(ConfigErrorKind::KeyFileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;

    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(ConfigError::new(ConfigErrorKind::EmptyApiKeyFile(
            path.display().to_string(),
        )));
    }

    debug!(path = %path.display(), "Resolved API key from file");
    Ok(key)
}

/// Stripped contents of a single-line model file, if present and non-empty.
fn model_from_file(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}
