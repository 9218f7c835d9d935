use super::ConfigError;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Somewhere an API key may live. `Ok(None)` means "not configured", which
/// callers surface per request instead of failing at startup.
pub trait CredentialSource {
    fn api_key(&self) -> Result<Option<String>, ConfigError>;
}

pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(API_KEY_VAR)
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Result<Option<String>, ConfigError> {
        Ok(non_empty(std::env::var(&self.var).ok()))
    }
}

/// Reads the key from a `.env`-style file without touching the process environment.
pub struct FileCredentials {
    path: PathBuf,
    var: String,
}

impl FileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            var: API_KEY_VAR.to_string(),
        }
    }

    pub fn with_var(mut self, var: impl Into<String>) -> Self {
        self.var = var.into();
        self
    }
}

impl CredentialSource for FileCredentials {
    fn api_key(&self) -> Result<Option<String>, ConfigError> {
        let entries = match dotenvy::from_path_iter(&self.path) {
            Ok(entries) => entries,
            Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::CredentialFile {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        for entry in entries {
            let (key, value) = entry.map_err(|e| ConfigError::CredentialFile {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
            if key == self.var {
                return Ok(non_empty(Some(value)));
            }
        }

        Ok(None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
