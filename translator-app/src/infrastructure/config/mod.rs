mod credentials;
mod settings;

pub use credentials::{CredentialSource, EnvCredentials, FileCredentials, API_KEY_VAR};
pub use settings::{ConfigError, TranslatorConfig, API_URL_VAR, CREDENTIALS_FILE_VAR, MODEL_VAR};
