use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

const CONFIG_DIR_NAME: &str = ".project-commit";
const CONFIG_FILE_NAME: &str = "config.json";

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME))
        .ok_or_else(|| AppError::Configuration("unable to determine home directory".to_string()))
}

pub fn config_file_path() -> AppResult<PathBuf> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

/// On-disk shape of the credential file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}

impl StoredConfig {
    pub fn load() -> AppResult<Self> {
        Self::load_from(&config_file_path()?)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|err| {
                AppError::Configuration(format!("invalid config file {}: {err}", path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Configuration(format!("failed to write config: {err}")))?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        Ok(Self::from_stored(StoredConfig::load()?, workspace_hint))
    }

    pub fn from_stored(stored: StoredConfig, workspace_hint: &Path) -> Self {
        Self {
            api_key: stored.openai_api_key,
            workspace_root: workspace_hint.to_path_buf(),
        }
    }

    /// Fails when no usable API key is configured.
    pub fn credential(&self) -> AppResult<Credential> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(Credential::new)
            .ok_or(AppError::MissingCredential)
    }
}

#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}
