use anyhow::{Context, Result, bail};
use media_utils::{
    crypto::{FilenameHasher, HashAlgorithm, MIN_HASH_LEN},
    filename::AUDIO_EXTENSIONS,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/sample.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct NamingConfig {
    pub algorithm: HashAlgorithm,
    pub hash_len: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    pub allowed_extensions: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: AUDIO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub naming: NamingConfig,
    pub audio: AudioConfig,
    /// File the config was read from, `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Result<Self> {
        match std::env::var("APP_CONFIG_PATH") {
            Ok(config_path) => Self::from_file(config_path),
            Err(_) => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(hash_len) = self.naming.hash_len {
            if hash_len < MIN_HASH_LEN {
                bail!(
                    "naming.hash_len must be at least {}, got {}",
                    MIN_HASH_LEN,
                    hash_len
                );
            }
        }

        if self.audio.allowed_extensions.is_empty() {
            bail!("audio.allowed_extensions must not be empty");
        }

        Ok(())
    }

    pub fn filename_hasher(&self) -> FilenameHasher {
        FilenameHasher {
            algorithm: self.naming.algorithm,
            hash_len: self.naming.hash_len,
        }
    }
}
