// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::catalog::Catalog;
use crate::error::{QaError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:50505";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_OUTPUT_PATH: &str = "per_document_answers.csv";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub url: String,
    pub timeout_secs: u64,
}

/// An empty catalog falls back to the built-in document list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocumentsConfig {
    #[serde(default)]
    pub catalog: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_path: PathBuf,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_backend_env(path, std::env::var(BACKEND_URL_ENV).ok())
    }

    /// `load` with the `BACKEND_URL` value passed in rather than read from
    /// the process environment.
    pub fn load_with_backend_env(
        path: Option<&Path>,
        backend_url_env: Option<String>,
    ) -> Result<Self> {
        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default("backend.url", defaults.backend.url)
            .and_then(|b| b.set_default("backend.timeout_secs", DEFAULT_TIMEOUT_SECS as i64))
            .and_then(|b| {
                b.set_default(
                    "export.output_path",
                    defaults.export.output_path.display().to_string(),
                )
            })
            .map_err(|e| QaError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PER_DOC_QA")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| QaError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| QaError::Config(e.to_string()))?;

        config.backend.url = resolve_backend_url(None, backend_url_env, &config.backend.url);

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            backend: BackendConfig {
                url: DEFAULT_BACKEND_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            documents: DocumentsConfig {
                catalog: Catalog::builtin().names().to_vec(),
            },
            export: ExportConfig {
                output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            },
        }
    }

    /// Applies a `--backend-url` flag on top of whatever was loaded.
    pub fn with_backend_override(mut self, explicit: Option<&str>) -> Result<Self> {
        self.backend.url = resolve_backend_url(explicit, None, &self.backend.url);
        self.validate()?;
        Ok(self)
    }

    pub fn catalog(&self) -> Catalog {
        if self.documents.catalog.is_empty() {
            Catalog::builtin()
        } else {
            Catalog::new(self.documents.catalog.iter().cloned())
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.backend.url)
            .map_err(|e| QaError::Config(format!("backend.url: {}", e)))?;

        if self.backend.timeout_secs == 0 {
            return Err(QaError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Picks the backend address: explicit override, then the environment,
/// then the configured value. Blank values are skipped.
pub fn resolve_backend_url(
    explicit: Option<&str>,
    env: Option<String>,
    configured: &str,
) -> String {
    explicit
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| {
            env.map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
        })
        .unwrap_or_else(|| configured.to_string())
}
