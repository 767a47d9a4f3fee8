use config::{Config, ConfigError, File};
use extractors::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::helpers::export::ExportFormat;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: Option<ServerConfig>,
    pub cors: Option<CorsConfig>,
    pub export: Option<ExportConfig>,
    pub pipeline: Option<PipelineSettings>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ExportConfig {
    /// Directory export files are written to. Defaults to
    /// `<data_dir>/resume-parser/exports`.
    pub dir: Option<PathBuf>,
    pub format: Option<ExportFormat>,
}

impl ExportConfig {
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("resume-parser").join("exports")
        } else {
            PathBuf::from("exports")
        }
    }

    pub fn resolved_format(&self) -> ExportFormat {
        self.format.unwrap_or(ExportFormat::Xlsx)
    }
}

/// Pipeline overrides from `api.toml`; unset fields keep the built-in
/// defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PipelineSettings {
    pub strip_whitespace_before_email_match: Option<bool>,
    pub name_denylist: Option<Vec<String>>,
    pub skills_vocabulary: Option<Vec<String>>,
    pub profile_link: Option<String>,
}

impl PipelineSettings {
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();
        if let Some(strip) = self.strip_whitespace_before_email_match {
            config.strip_whitespace_before_email_match = strip;
        }
        if let Some(denylist) = &self.name_denylist {
            config.name_denylist = denylist.clone();
        }
        if let Some(vocabulary) = &self.skills_vocabulary {
            config.skills_vocabulary = vocabulary.clone();
        }
        if let Some(link) = &self.profile_link {
            config.profile_link = link.clone();
        }
        config
    }
}

impl ApiConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[server]
host = "127.0.0.1"
port = 8080

[cors]
allowed_origins = ["http://localhost:3000"]

[export]
# dir = "/path/to/exports"
# format = "xlsx"  # or "csv"

[pipeline]
# strip_whitespace_before_email_match = false
# name_denylist = ["tamil", "nadu", "india", "chennai"]
# skills_vocabulary = ["python", "sql"]
# profile_link = "https://www.linkedin.com/in/your-profile"
"#;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: ApiConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        self.pipeline
            .as_ref()
            .map(PipelineSettings::to_pipeline_config)
            .unwrap_or_default()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("resume-parser").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
