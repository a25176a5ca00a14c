use serde::Deserialize;
use std::{fs, path::Path};

use crate::config::{error_exporter::ErrorExporterConfig, logging::LogConfig};

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Root {
    #[serde(default)]
    pub logging: LogConfig,
    #[serde(default)]
    pub error_exporter: ErrorExporterConfig,
}

impl Root {
    pub fn new() -> Self {
        Self {
            logging: LogConfig::default(),
            error_exporter: ErrorExporterConfig::default(),
        }
    }

    /// 读取配置文件。文件不存在或解析失败时回退到默认配置。
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let content = fs::read_to_string(path).unwrap_or_default();
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Self {
        toml::from_str(s).unwrap_or_default()
    }

    pub fn set_logging(mut self, logging: LogConfig) -> Self {
        self.logging = logging;
        self
    }

    pub fn set_error_exporter(mut self, error_exporter: ErrorExporterConfig) -> Self {
        self.error_exporter = error_exporter;
        self
    }
}
