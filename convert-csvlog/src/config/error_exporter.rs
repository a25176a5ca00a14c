use serde::Deserialize;
use std::path::Path;

/// 跳过记录导出配置
use crate::config::file::Root;

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorExporterConfig {
    /// 跳过记录的导出目录 (配置文件中键为 `path`)
    #[serde(rename = "path", default = "default_error_log_path")]
    pub error_log_path: String,

    /// 是否覆盖已存在的文件
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,

    /// 是否以追加的方式写入文件
    #[serde(default = "default_append")]
    pub append: bool,
}

fn default_error_log_path() -> String {
    "error_logs".to_string()
}

fn default_overwrite() -> bool {
    false
}

fn default_append() -> bool {
    true
}

impl Default for ErrorExporterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorExporterConfig {
    /// 创建一个默认的导出配置
    pub fn new() -> Self {
        Self {
            error_log_path: "error_logs".to_string(),
            overwrite: false,
            append: true,
        }
    }

    /// 从配置文件中读取 [error_exporter] 段
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let root = Root::from_file(path);
        root.error_exporter
    }

    /// 设置导出目录
    pub fn set_error_log_path(mut self, path: &str) -> Self {
        self.error_log_path = path.to_string();
        self
    }

    /// 设置是否覆盖已存在的文件
    pub fn set_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// 设置是否以追加的方式写入文件
    pub fn set_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }
}
