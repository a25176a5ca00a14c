use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::config::error_exporter::ErrorExporterConfig;

/// 跳过记录的导出文件名
const SKIPPED_FILE_NAME: &str = "skipped_rows.log";

/// 把被跳过的 CSV 记录连同失败原因写入导出文件。
///
/// 导出文件在第一条跳过记录出现时才创建，目录不存在时自动创建。
/// 导出本身的 I/O 失败只记录警告，不影响转换继续进行。
pub struct ErrorExporter {
    config: ErrorExporterConfig,
    writer: Option<BufWriter<File>>,
}

impl ErrorExporter {
    pub fn new(config: ErrorExporterConfig) -> Self {
        Self {
            config,
            writer: None,
        }
    }

    /// 记录一条被跳过的记录，格式为 `原因: 原始字段`
    pub fn export(&mut self, fields: &[&str], reason: &str) {
        if let Err(err) = self.write_line(fields, reason) {
            warn!("导出跳过记录失败: {}", err);
            self.writer = None;
        }
    }

    fn write_line(&mut self, fields: &[&str], reason: &str) -> std::io::Result<()> {
        if self.writer.is_none() {
            self.writer = Some(self.create_writer()?);
        }
        if let Some(writer) = self.writer.as_mut() {
            writeln!(writer, "{}: {}", reason, fields.join(","))?;
            writer.flush()?;
        }
        Ok(())
    }

    fn create_writer(&self) -> std::io::Result<BufWriter<File>> {
        fs::create_dir_all(&self.config.error_log_path)?;
        let path = Path::new(&self.config.error_log_path).join(SKIPPED_FILE_NAME);

        // 覆盖模式或未开启追加时截断重建，否则在已有文件末尾追加
        let file = if self.config.overwrite || !self.config.append {
            File::create(&path)?
        } else {
            OpenOptions::new().create(true).append(true).open(&path)?
        };
        Ok(BufWriter::new(file))
    }
}
