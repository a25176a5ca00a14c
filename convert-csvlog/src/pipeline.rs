use std::fs::File;
use std::io::{BufWriter, Write};

use csv::ReaderBuilder;
use mysql_csvlog_parser::{LogEntry, parse_record};
use tracing::{info, warn};

use crate::config::error_exporter::ErrorExporterConfig;
use crate::error::{RunError, RunResult};
use crate::export::ErrorExporter;

/// 一次转换运行的统计结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// 读取到的数据行总数，不含表头
    pub total: usize,
    /// 成功写出的记录数
    pub emitted: usize,
    /// 被跳过的记录数
    pub skipped: usize,
}

/// 把审计日志 CSV 文件转换为慢日志 JSON 文件。
///
/// 逐行处理：校验列数 -> 解析字段 -> 派生慢日志条目 -> 序列化写出，
/// 输出顺序与输入顺序一致。单条记录失败只跳过该记录并导出原始字段，
/// 打开输入、创建输出和写出失败才会中止整个运行。
pub fn run(
    input: &str,
    output: &str,
    exporter_cfg: &ErrorExporterConfig,
) -> RunResult<ConvertSummary> {
    let infile = File::open(input).map_err(|source| RunError::OpenInput {
        path: input.to_string(),
        source,
    })?;
    let outfile = File::create(output).map_err(|source| RunError::CreateOutput {
        path: output.to_string(),
        source,
    })?;

    // 列数可变、宽松引号处理，与审计工具导出的 CSV 保持兼容
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(infile);
    let mut writer = BufWriter::new(outfile);
    let mut exporter = ErrorExporter::new(exporter_cfg.clone());

    // 第一行是表头，只做回显，不作为数据解析
    let headers = reader.headers()?.clone();
    info!("CSV 表头: {:?}", headers);

    let mut summary = ConvertSummary::default();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                warn!("读取 CSV 记录失败: {}", err);
                continue;
            }
        };
        summary.total += 1;

        let fields: Vec<&str> = row.iter().collect();
        let record = match parse_record(&fields) {
            Ok(record) => record,
            Err(err) => {
                warn!("解析 CSV 记录失败: {}", err);
                exporter.export(&fields, &err.to_string());
                summary.skipped += 1;
                continue;
            }
        };

        let entry = match LogEntry::from_record(&record) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("转换记录失败: {}", err);
                exporter.export(&fields, &err.to_string());
                summary.skipped += 1;
                continue;
            }
        };

        let line = match entry.to_json_line() {
            Ok(line) => line,
            Err(err) => {
                warn!("序列化记录失败: {}", err);
                exporter.export(&fields, &err.to_string());
                summary.skipped += 1;
                continue;
            }
        };

        writeln!(writer, "{}", line)?;
        summary.emitted += 1;
    }

    writer.flush()?;
    info!("转换完成, 成功 {} 条 / 共 {} 条", summary.emitted, summary.total);

    Ok(summary)
}
