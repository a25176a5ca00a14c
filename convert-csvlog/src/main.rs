use clap::Parser;

use convert_csvlog::LogConfig;
use convert_csvlog::command::cli::Cli;
use convert_csvlog::config::error_exporter::ErrorExporterConfig;
use convert_csvlog::error::RunError;
use convert_csvlog::pipeline;

use tracing::{debug, info};

fn init_logging(log_cfg: &LogConfig) {
    if let Err(_) = convert_csvlog::init_logging(&log_cfg) {
        let _ = convert_csvlog::init_default_logging();
    }
}

fn main() -> Result<(), RunError> {
    let cli = Cli::parse();

    // 加载日志配置
    let log_cfg = LogConfig::from_file(&cli.config_path);
    init_logging(&log_cfg);

    // 启动转换工具
    info!("CSV 慢日志转换工具启动");

    let exporter_cfg = ErrorExporterConfig::from_file(&cli.config_path);

    info!("配置文件路径: {}", cli.config_path);
    info!("输入文件: {}", cli.input);
    info!("输出文件: {}", cli.output);

    debug!("日志配置: {:?}", log_cfg);
    debug!("跳过记录导出配置: {:?}", exporter_cfg);

    let summary = pipeline::run(&cli.input, &cli.output, &exporter_cfg)?;

    info!(
        "成功 {} 条, 跳过 {} 条, 共 {} 条",
        summary.emitted, summary.skipped, summary.total
    );

    Ok(())
}
