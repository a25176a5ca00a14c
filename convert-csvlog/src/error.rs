/// 定义转换工具的错误类型和结果类型
pub type LogResult<T> = std::result::Result<T, LogError>;
pub type RunResult<T> = std::result::Result<T, RunError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("初始化日志失败: {0}")]
    Init(String),
}

/// 转换运行中的致命错误。
/// 单条记录的失败只跳过该记录，这里只有资源级别的错误。
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("打开输入文件失败: {path}: {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("创建输出文件失败: {path}: {source}")]
    CreateOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("读取 CSV 表头失败: {0}")]
    Header(#[from] csv::Error),

    #[error("写入输出文件失败: {0}")]
    Write(#[from] std::io::Error),
}
