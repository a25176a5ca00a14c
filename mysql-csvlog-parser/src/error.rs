/// 定义解析和转换相关的错误类型和结果类型
pub type ParseResult<T> = std::result::Result<T, ParseError>;
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// 解析单条 CSV 记录时的错误
/// 任意一个字段解析失败都会使整条记录失败，不会产生部分解析的记录
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("记录列数不足: 至少需要 {expected} 列, 实际 {found} 列")]
    MissingFields { expected: usize, found: usize },

    #[error("解析 {field} 失败: {value:?}: {source}")]
    Float {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("解析 {field} 失败: {value:?}: {source}")]
    Int {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// 将记录转换为慢日志条目时的错误
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("解析时间戳失败: {value:?}: {source}")]
    Time {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("序列化 JSON 失败: {0}")]
    Json(#[from] serde_json::Error),
}
