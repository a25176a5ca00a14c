//! MySQL 审计日志 CSV 的解析与慢日志记录转换库。
//!
//! 输入是审计工具导出的一行 CSV 字段，输出是可用于回放工具的
//! 慢日志 JSON 条目。解析和转换都是纯函数，文件读写由调用方负责。

pub mod convert;
pub mod error;
pub mod parser;
pub mod record;
mod tools;

// 重新导出主要的公共接口
pub use convert::{LogEntry, TIMESTAMP_LAYOUT};
pub use error::{ConvertError, ConvertResult, ParseError, ParseResult};
pub use parser::{MIN_FIELDS, check_fields, parse_record};
pub use record::CsvRecord;
pub use tools::{extract_sql_type, trim_quotes};
