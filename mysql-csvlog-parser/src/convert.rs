use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{ConvertError, ConvertResult};
use crate::record::CsvRecord;
use crate::tools::{extract_sql_type, trim_quotes};

/// 审计日志中时间戳文本的固定格式，不带时区和毫秒
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// 输出到慢日志文件的一条记录。
/// 字段名是对下游回放工具的外部契约，序列化时必须保持不变。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    #[serde(rename = "ConnectionID")]
    pub connection_id: String,

    /// 执行耗时，单位微秒
    #[serde(rename = "QueryTime")]
    pub query_time: i64,

    #[serde(rename = "SQL")]
    pub sql: String,

    #[serde(rename = "RowsSent")]
    pub rows_sent: i64,

    #[serde(rename = "Username")]
    pub username: String,

    #[serde(rename = "SQLType")]
    pub sql_type: String,

    #[serde(rename = "DBName")]
    pub db_name: String,

    /// Unix 时间戳，秒，保留小数部分
    #[serde(rename = "Timestamp")]
    pub timestamp: f64,

    #[serde(rename = "Digest")]
    pub digest: String,
}

impl LogEntry {
    /// 从解析好的 [`CsvRecord`] 派生出慢日志条目。
    ///
    /// 时间戳文本必须精确匹配 [`TIMESTAMP_LAYOUT`]，按 UTC 解释；
    /// 执行耗时从秒换算为微秒，换算结果向零截断。
    pub fn from_record(record: &CsvRecord) -> ConvertResult<Self> {
        let timestamp = NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_LAYOUT)
            .map_err(|source| ConvertError::Time {
                value: record.timestamp.clone(),
                source,
            })?
            .and_utc();

        Ok(Self {
            connection_id: record.thread_id.clone(),
            query_time: (record.execution_time * 1_000_000.0) as i64,
            sql: trim_quotes(&record.sql_text).to_string(),
            rows_sent: record.return_rows,
            username: record.username.clone(),
            sql_type: extract_sql_type(&record.sql_text),
            db_name: record.db_name.clone(),
            timestamp: timestamp.timestamp() as f64
                + f64::from(timestamp.timestamp_subsec_nanos()) / 1e9,
            digest: record.sql_id.clone(),
        })
    }

    /// 序列化为一行 JSON 文本，不带换行符
    pub fn to_json_line(&self) -> ConvertResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CsvRecord {
        let mut record = CsvRecord::new();
        record.timestamp = "2023-05-01 10:00:00".to_string();
        record.sql_id = "a1b2c3".to_string();
        record.sql_text = "\"SELECT * FROM t\"".to_string();
        record.db_name = "testdb".to_string();
        record.execution_time = 0.5;
        record.return_rows = 10;
        record.username = "root".to_string();
        record.thread_id = "42".to_string();
        record
    }

    #[test]
    fn test_from_record_maps_all_fields() {
        let entry = LogEntry::from_record(&sample_record()).unwrap();

        assert_eq!(entry.connection_id, "42");
        assert_eq!(entry.query_time, 500_000);
        assert_eq!(entry.sql, "SELECT * FROM t");
        assert_eq!(entry.rows_sent, 10);
        assert_eq!(entry.username, "root");
        assert_eq!(entry.sql_type, "select");
        assert_eq!(entry.db_name, "testdb");
        assert_eq!(entry.timestamp, 1_682_935_200.0);
        assert_eq!(entry.digest, "a1b2c3");
    }

    #[test]
    fn test_timestamp_must_match_layout() {
        let mut record = sample_record();
        record.timestamp = "2023/05/01 10:00:00".to_string();
        assert!(LogEntry::from_record(&record).is_err());

        record.timestamp = "2023-05-01T10:00:00".to_string();
        assert!(LogEntry::from_record(&record).is_err());

        record.timestamp = "2023-05-01 10:00:00.123".to_string();
        assert!(LogEntry::from_record(&record).is_err());
    }

    #[test]
    fn test_query_time_truncates_toward_zero() {
        let mut record = sample_record();
        // 1.9999999 秒 -> 1999999.9 微秒，截断为 1999999
        record.execution_time = 1.999_999_9;
        let entry = LogEntry::from_record(&record).unwrap();
        assert_eq!(entry.query_time, 1_999_999);
    }

    #[test]
    fn test_zero_execution_time_yields_zero_query_time() {
        let mut record = sample_record();
        record.execution_time = 0.0;
        let entry = LogEntry::from_record(&record).unwrap();
        assert_eq!(entry.query_time, 0);
    }

    #[test]
    fn test_empty_sql_text_yields_empty_type() {
        let mut record = sample_record();
        record.sql_text = "   ".to_string();
        let entry = LogEntry::from_record(&record).unwrap();
        assert_eq!(entry.sql_type, "");
        assert_eq!(entry.sql, "   ");
    }

    #[test]
    fn test_json_line_uses_external_field_names() {
        let entry = LogEntry::from_record(&sample_record()).unwrap();
        let line = entry.to_json_line().unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "ConnectionID",
                "DBName",
                "Digest",
                "QueryTime",
                "RowsSent",
                "SQL",
                "SQLType",
                "Timestamp",
                "Username",
            ]
        );
        assert_eq!(object["QueryTime"], 500_000);
        assert_eq!(object["Timestamp"], 1_682_935_200.0);
    }
}
