use crate::error::{ParseError, ParseResult};
use crate::record::CsvRecord;

/// 一条审计记录要求的最小列数
pub const MIN_FIELDS: usize = 13;

/// 校验一行记录的列数。
/// 审计日志导出的 CSV 列数可变，但少于 [`MIN_FIELDS`] 列的行无法解析。
pub fn check_fields(fields: &[&str]) -> ParseResult<()> {
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::MissingFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }
    Ok(())
}

/// 将一行 CSV 字段解析为 [`CsvRecord`]。
///
/// 字符串字段按固定列位置原样拷贝；数值字段只在非空时解析，
/// 空字段保持零值。非空但无法解析的数值字段使整条记录失败。
pub fn parse_record(fields: &[&str]) -> ParseResult<CsvRecord> {
    check_fields(fields)?;

    let mut record = CsvRecord::new();
    record.timestamp = fields[0].to_string();
    record.sql_id = fields[1].to_string();
    record.sql_text = fields[2].to_string();
    record.db_name = fields[3].to_string();
    record.source_ip = fields[8].to_string();
    record.username = fields[9].to_string();
    record.thread_id = fields[10].to_string();
    record.table_names = fields[11].to_string();
    record.tags = fields[12].to_string();

    // 执行耗时
    if !fields[4].is_empty() {
        record.execution_time = fields[4].parse().map_err(|source| ParseError::Float {
            field: "execution_time",
            value: fields[4].to_string(),
            source,
        })?;
    }

    // 锁等待耗时
    if !fields[5].is_empty() {
        record.lock_wait_time = fields[5].parse().map_err(|source| ParseError::Float {
            field: "lock_wait_time",
            value: fields[5].to_string(),
            source,
        })?;
    }

    // 返回行数
    if !fields[6].is_empty() {
        record.return_rows = fields[6].parse().map_err(|source| ParseError::Int {
            field: "return_rows",
            value: fields[6].to_string(),
            source,
        })?;
    }

    // 扫描行数
    if !fields[7].is_empty() {
        record.scan_rows = fields[7].parse().map_err(|source| ParseError::Int {
            field: "scan_rows",
            value: fields[7].to_string(),
            source,
        })?;
    }

    Ok(record)
}
