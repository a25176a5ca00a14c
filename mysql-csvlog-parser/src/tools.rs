/// 去掉文本首尾的双引号字符。
/// 只处理引号本身，不去除空白，结果与输入共享存储。
#[inline]
pub fn trim_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

/// 从 SQL 文本中提取 SQL 类型。
///
/// 清理顺序为：去空白 -> 去首尾引号 -> 再去空白，然后取第一个
/// 以空白分隔的单词并转为小写。空文本或纯空白文本返回空字符串。
pub fn extract_sql_type(sql_text: &str) -> String {
    if sql_text.is_empty() {
        return String::new();
    }

    let cleaned = sql_text.trim();
    let cleaned = cleaned.trim_matches('"');
    let cleaned = cleaned.trim();

    match cleaned.split_whitespace().next() {
        Some(word) => word.to_lowercase(),
        None => String::new(),
    }
}
