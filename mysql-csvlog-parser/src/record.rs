#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvRecord {
    pub timestamp: String,
    pub sql_id: String,
    pub sql_text: String,
    pub db_name: String,
    pub execution_time: f64,
    pub lock_wait_time: f64,
    pub return_rows: i64,
    pub scan_rows: i64,
    pub source_ip: String,
    pub username: String,
    pub thread_id: String,
    pub table_names: String,
    pub tags: String,
}

impl CsvRecord {
    pub fn new() -> Self {
        Self {
            timestamp: String::new(),
            sql_id: String::new(),
            sql_text: String::new(),
            db_name: String::new(),
            execution_time: 0.0,
            lock_wait_time: 0.0,
            return_rows: 0,
            scan_rows: 0,
            source_ip: String::new(),
            username: String::new(),
            thread_id: String::new(),
            table_names: String::new(),
            tags: String::new(),
        }
    }
}
