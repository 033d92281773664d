use chrono::{Local, NaiveDate, NaiveDateTime};

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";
pub const BACKUP_STAMP_FMT: &str = "%Y%m%d%H%M%S";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// Parse a record timestamp. Accepts `YYYY-MM-DD HH:MM:SS`, the `T`
/// separated variant and a bare date (midnight).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

/// 14-digit stamp used in backup file names.
pub fn backup_stamp(ts: &NaiveDateTime) -> String {
    ts.format(BACKUP_STAMP_FMT).to_string()
}
