use chrono::{SecondsFormat, Utc};

/// Текущее время в RFC 3339 (UTC, секунды) для отметок создания и шагов истории
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Дата `YYYY-MM-DD` для полей формы
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
