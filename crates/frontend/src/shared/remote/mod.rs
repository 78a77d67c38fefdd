//! Чтение таблицы из хостинговой БД через REST (`{url}/rest/v1/{table}?select=*`).

use crate::shared::config::RemoteConfig;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteError {
    #[error("Chưa cấu hình kết nối dữ liệu từ xa")]
    NotConfigured,

    #[error("Lỗi kết nối: {0}")]
    Network(String),

    #[error("Máy chủ trả về lỗi HTTP {status}")]
    Http { status: u16 },

    #[error("Dữ liệu trả về không hợp lệ: {0}")]
    Decode(String),
}

/// URL запроса всей таблицы
pub fn table_url(base: &str, table: &str) -> String {
    format!(
        "{}/rest/v1/{}?select=*",
        base.trim_end_matches('/'),
        urlencoding::encode(table)
    )
}

/// Загрузить все строки таблицы. Один запрос, без повторов и пагинации.
pub async fn fetch_table<T: DeserializeOwned>(
    remote: &RemoteConfig,
    table: &str,
) -> Result<Vec<T>, RemoteError> {
    if !remote.is_configured() {
        return Err(RemoteError::NotConfigured);
    }
    let url = table_url(&remote.url, table);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("apikey", &remote.anon_key)
        .header("Authorization", &format!("Bearer {}", remote.anon_key))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| RemoteError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(RemoteError::Http {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| RemoteError::Network(e.to_string()))?;
    let rows = decode_rows::<T>(&body)?;
    log::info!("{}: fetched {} rows", table, rows.len());
    Ok(rows)
}

/// Тело ответа: JSON-массив строк таблицы
pub fn decode_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, RemoteError> {
    serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::Product;

    #[test]
    fn test_table_url() {
        assert_eq!(
            table_url("https://demo.example.co/", "products"),
            "https://demo.example.co/rest/v1/products?select=*"
        );
        assert_eq!(
            table_url("https://demo.example.co", "san pham"),
            "https://demo.example.co/rest/v1/san%20pham?select=*"
        );
    }

    #[test]
    fn test_empty_table_is_zero_rows() {
        let rows = decode_rows::<Product>("[]").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_decode_rows() {
        let rows = decode_rows::<Product>(
            r#"[{"id": 7, "name": "Tai nghe", "category": "Âm thanh", "price": 350000, "stock": 4}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[0].sales, 0);

        assert!(matches!(
            decode_rows::<Product>(r#"{"message": "denied"}"#),
            Err(RemoteError::Decode(_))
        ));
    }

    #[test]
    fn test_error_text() {
        assert_eq!(
            RemoteError::Http { status: 401 }.to_string(),
            "Máy chủ trả về lỗi HTTP 401"
        );
    }
}
