use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub ui: UiConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Ключ localStorage для списка раскрытых групп меню
    pub sidebar_storage_key: String,
    /// Страница при старте, токен из `Page::key`
    pub default_page: String,
}

/// Подключение к хостинговой БД с REST-интерфейсом (`/rest/v1/{table}`)
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RemoteConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_products_table")]
    pub products_table: String,
}

fn default_products_table() -> String {
    "products".to_string()
}

impl RemoteConfig {
    /// Удалённый источник считается настроенным, только если заданы и URL, и ключ
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[ui]
sidebar_storage_key = "admin.sidebar.expanded"
default_page = "dashboard"

[remote]
url = ""
anon_key = ""
products_table = "products"
"#;

impl AppConfig {
    /// Встроенная конфигурация с переопределениями из переменных окружения сборки
    /// (`ADMIN_REMOTE_URL`, `ADMIN_REMOTE_KEY`, `ADMIN_REMOTE_PRODUCTS_TABLE`).
    pub fn load() -> Self {
        let mut config = match Self::parse(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("embedded config is invalid: {}", e);
                Self::fallback()
            }
        };
        config.apply_overrides(
            option_env!("ADMIN_REMOTE_URL"),
            option_env!("ADMIN_REMOTE_KEY"),
            option_env!("ADMIN_REMOTE_PRODUCTS_TABLE"),
        );
        log::info!(
            "config loaded, remote products: {}",
            if config.remote.is_configured() { "on" } else { "off" }
        );
        config
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn apply_overrides(&mut self, url: Option<&str>, key: Option<&str>, table: Option<&str>) {
        if let Some(url) = url.filter(|v| !v.is_empty()) {
            self.remote.url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = key.filter(|v| !v.is_empty()) {
            self.remote.anon_key = key.to_string();
        }
        if let Some(table) = table.filter(|v| !v.is_empty()) {
            self.remote.products_table = table.to_string();
        }
    }

    fn fallback() -> Self {
        Self {
            ui: UiConfig {
                sidebar_storage_key: "admin.sidebar.expanded".to_string(),
                default_page: "dashboard".to_string(),
            },
            remote: RemoteConfig {
                products_table: default_products_table(),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.ui.sidebar_storage_key, "admin.sidebar.expanded");
        assert_eq!(config.ui.default_page, "dashboard");
        assert_eq!(config.remote.products_table, "products");
        assert!(!config.remote.is_configured());
        assert_eq!(config, AppConfig::fallback());
    }

    #[test]
    fn test_remote_section_is_optional() {
        let config = AppConfig::parse(
            r#"
[ui]
sidebar_storage_key = "k"
default_page = "orders"
"#,
        )
        .unwrap();
        assert_eq!(config.remote.products_table, "products");
        assert!(!config.remote.is_configured());
    }

    #[test]
    fn test_remote_needs_url_and_key() {
        let mut remote = RemoteConfig {
            url: "https://demo.example.co".to_string(),
            ..Default::default()
        };
        assert!(!remote.is_configured());
        remote.anon_key = "  ".to_string();
        assert!(!remote.is_configured());
        remote.anon_key = "public-anon".to_string();
        assert!(remote.is_configured());
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::fallback();
        config.apply_overrides(Some("https://demo.example.co/"), Some("key"), None);
        assert_eq!(config.remote.url, "https://demo.example.co");
        assert_eq!(config.remote.anon_key, "key");
        assert_eq!(config.remote.products_table, "products");

        config.apply_overrides(Some(""), None, Some("catalog"));
        assert_eq!(config.remote.url, "https://demo.example.co");
        assert_eq!(config.remote.products_table, "catalog");
    }
}
