//! Обёртка над localStorage. Ошибки чтения/записи игнорируются: хранилище
//! может быть недоступно (приватный режим, запрет cookies).

use serde::{de::DeserializeOwned, Serialize};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Прочитать JSON-значение по ключу
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("localStorage[{}] is not valid JSON: {}", key, e);
            None
        }
    }
}

/// Сохранить значение как JSON
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(value) {
        let _ = storage.set_item(key, &raw);
    }
}
