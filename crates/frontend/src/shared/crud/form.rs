//! Разбор строковых полей модальной формы в типизированные значения.
//!
//! Поля ввода хранят `RwSignal<String>`; преобразование в форму агрегата
//! происходит один раз при сохранении.

use contracts::domain::common::RecordId;
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use leptos::prelude::*;
use std::str::FromStr;

/// Число из поля ввода. Пустое поле даёт значение по умолчанию (0).
///
/// Значение должно быть конечным: `NaN`, `inf` и переполнение (`1e400`) отклоняются.
pub fn parse_number<T>(field: &'static str, raw: &str) -> Result<T, ValidationError>
where
    T: FromStr + Default,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    let normalized = raw.replace(',', ".");
    if !normalized.parse::<f64>().is_ok_and(f64::is_finite) {
        return Err(ValidationError::Malformed { field });
    }
    normalized
        .parse::<T>()
        .map_err(|_| ValidationError::Malformed { field })
}

/// Значение select-поля по ключу
pub fn parse_choice<T: Choice>(field: &'static str, key: &str) -> Result<T, ValidationError> {
    T::from_key(key).ok_or(ValidationError::Malformed { field })
}

/// Ключ `<option>` для выбора родителя; пустая строка означает корень
pub fn parent_key(parent: Option<RecordId>) -> String {
    parent.map(|id| id.to_string()).unwrap_or_default()
}

pub fn parse_parent(key: &str) -> Option<RecordId> {
    key.trim().parse::<RecordId>().ok()
}

/// Заполняет `target` производным от `source` значением, пока пользователь
/// не изменил `target` вручную.
pub fn auto_fill<F>(source: RwSignal<String>, target: RwSignal<String>, derive: F)
where
    F: Fn(&str) -> String + 'static,
{
    let last_auto = StoredValue::new(target.get_untracked());
    let manual = StoredValue::new(!target.get_untracked().is_empty());
    Effect::new(move |_| {
        let name = source.get();
        if manual.get_value() {
            return;
        }
        if target.get_untracked() != last_auto.get_value() {
            manual.set_value(true);
            return;
        }
        let next = derive(&name);
        last_auto.set_value(next.clone());
        target.set(next);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::ProductStatus;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<f64>("price", "").unwrap(), 0.0);
        assert_eq!(parse_number::<f64>("price", " 12,5 ").unwrap(), 12.5);
        assert_eq!(parse_number::<i64>("stock", "-3").unwrap(), -3);
        assert_eq!(
            parse_number::<i64>("stock", "abc"),
            Err(ValidationError::Malformed { field: "stock" })
        );
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        for raw in ["NaN", "nan", "inf", "-inf", "Infinity", "1e400"] {
            assert_eq!(
                parse_number::<f64>("price", raw),
                Err(ValidationError::Malformed { field: "price" }),
                "{raw}"
            );
        }
        assert_eq!(parse_number::<f64>("price", "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(
            parse_choice::<ProductStatus>("status", "out_of_stock").unwrap(),
            ProductStatus::OutOfStock
        );
        assert!(parse_choice::<ProductStatus>("status", "archived").is_err());
    }

    #[test]
    fn test_parent_key_roundtrip() {
        assert_eq!(parent_key(None), "");
        assert_eq!(parse_parent(&parent_key(Some(7))), Some(7));
        assert_eq!(parse_parent(""), None);
    }
}
