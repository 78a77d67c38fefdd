//! Фильтрация списков на клиенте: текстовый поиск + категориальные фасеты.
//!
//! Порядок записей никогда не меняется: результат фильтра есть подпоследовательность
//! исходного списка.

use super::choice::Choice;
use serde::{Deserialize, Serialize};

/// Ключ фасета, означающий "без ограничения"
pub const FACET_ALL: &str = "all";

/// Категориальный фильтр: либо все значения, либо ровно одно.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl<T: Choice> Facet<T> {
    /// Из значения `<select>`: `"all"` или неизвестный ключ дают [`Facet::All`]
    pub fn from_choice_key(key: &str) -> Self {
        T::from_key(key).map_or(Facet::All, Facet::Only)
    }

    pub fn choice_key(&self) -> &'static str {
        match self {
            Facet::All => FACET_ALL,
            Facet::Only(value) => value.key(),
        }
    }
}

impl Facet<String> {
    /// Для свободных строковых категорий (например, категория товара)
    pub fn from_text_key(key: &str) -> Self {
        if key.is_empty() || key == FACET_ALL {
            Facet::All
        } else {
            Facet::Only(key.to_string())
        }
    }

    pub fn text_key(&self) -> String {
        match self {
            Facet::All => FACET_ALL.to_string(),
            Facet::Only(value) => value.clone(),
        }
    }

    /// Сравнение со строковым полем записи без аллокации
    pub fn matches_str(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }
}

/// Регистронезависимый поиск подстроки хотя бы в одном из полей.
/// Пустой запрос (или только пробелы) совпадает со всем.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Предикат фильтра страницы
pub trait ListFilter<R> {
    fn matches(&self, record: &R) -> bool;
}

/// Видимая подпоследовательность (клонированные записи для рендера)
pub fn apply_filter<R, F>(items: &[R], filter: &F) -> Vec<R>
where
    R: Clone,
    F: ListFilter<R>,
{
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Уникальные значения поля в порядке первого появления (опции для фасета)
pub fn distinct_values<R, F>(items: &[R], field: F) -> Vec<String>
where
    F: Fn(&R) -> &str,
{
    let mut values: Vec<String> = Vec::new();
    for item in items {
        let value = field(item);
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        group: &'static str,
    }

    struct RowFilter {
        query: String,
        group: Facet<String>,
    }

    impl ListFilter<Row> for RowFilter {
        fn matches(&self, record: &Row) -> bool {
            matches_query(&self.query, &[record.name]) && self.group.matches_str(record.group)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "iPhone 15", group: "Điện thoại" },
            Row { name: "MacBook Air", group: "Laptop" },
            Row { name: "Ốp lưng iPhone", group: "Phụ kiện" },
            Row { name: "Samsung S24", group: "Điện thoại" },
        ]
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        assert!(matches_query("IPHONE", &["Ốp lưng iPhone"]));
        assert!(matches_query("ốp", &["Ốp lưng iPhone"]));
        assert!(!matches_query("xiaomi", &["Samsung S24", "Điện thoại"]));
        assert!(matches_query("   ", &["anything"]));
    }

    #[test]
    fn test_filter_conjunction_preserves_order() {
        let filter = RowFilter {
            query: "i".to_string(),
            group: Facet::from_text_key("Điện thoại"),
        };
        let visible = apply_filter(&rows(), &filter);
        let names: Vec<_> = visible.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["iPhone 15"]);

        let all_groups = RowFilter {
            query: "iphone".to_string(),
            group: Facet::from_text_key(FACET_ALL),
        };
        let names: Vec<_> = apply_filter(&rows(), &all_groups)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["iPhone 15", "Ốp lưng iPhone"]);
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let filter = RowFilter {
            query: String::new(),
            group: Facet::All,
        };
        assert_eq!(apply_filter(&rows(), &filter), rows());
    }

    #[test]
    fn test_distinct_values() {
        assert_eq!(
            distinct_values(&rows(), |r| r.group),
            vec!["Điện thoại", "Laptop", "Phụ kiện"]
        );
    }

    #[test]
    fn test_facet_keys() {
        assert_eq!(Facet::from_text_key("").text_key(), "all");
        assert_eq!(Facet::from_text_key("Laptop").text_key(), "Laptop");
    }
}
