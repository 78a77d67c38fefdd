//! Категории страниц для атрибута `data-page-category`.

/// Таблица записей с фильтрами
pub const PAGE_CAT_LIST: &str = "list";

/// Сводная страница с карточками показателей
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Редактор упорядоченных блоков (главная страница)
pub const PAGE_CAT_EDITOR: &str = "editor";

/// Проверка формата `{entity}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_product--list"));
        assert!(!is_valid_page_id("a001_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_product--"));
    }
}
