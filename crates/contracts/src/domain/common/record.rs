use crate::error::ValidationError;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Идентификатор записи. Новые записи получают `max(id) + 1`.
pub type RecordId = i64;

/// Поле с требованием уникальности внутри списка: (имя поля, значение)
pub type UniqueKey<'a> = (&'static str, &'a str);

/// Трейт для записи, хранимой в списке страницы
///
/// Определяет идентификатор и метаданные коллекции для UI и логов
pub trait Record:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Поле, значение которого должно быть уникальным в списке (slug, code, email)
    fn unique_key(&self) -> Option<UniqueKey<'_>> {
        None
    }

    // ============================================================================
    // Метаданные коллекции
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "product")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя агрегата (например, "a001_product")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Записи с явным указателем на родителя (категории, пункты меню)
pub trait Hierarchical: Record {
    fn parent_id(&self) -> Option<RecordId>;

    /// Ключ сортировки среди соседей. По умолчанию порядок вставки.
    fn sibling_order(&self) -> i64 {
        0
    }
}

/// Записи с явным полем порядка (секции главной, пункты меню)
pub trait Ordered: Record {
    fn order(&self) -> i64;

    fn set_order(&mut self, order: i64);
}

/// Форма создания/редактирования записи.
///
/// Форма содержит только редактируемые поля: `apply` переписывает их на
/// существующую запись, всё остальное (id, счётчики, даты) остаётся как было.
pub trait RecordForm: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    type Record: Record;

    /// Заполнить форму из записи (режим редактирования)
    fn from_record(record: &Self::Record) -> Self;

    /// Построить новую запись с заданным id
    fn create(&self, id: RecordId) -> Self::Record;

    /// Перенести поля формы на запись
    fn apply(&self, record: &mut Self::Record);

    /// Обязательные поля и простые ограничения
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Перенести текст из формы, обрезав пробелы по краям.
///
/// Поле, которое пользователь не трогал, остаётся как было в записи,
/// даже если там есть пробелы: сохранение без правок не меняет строку.
pub fn assign_trimmed(target: &mut String, input: &str) {
    if target != input {
        *target = input.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_trimmed_keeps_untouched_value() {
        let mut name = " Tai nghe ".to_string();
        assign_trimmed(&mut name, " Tai nghe ");
        assert_eq!(name, " Tai nghe ");

        assign_trimmed(&mut name, "  Tai nghe mới ");
        assert_eq!(name, "Tai nghe mới");
    }
}
