//! Ошибки доменного слоя: валидация форм и операции над хранилищем записей.

use crate::domain::common::RecordId;
use std::cmp::Ordering;
use thiserror::Error;

/// Ошибка валидации формы.
///
/// Текст ошибки показывается прямо в модальной форме, поэтому сообщения
/// написаны для пользователя.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Trường \"{field}\" là bắt buộc")]
    Required { field: &'static str },

    #[error("Trường \"{field}\" không được âm")]
    Negative { field: &'static str },

    #[error("Trường \"{field}\" không hợp lệ")]
    Malformed { field: &'static str },

    #[error("Giá trị \"{value}\" của trường \"{field}\" đã tồn tại")]
    Duplicate { field: &'static str, value: String },

    #[error("Không thể thay đổi: {reason}")]
    Locked { reason: String },
}

/// Ошибка операции над [`RecordStore`](crate::domain::common::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Không tìm thấy bản ghi {collection} #{id}")]
    NotFound {
        collection: &'static str,
        id: RecordId,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Проверка обязательного текстового поля (аналог нативного `required`).
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

/// Проверка неотрицательного числа. Несравнимое значение (NaN) некорректно.
pub fn non_negative<T>(field: &'static str, value: T) -> Result<(), ValidationError>
where
    T: PartialOrd + Default,
{
    match value.partial_cmp(&T::default()) {
        Some(Ordering::Less) => Err(ValidationError::Negative { field }),
        Some(_) => Ok(()),
        None => Err(ValidationError::Malformed { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert_eq!(
            require("name", "   "),
            Err(ValidationError::Required { field: "name" })
        );
        assert!(require("name", "Áo thun").is_ok());
    }

    #[test]
    fn test_non_negative() {
        assert!(non_negative("stock", 0_i64).is_ok());
        assert_eq!(
            non_negative("price", -1.5_f64),
            Err(ValidationError::Negative { field: "price" })
        );
    }

    #[test]
    fn test_non_negative_rejects_nan() {
        assert_eq!(
            non_negative("price", f64::NAN),
            Err(ValidationError::Malformed { field: "price" })
        );
    }

    #[test]
    fn test_store_error_wraps_validation_message() {
        let err: StoreError = ValidationError::Required { field: "slug" }.into();
        assert_eq!(err.to_string(), "Trường \"slug\" là bắt buộc");
    }
}
