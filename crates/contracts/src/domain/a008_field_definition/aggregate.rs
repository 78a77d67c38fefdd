use crate::domain::common::{assign_trimmed, ActiveStatus, Record, RecordForm, RecordId, UniqueKey};
use crate::error::{require, ValidationError};
use crate::shared::choice::Choice;
use crate::shared::list_filter::{matches_query, Facet, ListFilter};
use crate::shared::slug::{codify, is_valid_token, CODE_SEPARATOR};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;

/// Вид элемента справочника полей.
///
/// Кроме значений перечисления задаёт метаданные коллекции, чтобы один
/// агрегат [`FieldDefinition`] обслуживал оба справочника.
pub trait FieldKind: Choice + Debug + Default + Eq + Serialize + DeserializeOwned {
    const INDEX: &'static str;
    const COLLECTION: &'static str;
    const ELEMENT: &'static str;
    const LIST: &'static str;

    /// Имя иконки в наборе иконок фронтенда
    fn icon(&self) -> &'static str;
}

/// Элемент справочника полей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "K: FieldKind")]
pub struct FieldDefinition<K: FieldKind> {
    pub id: RecordId,
    pub name: String,
    pub code: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: K,
    pub status: ActiveStatus,
    /// Сколько полей используют этот элемент
    #[serde(rename = "usageCount", default)]
    pub usage_count: u32,
}

impl<K: FieldKind> Record for FieldDefinition<K> {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn unique_key(&self) -> Option<UniqueKey<'_>> {
        Some(("code", &self.code))
    }

    fn aggregate_index() -> &'static str {
        K::INDEX
    }

    fn collection_name() -> &'static str {
        K::COLLECTION
    }

    fn element_name() -> &'static str {
        K::ELEMENT
    }

    fn list_name() -> &'static str {
        K::LIST
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDefinitionForm<K: FieldKind> {
    pub name: String,
    pub code: String,
    pub description: String,
    pub kind: K,
    pub status: ActiveStatus,
}

impl<K: FieldKind> FieldDefinitionForm<K> {
    /// Новая форма с кодом, выведенным из имени
    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            code: codify(name),
            ..Default::default()
        }
    }
}

impl<K: FieldKind> RecordForm for FieldDefinitionForm<K> {
    type Record = FieldDefinition<K>;

    fn from_record(record: &FieldDefinition<K>) -> Self {
        Self {
            name: record.name.clone(),
            code: record.code.clone(),
            description: record.description.clone(),
            kind: record.kind,
            status: record.status,
        }
    }

    fn create(&self, id: RecordId) -> FieldDefinition<K> {
        let mut record = FieldDefinition {
            id,
            name: String::new(),
            code: String::new(),
            description: String::new(),
            kind: K::default(),
            status: ActiveStatus::Active,
            usage_count: 0,
        };
        self.apply(&mut record);
        record
    }

    fn apply(&self, record: &mut FieldDefinition<K>) {
        assign_trimmed(&mut record.name, &self.name);
        record.code = self.code.clone();
        record.description = self.description.clone();
        record.kind = self.kind;
        record.status = self.status;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("code", &self.code)?;
        if !is_valid_token(&self.code, CODE_SEPARATOR) {
            return Err(ValidationError::Malformed { field: "code" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDefinitionFilter<K: FieldKind> {
    pub query: String,
    pub kind: Facet<K>,
    pub status: Facet<ActiveStatus>,
}

impl<K: FieldKind> ListFilter<FieldDefinition<K>> for FieldDefinitionFilter<K> {
    fn matches(&self, record: &FieldDefinition<K>) -> bool {
        matches_query(
            &self.query,
            &[&record.name, &record.code, &record.description],
        ) && self.kind.matches(&record.kind)
            && self.status.matches(&record.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_field_definition::format::FormatKind;
    use crate::domain::a008_field_definition::position::PositionKind;
    use crate::domain::a008_field_definition::samples::{sample_formats, sample_positions};
    use crate::domain::common::RecordStore;
    use crate::error::StoreError;
    use crate::shared::list_filter::apply_filter;

    #[test]
    fn test_code_from_name() {
        let form = FieldDefinitionForm::<PositionKind>::with_name("Vị trí đầu trang");
        assert_eq!(form.code, "vi_tri_dau_trang");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_malformed_code() {
        let mut form = FieldDefinitionForm::<FormatKind>::with_name("Tiền tệ");
        form.code = "Tien Te".to_string();
        assert_eq!(
            form.validate(),
            Err(ValidationError::Malformed { field: "code" })
        );
    }

    #[test]
    fn test_underscored_code_is_accepted() {
        let mut form = FieldDefinitionForm::<PositionKind>::with_name("Vị trí đầu trang");
        assert_eq!(form.code, "vi_tri_dau_trang");
        assert_eq!(form.validate(), Ok(()));

        form.code = "vi-tri".to_string();
        assert_eq!(
            form.validate(),
            Err(ValidationError::Malformed { field: "code" })
        );
    }

    #[test]
    fn test_duplicate_code() {
        let mut store = RecordStore::from_items(sample_positions());
        let existing = store.items()[0].code.clone();
        let form = FieldDefinitionForm {
            name: "Bản sao".to_string(),
            code: existing,
            ..FieldDefinitionForm::<PositionKind>::default()
        };
        assert!(matches!(
            store.create(&form),
            Err(StoreError::Validation(ValidationError::Duplicate { field: "code", .. }))
        ));
    }

    #[test]
    fn test_toggle_status_and_filter() {
        let mut store = RecordStore::from_items(sample_formats());
        store
            .modify(1, |record| {
                record.status = record.status.toggled();
                Ok(())
            })
            .unwrap();
        let inactive = FieldDefinitionFilter::<FormatKind> {
            status: Facet::Only(ActiveStatus::Inactive),
            ..Default::default()
        };
        let found = apply_filter(store.items(), &inactive);
        assert!(found.iter().any(|record| record.id == 1));
        assert!(found.iter().all(|record| !record.status.is_active()));
    }

    #[test]
    fn test_collection_metadata() {
        assert_eq!(FieldDefinition::<PositionKind>::full_name(), "a008_field_position");
        assert_eq!(FieldDefinition::<FormatKind>::full_name(), "a010_field_format");
    }

    #[test]
    fn test_serialized_kind_uses_key() {
        let record = &sample_formats()[0];
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["type"], record.kind.key());
        assert_eq!(json["status"], "active");
    }
}
