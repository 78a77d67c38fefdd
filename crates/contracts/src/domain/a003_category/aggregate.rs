use crate::domain::common::{assign_trimmed, Hierarchical, Record, RecordForm, RecordId, UniqueKey};
use crate::error::{require, ValidationError};
use crate::shared::list_filter::{matches_query, ListFilter};
use crate::shared::slug::{is_valid_token, slugify, SLUG_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Вариант справочника категорий: у товаров и у записей блога одинаковая
/// форма записи, различаются данные и подписи.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryVariant {
    Product,
    Post,
}

impl CategoryVariant {
    pub fn list_title(self) -> &'static str {
        match self {
            CategoryVariant::Product => "Danh mục sản phẩm",
            CategoryVariant::Post => "Danh mục bài viết",
        }
    }

    /// Подпись колонки счётчика
    pub fn count_label(self) -> &'static str {
        match self {
            CategoryVariant::Product => "Số sản phẩm",
            CategoryVariant::Post => "Số bài viết",
        }
    }
}

/// Категория (товаров или записей) с необязательным родителем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<RecordId>,
    /// Число товаров/записей в категории
    pub count: u32,
}

impl Record for Category {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn unique_key(&self) -> Option<UniqueKey<'_>> {
        Some(("slug", &self.slug))
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Danh mục"
    }

    fn list_name() -> &'static str {
        "Danh mục"
    }
}

impl Hierarchical for Category {
    fn parent_id(&self) -> Option<RecordId> {
        self.parent_id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<RecordId>,
}

impl CategoryForm {
    /// Новая форма с slug, выведенным из имени
    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slugify(name),
            ..Default::default()
        }
    }
}

impl RecordForm for CategoryForm {
    type Record = Category;

    fn from_record(record: &Category) -> Self {
        Self {
            name: record.name.clone(),
            slug: record.slug.clone(),
            description: record.description.clone(),
            parent_id: record.parent_id,
        }
    }

    fn create(&self, id: RecordId) -> Category {
        let mut category = Category {
            id,
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            parent_id: None,
            count: 0,
        };
        self.apply(&mut category);
        category
    }

    fn apply(&self, record: &mut Category) {
        assign_trimmed(&mut record.name, &self.name);
        record.slug = self.slug.clone();
        record.description = self.description.clone();
        record.parent_id = self.parent_id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("slug", &self.slug)?;
        if !is_valid_token(&self.slug, SLUG_SEPARATOR) {
            return Err(ValidationError::Malformed { field: "slug" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    pub query: String,
}

impl ListFilter<Category> for CategoryFilter {
    fn matches(&self, record: &Category) -> bool {
        matches_query(
            &self.query,
            &[&record.name, &record.slug, &record.description],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_category::samples::sample_categories;
    use crate::domain::common::hierarchy::tree_rows;
    use crate::domain::common::RecordStore;
    use crate::error::StoreError;

    #[test]
    fn test_add_category_gets_next_id_and_slug() {
        let mut store = RecordStore::from_items(sample_categories(CategoryVariant::Product));
        let ids: Vec<_> = store.items().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let id = store.create(&CategoryForm::with_name("Ưu đãi")).unwrap();
        assert_eq!(id, 5);
        let created = store.get(5).unwrap();
        assert_eq!(created.slug, "uu-dai");
        assert_eq!(created.parent_id, None);
        assert_eq!(created.count, 0);
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let mut store = RecordStore::from_items(sample_categories(CategoryVariant::Product));
        let result = store.create(&CategoryForm::with_name("Điện thoại"));
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::Duplicate { field: "slug", .. }))
        ));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_malformed_slug_is_rejected() {
        let form = CategoryForm {
            name: "Phụ kiện".to_string(),
            slug: "Phụ Kiện".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Malformed { field: "slug" })
        );
    }

    #[test]
    fn test_hyphenated_slug_is_accepted() {
        let form = CategoryForm {
            name: "Điện thoại".to_string(),
            slug: "dien-thoai-2".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Ok(()));

        let form = CategoryForm {
            slug: "dien_thoai".to_string(),
            ..form
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Malformed { field: "slug" })
        );
    }

    #[test]
    fn test_children_render_under_parents() {
        let categories = sample_categories(CategoryVariant::Product);
        let rows: Vec<(i64, usize)> = tree_rows(&categories)
            .into_iter()
            .map(|row| (row.record.id, row.depth))
            .collect();
        assert_eq!(rows, vec![(1, 0), (3, 1), (2, 0), (4, 1)]);
    }
}
