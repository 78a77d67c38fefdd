use crate::domain::common::{assign_trimmed, Hierarchical, Ordered, Record, RecordForm, RecordId};
use crate::error::{non_negative, require, ValidationError};
use crate::shared::list_filter::{matches_query, Facet, ListFilter};
use serde::{Deserialize, Serialize};

crate::choice_enum! {
    /// На что ссылается пункт меню
    pub enum MenuItemKind {
        Page => ("page", "Trang"),
        Category => ("category", "Danh mục"),
        Post => ("post", "Bài viết"),
        Custom => ("custom", "Liên kết tùy chỉnh"),
    }
}

/// Пункт навигационного меню сайта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: RecordId,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MenuItemKind,
    pub order: i64,
    #[serde(rename = "parentId")]
    pub parent_id: Option<RecordId>,
}

impl Record for MenuItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "menu_item"
    }

    fn element_name() -> &'static str {
        "Mục menu"
    }

    fn list_name() -> &'static str {
        "Menu"
    }
}

impl Hierarchical for MenuItem {
    fn parent_id(&self) -> Option<RecordId> {
        self.parent_id
    }

    fn sibling_order(&self) -> i64 {
        self.order
    }
}

impl Ordered for MenuItem {
    fn order(&self) -> i64 {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemForm {
    pub title: String,
    pub url: String,
    pub kind: MenuItemKind,
    pub order: i64,
    pub parent_id: Option<RecordId>,
}

impl RecordForm for MenuItemForm {
    type Record = MenuItem;

    fn from_record(record: &MenuItem) -> Self {
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            kind: record.kind,
            order: record.order,
            parent_id: record.parent_id,
        }
    }

    fn create(&self, id: RecordId) -> MenuItem {
        let mut item = MenuItem {
            id,
            title: String::new(),
            url: String::new(),
            kind: MenuItemKind::default(),
            order: 0,
            parent_id: None,
        };
        self.apply(&mut item);
        item
    }

    fn apply(&self, record: &mut MenuItem) {
        assign_trimmed(&mut record.title, &self.title);
        assign_trimmed(&mut record.url, &self.url);
        record.kind = self.kind;
        record.order = self.order;
        // пункт не может быть родителем сам себе
        record.parent_id = self.parent_id.filter(|&parent| parent != record.id);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("url", &self.url)?;
        non_negative("order", self.order)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemFilter {
    pub query: String,
    pub kind: Facet<MenuItemKind>,
}

impl ListFilter<MenuItem> for MenuItemFilter {
    fn matches(&self, record: &MenuItem) -> bool {
        matches_query(&self.query, &[&record.title, &record.url]) && self.kind.matches(&record.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_menu_item::samples::sample_menu_items;
    use crate::domain::common::hierarchy::tree_rows;
    use crate::domain::common::{MoveDirection, RecordStore};

    #[test]
    fn test_tree_rows_follow_order() {
        let items = sample_menu_items();
        let rows: Vec<(RecordId, usize)> = tree_rows(&items)
            .iter()
            .map(|row| (row.record.id, row.depth))
            .collect();
        assert_eq!(
            rows,
            vec![(1, 0), (2, 0), (5, 1), (6, 1), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn test_delete_parent_removes_children() {
        let mut store = RecordStore::from_items(sample_menu_items());
        let before = store.len();
        let removed = store.remove_subtree(2).unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(store.len(), before - 3);
        assert!(store.items().iter().all(|item| item.parent_id != Some(2)));
        assert!(store.contains(1));
    }

    #[test]
    fn test_move_between_siblings() {
        let mut store = RecordStore::from_items(sample_menu_items());
        assert!(store
            .move_within(6, MoveDirection::Up, |item: &MenuItem| item.parent_id)
            .unwrap());
        let order = |id| store.get(id).map(|item| item.order);
        assert!(order(6) < order(5));
        // root order unaffected
        assert_eq!(store.get(1).map(|item| item.order), Some(1));
        // already first
        assert!(!store
            .move_within(1, MoveDirection::Up, |item: &MenuItem| item.parent_id)
            .unwrap());
    }

    #[test]
    fn test_self_parent_is_dropped() {
        let mut store = RecordStore::from_items(sample_menu_items());
        let mut form = MenuItemForm::from_record(store.get(3).unwrap());
        form.parent_id = Some(3);
        store.update(3, &form).unwrap();
        assert_eq!(store.get(3).unwrap().parent_id, None);
    }

    #[test]
    fn test_validation() {
        let form = MenuItemForm {
            title: "Liên hệ".to_string(),
            url: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Required { field: "url" })
        );
        let form = MenuItemForm {
            url: "/lien-he".to_string(),
            order: -1,
            ..form
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Negative { field: "order" })
        );
    }
}
