use crate::domain::common::{assign_trimmed, Ordered, Record, RecordForm, RecordId};
use crate::error::{require, ValidationError};
use serde::{Deserialize, Serialize};

crate::choice_enum! {
    /// Тип блока главной страницы магазина
    pub enum HomeSectionKind {
        HeroBanner => ("hero_banner", "Banner chính"),
        FeaturedProducts => ("featured_products", "Sản phẩm nổi bật"),
        CategoryShowcase => ("category_showcase", "Danh mục nổi bật"),
        LatestPosts => ("latest_posts", "Bài viết mới"),
        PromoBanner => ("promo_banner", "Banner khuyến mãi"),
        Newsletter => ("newsletter", "Đăng ký nhận tin"),
    }
}

/// Блок главной страницы. Порядок вывода задаётся полем `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeSection {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: HomeSectionKind,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub order: i64,
    pub visible: bool,
}

impl Record for HomeSection {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "home_section"
    }

    fn element_name() -> &'static str {
        "Khối"
    }

    fn list_name() -> &'static str {
        "Trang chủ"
    }
}

impl Ordered for HomeSection {
    fn order(&self) -> i64 {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

/// Секции в порядке вывода
pub fn sorted_sections(sections: &[HomeSection]) -> Vec<HomeSection> {
    let mut sorted = sections.to_vec();
    sorted.sort_by_key(|section| section.order);
    sorted
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeSectionForm {
    pub kind: HomeSectionKind,
    pub title: String,
    pub subtitle: String,
    pub visible: bool,
    /// Позиция новой секции; при редактировании не меняется
    pub order: i64,
}

impl RecordForm for HomeSectionForm {
    type Record = HomeSection;

    fn from_record(record: &HomeSection) -> Self {
        Self {
            kind: record.kind,
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            visible: record.visible,
            order: record.order,
        }
    }

    fn create(&self, id: RecordId) -> HomeSection {
        let mut section = HomeSection {
            id,
            kind: self.kind,
            title: String::new(),
            subtitle: String::new(),
            order: self.order,
            visible: true,
        };
        self.apply(&mut section);
        section
    }

    fn apply(&self, record: &mut HomeSection) {
        record.kind = self.kind;
        assign_trimmed(&mut record.title, &self.title);
        record.subtitle = self.subtitle.clone();
        record.visible = self.visible;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_home_section::samples::sample_home_sections;
    use crate::domain::common::{MoveDirection, RecordStore};

    fn ids(store: &RecordStore<HomeSection>) -> Vec<RecordId> {
        sorted_sections(store.items()).iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_move_down_and_up() {
        let mut store = RecordStore::from_items(sample_home_sections());
        assert_eq!(ids(&store), vec![1, 2, 3, 4, 5]);

        assert!(store.move_within(1, MoveDirection::Down, |_| ()).unwrap());
        assert_eq!(ids(&store), vec![2, 1, 3, 4, 5]);

        assert!(store.move_within(5, MoveDirection::Up, |_| ()).unwrap());
        assert_eq!(ids(&store), vec![2, 1, 3, 5, 4]);

        assert!(!store.move_within(4, MoveDirection::Down, |_| ()).unwrap());
    }

    #[test]
    fn test_new_section_goes_last() {
        let mut store = RecordStore::from_items(sample_home_sections());
        let form = HomeSectionForm {
            kind: HomeSectionKind::Newsletter,
            title: "Nhận ưu đãi qua email".to_string(),
            visible: true,
            order: store.next_order(&(), |_| ()),
            ..Default::default()
        };
        let id = store.create(&form).unwrap();
        assert_eq!(ids(&store).last(), Some(&id));
    }

    #[test]
    fn test_toggle_visibility_keeps_order() {
        let mut store = RecordStore::from_items(sample_home_sections());
        let before = store.get(3).cloned().unwrap();
        store
            .modify(3, |section| {
                section.visible = !section.visible;
                Ok(())
            })
            .unwrap();
        let after = store.get(3).unwrap();
        assert_eq!(after.visible, !before.visible);
        assert_eq!(after.order, before.order);
    }
}
