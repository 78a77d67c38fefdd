use crate::layout::left::menu::{group_of, sanitize_expanded, toggle_id};
use crate::layout::pages::Page;
use crate::shared::config::AppConfig;
use crate::shared::storage;
use leptos::prelude::*;

/// Состояние оболочки: текущая страница, раскрытые группы меню и видимость
/// боковой панели. Создаётся один раз в `App` и передаётся через контекст.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<Page>,
    pub expanded_groups: RwSignal<Vec<String>>,
    pub left_open: RwSignal<bool>,
    storage_key: StoredValue<String>,
}

impl AppGlobalContext {
    pub fn new(config: &AppConfig) -> Self {
        let storage_key = config.ui.sidebar_storage_key.clone();
        let start_page = Page::from_key(&config.ui.default_page);

        let mut expanded =
            sanitize_expanded(storage::load_json::<Vec<String>>(&storage_key).unwrap_or_default());
        if let Some(group) = group_of(start_page) {
            if !expanded.iter().any(|id| id == group) {
                expanded.push(group.to_string());
            }
        }

        Self {
            current_page: RwSignal::new(start_page),
            expanded_groups: RwSignal::new(expanded),
            left_open: RwSignal::new(true),
            storage_key: StoredValue::new(storage_key),
        }
    }

    pub fn navigate(&self, page: Page) {
        leptos::logging::log!("navigate: '{}'", page.key());
        self.current_page.set(page);
        if let Some(group) = group_of(page) {
            let already = self
                .expanded_groups
                .with_untracked(|groups| groups.iter().any(|id| id == group));
            if !already {
                self.expanded_groups.update(|groups| groups.push(group.to_string()));
                self.persist_expanded();
            }
        }
    }

    pub fn toggle_group(&self, id: &str) {
        self.expanded_groups.update(|groups| toggle_id(groups, id));
        self.persist_expanded();
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_groups.with(|groups| groups.iter().any(|g| g == id))
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    fn persist_expanded(&self) {
        let key = self.storage_key.get_value();
        self.expanded_groups
            .with_untracked(|groups| storage::save_json(&key, groups));
    }
}
