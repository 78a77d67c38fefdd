use crate::shared::crud::form::{parent_key, parse_choice, parse_number, parse_parent};
use crate::shared::crud::CrudPage;
use contracts::domain::a005_menu_item::aggregate::{MenuItem, MenuItemForm, MenuItemKind};
use contracts::domain::common::hierarchy::next_sibling_order;
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MenuItemDetailsViewModel {
    pub title: RwSignal<String>,
    pub url: RwSignal<String>,
    pub kind: RwSignal<String>,
    pub order: RwSignal<String>,
    pub parent: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl MenuItemDetailsViewModel {
    pub fn new(page: CrudPage<MenuItem>) -> Self {
        let form = page.seed_form::<MenuItemForm>();
        // Новый пункт встаёт последним среди корневых
        let order = if page.editing.get_untracked().is_none() {
            page.store
                .with_untracked(|store| next_sibling_order(store.items(), None))
        } else {
            form.order
        };
        Self {
            title: RwSignal::new(form.title.clone()),
            url: RwSignal::new(form.url.clone()),
            kind: RwSignal::new(form.kind.key().to_string()),
            order: RwSignal::new(order.to_string()),
            parent: RwSignal::new(parent_key(form.parent_id)),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> Result<MenuItemForm, ValidationError> {
        Ok(MenuItemForm {
            title: self.title.get_untracked(),
            url: self.url.get_untracked(),
            kind: parse_choice::<MenuItemKind>("type", &self.kind.get_untracked())?,
            order: parse_number("order", &self.order.get_untracked())?,
            parent_id: parse_parent(&self.parent.get_untracked()),
        })
    }

    pub fn save_command(&self, page: CrudPage<MenuItem>) {
        let result = self
            .to_form()
            .map_err(|e| e.to_string())
            .and_then(|form| page.submit(&form).map_err(|e| e.to_string()));
        self.error.set(result.err());
    }
}
