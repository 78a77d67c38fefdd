use crate::shared::crud::form::parse_choice;
use crate::shared::crud::CrudPage;
use contracts::domain::a009_home_section::aggregate::{
    HomeSection, HomeSectionForm, HomeSectionKind,
};
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct HomeSectionDetailsViewModel {
    pub kind: RwSignal<String>,
    pub title: RwSignal<String>,
    pub subtitle: RwSignal<String>,
    pub visible: RwSignal<bool>,
    order: StoredValue<i64>,
    pub error: RwSignal<Option<String>>,
}

impl HomeSectionDetailsViewModel {
    pub fn new(page: CrudPage<HomeSection>) -> Self {
        let form = page.seed_form::<HomeSectionForm>();
        let is_new = page.editing.get_untracked().is_none();
        let order = if is_new {
            page.store.with_untracked(|store| store.next_order(&(), |_| ()))
        } else {
            form.order
        };
        Self {
            kind: RwSignal::new(form.kind.key().to_string()),
            title: RwSignal::new(form.title.clone()),
            subtitle: RwSignal::new(form.subtitle.clone()),
            // новая секция сразу видима
            visible: RwSignal::new(form.visible || is_new),
            order: StoredValue::new(order),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> Result<HomeSectionForm, ValidationError> {
        Ok(HomeSectionForm {
            kind: parse_choice::<HomeSectionKind>("type", &self.kind.get_untracked())?,
            title: self.title.get_untracked(),
            subtitle: self.subtitle.get_untracked(),
            visible: self.visible.get_untracked(),
            order: self.order.get_value(),
        })
    }

    pub fn save_command(&self, page: CrudPage<HomeSection>) {
        let result = self
            .to_form()
            .map_err(|e| e.to_string())
            .and_then(|form| page.submit(&form).map_err(|e| e.to_string()));
        self.error.set(result.err());
    }
}
