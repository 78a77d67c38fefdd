use crate::shared::crud::form::{auto_fill, parse_choice};
use crate::shared::crud::CrudPage;
use contracts::domain::a008_field_definition::aggregate::{
    FieldDefinition, FieldDefinitionForm, FieldKind,
};
use contracts::domain::common::{ActiveStatus, Record};
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use contracts::shared::slug::{codify, unique_token};
use leptos::prelude::*;

/// ViewModel формы справочника полей (позиции и форматы)
#[derive(Clone, Copy)]
pub struct FieldDefinitionDetailsViewModel {
    pub name: RwSignal<String>,
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub kind: RwSignal<String>,
    pub status: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl FieldDefinitionDetailsViewModel {
    pub fn new<K: FieldKind>(page: CrudPage<FieldDefinition<K>>) -> Self {
        let form = page.seed_form::<FieldDefinitionForm<K>>();
        let vm = Self {
            name: RwSignal::new(form.name.clone()),
            code: RwSignal::new(form.code.clone()),
            description: RwSignal::new(form.description.clone()),
            kind: RwSignal::new(form.kind.key().to_string()),
            status: RwSignal::new(form.status.key().to_string()),
            error: RwSignal::new(None),
        };

        let editing = page.editing.get_untracked();
        let taken: Vec<String> = page.store.with_untracked(|store| {
            store
                .items()
                .iter()
                .filter(|f| Some(f.id()) != editing)
                .map(|f| f.code.clone())
                .collect()
        });
        auto_fill(vm.name, vm.code, move |name| {
            unique_token(&codify(name), '_', taken.iter().map(String::as_str))
        });
        vm
    }

    fn to_form<K: FieldKind>(self) -> Result<FieldDefinitionForm<K>, ValidationError> {
        Ok(FieldDefinitionForm {
            name: self.name.get_untracked(),
            code: self.code.get_untracked().trim().to_string(),
            description: self.description.get_untracked(),
            kind: parse_choice::<K>("type", &self.kind.get_untracked())?,
            status: parse_choice::<ActiveStatus>("status", &self.status.get_untracked())?,
        })
    }

    pub fn save_command<K: FieldKind>(&self, page: CrudPage<FieldDefinition<K>>) {
        let result = self
            .to_form::<K>()
            .map_err(|e| e.to_string())
            .and_then(|form| page.submit(&form).map_err(|e| e.to_string()));
        self.error.set(result.err());
    }
}
