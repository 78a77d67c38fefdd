use crate::shared::crud::form::{auto_fill, parent_key, parse_parent};
use crate::shared::crud::CrudPage;
use contracts::domain::a003_category::aggregate::{Category, CategoryForm};
use contracts::domain::common::Record;
use contracts::shared::slug::{slugify, unique_token};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub name: RwSignal<String>,
    pub slug: RwSignal<String>,
    pub description: RwSignal<String>,
    /// Ключ родителя; пустая строка для корневой категории
    pub parent: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl CategoryDetailsViewModel {
    pub fn new(form: &CategoryForm) -> Self {
        Self {
            name: RwSignal::new(form.name.clone()),
            slug: RwSignal::new(form.slug.clone()),
            description: RwSignal::new(form.description.clone()),
            parent: RwSignal::new(parent_key(form.parent_id)),
            error: RwSignal::new(None),
        }
    }

    /// Slug заполняется из названия и делается уникальным среди остальных категорий
    pub fn bind_slug(&self, page: CrudPage<Category>) {
        let editing = page.editing.get_untracked();
        let taken: Vec<String> = page.store.with_untracked(|store| {
            store
                .items()
                .iter()
                .filter(|c| Some(c.id()) != editing)
                .map(|c| c.slug.clone())
                .collect()
        });
        auto_fill(self.name, self.slug, move |name| {
            unique_token(&slugify(name), '-', taken.iter().map(String::as_str))
        });
    }

    fn to_form(self) -> CategoryForm {
        CategoryForm {
            name: self.name.get_untracked(),
            slug: self.slug.get_untracked().trim().to_string(),
            description: self.description.get_untracked(),
            parent_id: parse_parent(&self.parent.get_untracked()),
        }
    }

    pub fn save_command(&self, page: CrudPage<Category>) {
        match page.submit(&self.to_form()) {
            Ok(id) => log::debug!("category form saved #{}", id),
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}
