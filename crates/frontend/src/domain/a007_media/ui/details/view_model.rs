use crate::shared::crud::form::{auto_fill, parse_choice, parse_number};
use crate::shared::crud::CrudPage;
use contracts::domain::a007_media::aggregate::{MediaFolder, MediaForm, MediaItem};
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use contracts::shared::time::now_rfc3339;
use leptos::prelude::*;

/// Файлы регистрируются по ссылке, загрузки нет
#[derive(Clone, Copy)]
pub struct MediaDetailsViewModel {
    pub file_name: RwSignal<String>,
    pub url: RwSignal<String>,
    pub folder: RwSignal<String>,
    pub alt_text: RwSignal<String>,
    pub size_bytes: RwSignal<String>,
    uploaded_at: StoredValue<String>,
    pub error: RwSignal<Option<String>>,
}

impl MediaDetailsViewModel {
    pub fn new(form: &MediaForm) -> Self {
        let uploaded_at = if form.uploaded_at.is_empty() {
            now_rfc3339()
        } else {
            form.uploaded_at.clone()
        };
        let vm = Self {
            file_name: RwSignal::new(form.file_name.clone()),
            url: RwSignal::new(form.url.clone()),
            folder: RwSignal::new(form.folder.key().to_string()),
            alt_text: RwSignal::new(form.alt_text.clone()),
            size_bytes: RwSignal::new(form.size_bytes.to_string()),
            uploaded_at: StoredValue::new(uploaded_at),
            error: RwSignal::new(None),
        };
        auto_fill(vm.file_name, vm.url, |name| {
            let name = name.trim();
            if name.is_empty() {
                String::new()
            } else {
                format!("/uploads/{}", name)
            }
        });
        vm
    }

    fn to_form(self) -> Result<MediaForm, ValidationError> {
        Ok(MediaForm {
            file_name: self.file_name.get_untracked(),
            url: self.url.get_untracked(),
            folder: parse_choice::<MediaFolder>("folder", &self.folder.get_untracked())?,
            alt_text: self.alt_text.get_untracked(),
            size_bytes: parse_number("size", &self.size_bytes.get_untracked())?,
            uploaded_at: self.uploaded_at.get_value(),
        })
    }

    pub fn save_command(&self, page: CrudPage<MediaItem>) {
        let result = self
            .to_form()
            .map_err(|e| e.to_string())
            .and_then(|form| page.submit(&form).map_err(|e| e.to_string()));
        self.error.set(result.err());
    }
}
