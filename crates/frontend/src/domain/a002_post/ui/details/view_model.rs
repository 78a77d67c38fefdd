use crate::shared::crud::form::parse_choice;
use crate::shared::crud::CrudPage;
use contracts::domain::a002_post::aggregate::{join_tags, parse_tags, Post, PostForm, PostStatus};
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use contracts::shared::time::today;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PostDetailsViewModel {
    pub title: RwSignal<String>,
    pub excerpt: RwSignal<String>,
    pub content: RwSignal<String>,
    pub category: RwSignal<String>,
    pub status: RwSignal<String>,
    pub author: RwSignal<String>,
    pub publish_date: RwSignal<String>,
    pub featured: RwSignal<bool>,
    /// Теги через запятую
    pub tags: RwSignal<String>,
    pub featured_image: RwSignal<String>,
    pub seo_title: RwSignal<String>,
    pub seo_description: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl PostDetailsViewModel {
    pub fn new(form: &PostForm) -> Self {
        // Новый пост по умолчанию датируется сегодняшним днём
        let publish_date = if form.publish_date.is_empty() {
            today()
        } else {
            form.publish_date.clone()
        };
        Self {
            title: RwSignal::new(form.title.clone()),
            excerpt: RwSignal::new(form.excerpt.clone()),
            content: RwSignal::new(form.content.clone()),
            category: RwSignal::new(form.category.clone()),
            status: RwSignal::new(form.status.key().to_string()),
            author: RwSignal::new(form.author.clone()),
            publish_date: RwSignal::new(publish_date),
            featured: RwSignal::new(form.featured),
            tags: RwSignal::new(join_tags(&form.tags)),
            featured_image: RwSignal::new(form.featured_image.clone()),
            seo_title: RwSignal::new(form.seo_title.clone()),
            seo_description: RwSignal::new(form.seo_description.clone()),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> Result<PostForm, ValidationError> {
        Ok(PostForm {
            title: self.title.get_untracked(),
            excerpt: self.excerpt.get_untracked(),
            content: self.content.get_untracked(),
            category: self.category.get_untracked(),
            status: parse_choice::<PostStatus>("status", &self.status.get_untracked())?,
            author: self.author.get_untracked(),
            publish_date: self.publish_date.get_untracked(),
            featured: self.featured.get_untracked(),
            tags: parse_tags(&self.tags.get_untracked()),
            featured_image: self.featured_image.get_untracked(),
            seo_title: self.seo_title.get_untracked(),
            seo_description: self.seo_description.get_untracked(),
        })
    }

    pub fn save_command(&self, page: CrudPage<Post>) {
        self.save(page, false);
    }

    /// "Lưu nháp": тот же сабмит, но статус всегда черновик
    pub fn save_draft_command(&self, page: CrudPage<Post>) {
        self.save(page, true);
    }

    fn save(&self, page: CrudPage<Post>, draft: bool) {
        let result = self
            .to_form()
            .map(|form| if draft { form.as_draft() } else { form })
            .map_err(|e| e.to_string())
            .and_then(|form| page.submit(&form).map_err(|e| e.to_string()));
        self.error.set(result.err());
    }
}
