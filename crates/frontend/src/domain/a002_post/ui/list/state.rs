use contracts::domain::a002_post::aggregate::PostFilter;
use contracts::shared::list_filter::{Facet, FACET_ALL};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PostListState {
    pub query: RwSignal<String>,
    pub category: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl PostListState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            category: RwSignal::new(FACET_ALL.to_string()),
            status: RwSignal::new(FACET_ALL.to_string()),
        }
    }

    pub fn filter(&self) -> PostFilter {
        PostFilter {
            query: self.query.get(),
            category: Facet::from_text_key(&self.category.get()),
            status: Facet::from_choice_key(&self.status.get()),
        }
    }
}
