use contracts::domain::a001_product::aggregate::ProductFilter;
use contracts::shared::list_filter::{Facet, FACET_ALL};
use leptos::prelude::*;

/// Фильтр и состояние загрузки списка товаров
#[derive(Clone, Copy)]
pub struct ProductListState {
    pub query: RwSignal<String>,
    pub category: RwSignal<String>,
    pub status: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl ProductListState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            category: RwSignal::new(FACET_ALL.to_string()),
            status: RwSignal::new(FACET_ALL.to_string()),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            query: self.query.get(),
            category: Facet::from_text_key(&self.category.get()),
            status: Facet::from_choice_key(&self.status.get()),
        }
    }
}
