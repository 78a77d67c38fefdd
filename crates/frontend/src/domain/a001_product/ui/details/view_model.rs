use crate::shared::crud::form::{parse_choice, parse_number};
use crate::shared::crud::CrudPage;
use contracts::domain::a001_product::aggregate::{Product, ProductForm, ProductStatus};
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use leptos::prelude::*;

/// ViewModel формы товара
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub status: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl ProductDetailsViewModel {
    pub fn new(form: &ProductForm) -> Self {
        Self {
            name: RwSignal::new(form.name.clone()),
            category: RwSignal::new(form.category.clone()),
            price: RwSignal::new(if form.price == 0.0 {
                String::new()
            } else {
                form.price.to_string()
            }),
            stock: RwSignal::new(form.stock.to_string()),
            status: RwSignal::new(form.status.key().to_string()),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> Result<ProductForm, ValidationError> {
        Ok(ProductForm {
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            price: parse_number("price", &self.price.get_untracked())?,
            stock: parse_number("stock", &self.stock.get_untracked())?,
            status: parse_choice::<ProductStatus>("status", &self.status.get_untracked())?,
        })
    }

    pub fn save_command(&self, page: CrudPage<Product>) {
        let result = self
            .to_form()
            .map_err(|e| e.to_string())
            .and_then(|form| page.submit(&form).map_err(|e| e.to_string()));
        match result {
            Ok(_) => self.error.set(None),
            Err(message) => self.error.set(Some(message)),
        }
    }
}
