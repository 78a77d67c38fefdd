//! Product details (modal form)
//!
//! - view_model.rs: поля формы как сигналы + команда сохранения
//! - view.rs: Leptos компонент

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
