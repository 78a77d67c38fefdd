mod view;
mod view_model;

pub use view::MenuItemDetails;
pub use view_model::MenuItemDetailsViewModel;
