mod view;
mod view_model;

pub use view::FieldDefinitionDetails;
pub use view_model::FieldDefinitionDetailsViewModel;
