mod view;
mod view_model;

pub use view::MediaDetails;
pub use view_model::MediaDetailsViewModel;
