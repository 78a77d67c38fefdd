mod view;
mod view_model;

pub use view::PostDetails;
pub use view_model::PostDetailsViewModel;
