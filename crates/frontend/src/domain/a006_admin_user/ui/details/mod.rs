mod view;
mod view_model;

pub use view::AdminUserDetails;
pub use view_model::AdminUserDetailsViewModel;
