mod view;
mod view_model;

pub use view::HomeSectionDetails;
pub use view_model::HomeSectionDetailsViewModel;
