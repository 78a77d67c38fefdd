pub mod details;
pub mod editor;
