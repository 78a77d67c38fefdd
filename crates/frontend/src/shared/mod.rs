pub mod components;
pub mod config;
pub mod confirm;
pub mod crud;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod remote;
pub mod storage;
