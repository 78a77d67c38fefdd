pub mod choice;
pub mod list_filter;
pub mod slug;
pub mod time;
