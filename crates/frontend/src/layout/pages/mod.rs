pub mod page_keys;
pub mod registry;

pub use page_keys::Page;
pub use registry::render_page;
