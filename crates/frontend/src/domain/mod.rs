pub mod a001_product;
pub mod a002_post;
pub mod a003_category;
pub mod a004_order;
pub mod a005_menu_item;
pub mod a006_admin_user;
pub mod a007_media;
pub mod a008_field_definition;
pub mod a009_home_section;
