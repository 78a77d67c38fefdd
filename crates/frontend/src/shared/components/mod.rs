pub mod badge;
pub mod card_animated;
pub mod form_field;
pub mod page_header;
pub mod row_actions;
pub mod select_cell;
pub mod stat_card;
pub mod table_footer;
