pub mod enums;
pub mod items;
pub mod navigation;
pub mod page_view;
pub mod query_state;
