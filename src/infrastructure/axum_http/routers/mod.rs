pub mod items;
pub mod page;
