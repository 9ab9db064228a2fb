use serde::Serialize;

use crate::domain::value_objects::{enums::sort_directions::SortDirection, items::Item};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub key: &'static str,
    pub item: Item,
}

impl From<Item> for ListEntry {
    fn from(item: Item) -> Self {
        Self {
            key: item.label(),
            item,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioOption {
    pub name: &'static str,
    pub direction: SortDirection,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub controls: [RadioOption; 2],
    pub entries: Vec<ListEntry>,
}

impl PageView {
    pub fn checked(&self) -> Option<SortDirection> {
        self.controls
            .iter()
            .find(|option| option.checked)
            .map(|option| option.direction)
    }
}
