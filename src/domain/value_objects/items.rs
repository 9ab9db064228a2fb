use std::fmt::Display;

use serde::Serialize;

/// A fixed, immutable list label.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Item(&'static str);

impl Item {
    pub const fn new(label: &'static str) -> Self {
        Self(label)
    }

    pub fn label(&self) -> &'static str {
        self.0
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const FRUITS: [Item; 3] = [Item::new("Cherry"), Item::new("Apple"), Item::new("Banana")];
