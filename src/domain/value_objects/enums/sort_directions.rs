use std::fmt::Display;

use serde::Serialize;

use crate::domain::value_objects::query_state::QueryState;

pub const SORT_ORDER_KEY: &str = "sortOrder";

#[derive(Default, Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

    /// Reads the direction from the query. Only a single `sortOrder=desc`
    /// yields `Descending`; anything else, including absence, is `Ascending`.
    pub fn from_query(query: &QueryState) -> Self {
        query
            .get(SORT_ORDER_KEY)
            .map(Self::from_marker)
            .unwrap_or_default()
    }

    pub fn from_marker(marker: &str) -> Self {
        match marker {
            "desc" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "sort ascending",
            SortDirection::Descending => "sort descending",
        }
    }

    /// The query string that selects this direction and nothing else.
    pub fn to_query(&self) -> QueryState {
        QueryState::new().with(SORT_ORDER_KEY, self.marker())
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}
