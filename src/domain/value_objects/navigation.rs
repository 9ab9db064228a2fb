use crate::domain::value_objects::query_state::QueryState;

/// A request to move to `pathname` with `query` as the whole query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub pathname: String,
    pub query: QueryState,
}

impl NavigationRequest {
    pub fn new(pathname: impl Into<String>, query: QueryState) -> Self {
        Self {
            pathname: pathname.into(),
            query,
        }
    }

    pub fn location(&self) -> String {
        if self.query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.query.to_query_string())
        }
    }
}
