use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::{navigation::NavigationRequest, query_state::QueryState};

/// Capability over the page URL: read the query, learn when it has resolved,
/// and ask for a navigation that replaces it.
#[automock]
#[async_trait]
pub trait Navigator {
    fn query(&self) -> QueryState;
    fn is_ready(&self) -> bool;
    async fn wait_until_ready(&self);
    async fn push(&self, request: NavigationRequest) -> Result<()>;
}
