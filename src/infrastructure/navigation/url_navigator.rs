use anyhow::{Result, bail};
use async_trait::async_trait;
use axum::http::Uri;
use tokio::sync::watch;
use tracing::debug;

use crate::domain::{
    repositories::navigator::Navigator,
    value_objects::{navigation::NavigationRequest, query_state::QueryState},
};

#[derive(Debug, Clone, Default)]
struct Location {
    query: QueryState,
    ready: bool,
}

/// Navigator over a single page URL. The query is held in a watch channel so
/// readers waiting on readiness wake when it resolves.
pub struct UrlNavigator {
    location: watch::Sender<Location>,
}

impl UrlNavigator {
    /// A navigator whose query is not known yet.
    pub fn pending() -> Self {
        let (location, _) = watch::channel(Location::default());
        Self { location }
    }

    /// A navigator for a request URI. The query is resolved immediately.
    pub fn from_uri(uri: &Uri) -> Self {
        let navigator = Self::pending();
        navigator.resolve(QueryState::parse(uri.query().unwrap_or_default()));
        navigator
    }

    pub fn resolve(&self, query: QueryState) {
        self.location.send_modify(|location| {
            location.query = query;
            location.ready = true;
        });
        debug!("Navigator query resolved");
    }
}

#[async_trait]
impl Navigator for UrlNavigator {
    fn query(&self) -> QueryState {
        self.location.borrow().query.clone()
    }

    fn is_ready(&self) -> bool {
        self.location.borrow().ready
    }

    async fn wait_until_ready(&self) {
        let mut receiver = self.location.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = receiver.wait_for(|location| location.ready).await;
    }

    async fn push(&self, request: NavigationRequest) -> Result<()> {
        if !request.pathname.starts_with('/') {
            bail!("Navigation path must be absolute: {}", request.pathname);
        }

        self.location.send_modify(|location| {
            location.query = request.query.clone();
            location.ready = true;
        });
        debug!(location = %request.location(), "Navigation pushed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::sort_directions::SortDirection;
    use std::{sync::Arc, time::Duration};

    #[test]
    fn from_uri_is_ready_with_parsed_query() {
        let uri: Uri = "/?sortOrder=desc".parse().unwrap();
        let navigator = UrlNavigator::from_uri(&uri);

        assert!(navigator.is_ready());
        assert_eq!(navigator.query().get("sortOrder"), Some("desc"));
    }

    #[test]
    fn pending_is_not_ready_and_empty() {
        let navigator = UrlNavigator::pending();

        assert!(!navigator.is_ready());
        assert!(navigator.query().is_empty());
    }

    #[tokio::test]
    async fn wait_until_ready_wakes_on_resolve() {
        let navigator = Arc::new(UrlNavigator::pending());
        let waiter = {
            let navigator = Arc::clone(&navigator);
            tokio::spawn(async move { navigator.wait_until_ready().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());

        navigator.resolve(QueryState::parse("sortOrder=desc"));
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .unwrap();
        assert!(navigator.is_ready());
    }

    #[tokio::test]
    async fn push_replaces_whole_query() {
        let uri: Uri = "/?sortOrder=asc&page=3".parse().unwrap();
        let navigator = UrlNavigator::from_uri(&uri);

        let request = NavigationRequest::new("/", SortDirection::Descending.to_query());
        navigator.push(request).await.unwrap();

        assert_eq!(navigator.query(), SortDirection::Descending.to_query());
        assert_eq!(navigator.query().get("page"), None);
    }

    #[tokio::test]
    async fn push_marks_pending_navigator_ready() {
        let navigator = UrlNavigator::pending();

        navigator
            .push(NavigationRequest::new("/", SortDirection::Ascending.to_query()))
            .await
            .unwrap();

        assert!(navigator.is_ready());
        assert_eq!(
            SortDirection::from_query(&navigator.query()),
            SortDirection::Ascending
        );
    }

    #[tokio::test]
    async fn push_rejects_relative_path() {
        let navigator = UrlNavigator::pending();
        let request = NavigationRequest::new("fruits", SortDirection::Descending.to_query());

        assert!(navigator.push(request).await.is_err());
        assert!(navigator.query().is_empty());
        assert!(!navigator.is_ready());
    }
}
