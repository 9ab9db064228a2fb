use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::domain::{
    repositories::navigator::Navigator,
    value_objects::{
        enums::sort_directions::{SORT_ORDER_KEY, SortDirection},
        navigation::NavigationRequest,
        page_view::RadioOption,
    },
};

pub struct SortControlUseCase<N>
where
    N: Navigator + Send + Sync,
{
    navigator: Arc<N>,
    pathname: String,
}

impl<N> SortControlUseCase<N>
where
    N: Navigator + Send + Sync,
{
    pub fn new(navigator: Arc<N>, pathname: impl Into<String>) -> Self {
        Self {
            navigator,
            pathname: pathname.into(),
        }
    }

    pub fn options(&self) -> [RadioOption; 2] {
        let current = SortDirection::from_query(&self.navigator.query());
        SortDirection::ALL.map(|direction| RadioOption {
            name: SORT_ORDER_KEY,
            direction,
            label: direction.label(),
            checked: direction == current,
        })
    }

    /// Replaces the whole query string with the chosen direction.
    pub async fn select(&self, direction: SortDirection) -> Result<NavigationRequest> {
        let request = NavigationRequest::new(self.pathname.clone(), direction.to_query());
        self.navigator.push(request.clone()).await?;

        info!(
            sort_direction = %direction,
            location = %request.location(),
            "Sort order changed"
        );
        Ok(request)
    }
}
