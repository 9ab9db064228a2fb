use std::sync::Arc;

use tracing::info;

use crate::{
    application::usecases::{
        list_renderer::ListRendererUseCase, sort_control::SortControlUseCase,
    },
    domain::{repositories::navigator::Navigator, value_objects::page_view::PageView},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    #[default]
    NotReady,
    Ready,
}

/// Holds the page blank until the navigator has resolved its query, then
/// renders the sort control followed by the list.
pub struct PageShellUseCase<N>
where
    N: Navigator + Send + Sync,
{
    navigator: Arc<N>,
    sort_control: SortControlUseCase<N>,
    list_renderer: ListRendererUseCase<N>,
    state: PageState,
}

impl<N> PageShellUseCase<N>
where
    N: Navigator + Send + Sync,
{
    pub fn new(navigator: Arc<N>, pathname: impl Into<String>) -> Self {
        Self {
            sort_control: SortControlUseCase::new(Arc::clone(&navigator), pathname),
            list_renderer: ListRendererUseCase::new(Arc::clone(&navigator)),
            navigator,
            state: PageState::NotReady,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Moves to `Ready` if the navigator reports readiness. Never moves back.
    pub fn observe(&mut self) -> PageState {
        if self.state == PageState::NotReady && self.navigator.is_ready() {
            self.mark_ready();
        }
        self.state
    }

    /// Waits for the navigator to resolve its query.
    pub async fn resolve(&mut self) -> PageState {
        if self.state == PageState::NotReady {
            self.navigator.wait_until_ready().await;
            self.mark_ready();
        }
        self.state
    }

    pub fn render(&self) -> Option<PageView> {
        match self.state {
            PageState::NotReady => None,
            PageState::Ready => Some(PageView {
                controls: self.sort_control.options(),
                entries: self.list_renderer.entries().collect(),
            }),
        }
    }

    fn mark_ready(&mut self) {
        self.state = PageState::Ready;
        info!("Query resolved; page ready");
    }
}
