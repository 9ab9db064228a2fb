use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::Uri,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;

use crate::{
    application::usecases::{page_shell::PageShellUseCase, sort_control::SortControlUseCase},
    domain::value_objects::enums::sort_directions::SortDirection,
    infrastructure::{
        axum_http::{
            error_responses::AppError,
            html::{SORT_ACTION, render_page},
        },
        navigation::url_navigator::UrlNavigator,
    },
};

#[derive(Debug, Clone)]
pub struct PageRoute {
    pub pathname: String,
}

#[derive(Debug, Deserialize)]
pub struct SortForm {
    #[serde(rename = "sortOrder")]
    pub sort_order: String,
}

pub fn routes(pathname: String) -> Router {
    Router::new()
        .route(&pathname, get(show_page))
        .route(SORT_ACTION, post(select_sort_order))
        .with_state(Arc::new(PageRoute { pathname }))
}

/// Renders the page for the request URI. A blank body is what the shell
/// yields while its navigator is unresolved; a URI-backed navigator is
/// always resolved, so over HTTP the page is always drawn.
pub async fn show_page(
    State(page): State<Arc<PageRoute>>,
    uri: Uri,
) -> Result<Html<String>, AppError> {
    let navigator = Arc::new(UrlNavigator::from_uri(&uri));
    let mut page_shell = PageShellUseCase::new(navigator, page.pathname.clone());
    page_shell.resolve().await;

    let Some(view) = page_shell.render() else {
        return Ok(Html(String::new()));
    };

    let html = render_page(&view).map_err(anyhow::Error::from)?;
    info!(sort_direction = ?view.checked(), "Page rendered");
    Ok(Html(html))
}

pub async fn select_sort_order(
    State(page): State<Arc<PageRoute>>,
    form: Result<Form<SortForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let direction = SortDirection::from_marker(&form.sort_order);

    let navigator = Arc::new(UrlNavigator::pending());
    let sort_control = SortControlUseCase::new(navigator, page.pathname.clone());
    let request = sort_control.select(direction).await?;

    Ok(Redirect::to(&request.location()))
}
