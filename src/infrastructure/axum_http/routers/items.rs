use std::sync::Arc;

use axum::{Json, Router, http::Uri, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::{
    application::usecases::list_renderer::ListRendererUseCase,
    domain::value_objects::{enums::sort_directions::SortDirection, items::Item},
    infrastructure::navigation::url_navigator::UrlNavigator,
};

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub sort_order: SortDirection,
    pub items: Vec<Item>,
}

pub fn routes() -> Router {
    Router::new().route("/", get(list_items))
}

pub async fn list_items(uri: Uri) -> impl IntoResponse {
    let navigator = Arc::new(UrlNavigator::from_uri(&uri));
    let list_renderer = ListRendererUseCase::new(navigator);
    let sort_order = list_renderer.sort_direction();

    Json(ItemsResponse {
        sort_order,
        items: list_renderer.sorted_items(sort_order),
    })
}
