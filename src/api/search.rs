use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Response},
};

use crate::{error::AppError, query, server::AppState, views::SearchView};

/// `GET /search/{name}`: artists matching `name`, which is used verbatim.
pub async fn search(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    state.respond(render_search(&state, &name).await)
}

async fn render_search(state: &AppState, name: &str) -> Result<Html<String>, AppError> {
    let result = query::search(state.catalog.as_ref(), name).await?;
    let html = SearchView::from(result).render()?;
    Ok(Html(html))
}
