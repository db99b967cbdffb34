use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Response},
};

use crate::{error::AppError, query, server::AppState, views::ArtistView};

/// `GET /artist/{id}`: profile, top tracks and related artists.
///
/// The page is only rendered once all three catalog lookups succeed.
pub async fn artist(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    state.respond(render_artist(&state, &id).await)
}

async fn render_artist(state: &AppState, id: &str) -> Result<Html<String>, AppError> {
    let details = query::artist(
        state.catalog.as_ref(),
        id,
        &state.placeholder_image_url,
    )
    .await?;
    let html = ArtistView::from(details).render()?;
    Ok(Html(html))
}
