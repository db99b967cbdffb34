use askama::Template;
use axum::{
    extract::State,
    response::{Html, Response},
};

use crate::{error::AppError, server::AppState, views::HomepageView};

pub async fn homepage(State(state): State<AppState>) -> Response {
    let page = HomepageView::default()
        .render()
        .map(Html)
        .map_err(AppError::from);

    state.respond(page)
}
