use axum::extract::State;
use axum::response::Html;

use crate::error::CafeError;
use crate::router::CafeState;
use crate::views;

pub async fn home() -> Html<String> {
    Html(views::home_page())
}

/// All entries in insertion order.
pub async fn list_cafes(State(state): State<CafeState>) -> Result<Html<String>, CafeError> {
    let cafes = state.storage.list_all().await?;
    Ok(Html(views::list_page(&cafes)))
}
