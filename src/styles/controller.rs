use axum::{extract::State, Json};

use crate::{styles::models::style::Style, AppState};

pub async fn get_styles(State(state): State<AppState>) -> Json<Vec<Style>> {
    Json(state.styles.all().to_vec())
}
