//! Entry edit endpoints

use api_types::{
    Message,
    edit::{EditCategory, EditCost, EditDate},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{ServerError, server::ServerState};

pub async fn cost(
    State(state): State<ServerState>,
    payload: Result<Json<EditCost>, JsonRejection>,
) -> Result<Json<Message>, ServerError> {
    let Json(payload) = payload?;
    state
        .engine
        .edit_cost(&payload.user_id, &payload.selected_data, &payload.new_cost)
        .await?;

    Ok(Json(Message::new("Cost updated successfully")))
}

pub async fn category(
    State(state): State<ServerState>,
    payload: Result<Json<EditCategory>, JsonRejection>,
) -> Result<Json<Message>, ServerError> {
    let Json(payload) = payload?;
    state
        .engine
        .edit_category(
            &payload.user_id,
            &payload.selected_data,
            &payload.new_category,
        )
        .await?;

    Ok(Json(Message::new("Category updated successfully")))
}

pub async fn date(
    State(state): State<ServerState>,
    payload: Result<Json<EditDate>, JsonRejection>,
) -> Result<Json<Message>, ServerError> {
    let Json(payload) = payload?;
    state
        .engine
        .edit_date(&payload.user_id, &payload.selected_data, &payload.new_date)
        .await?;

    Ok(Json(Message::new("Date updated successfully")))
}
