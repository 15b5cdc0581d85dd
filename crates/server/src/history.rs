//! History API endpoint

use api_types::history::Expense;
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

fn map_entry(entry: engine::Entry) -> Expense {
    let expense_date = match entry.day() {
        Ok(day) => day.format(engine::ISO_DATE_FORMAT).to_string(),
        Err(_) => entry.date,
    };
    Expense {
        expense_date,
        expense_category: entry.category,
        expense_amount: entry.amount,
    }
}

pub async fn display(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Expense>>, ServerError> {
    let entries = state.engine.history(&user_id).await?;

    Ok(Json(entries.into_iter().map(map_entry).collect()))
}
