use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{edit, history};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        tracing::error!("{method} {path} -> {status}");
    } else if status.is_client_error() {
        tracing::warn!("{method} {path} -> {status}");
    } else {
        tracing::info!("{method} {path} -> {status}");
    }
    response
}

pub fn router(engine: Arc<Engine>) -> Router {
    let state = ServerState { engine };

    Router::new()
        .route("/edit_cost", post(edit::cost))
        .route("/edit_category", post(edit::category))
        .route("/edit_date", post(edit::date))
        .route("/display/{user_id}", get(history::display))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine))).await
}
