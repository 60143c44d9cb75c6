use axum::{
    Router,
    response::Html,
    routing::{get, put},
};

use std::sync::Arc;

use crate::{expenses, summary};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/api/expenses/{id}",
            put(expenses::update).delete(expenses::remove),
        )
        .route("/api/summary", get(summary::get_summary))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
