use axum::{body::to_bytes, extract::State, response::IntoResponse};
use serde::de::DeserializeOwned;

use crate::server::{config::LinkConfig, state::AppState};

mod channel;

fn test_state() -> AppState {
    AppState::new(LinkConfig::default(), false)
}

/// Runs a handler result through `IntoResponse` and decodes its JSON body.
async fn json_body<T: DeserializeOwned>(response: impl IntoResponse) -> (u16, T) {
    let response = response.into_response();
    let status = response.status().as_u16();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

fn state(state: &AppState) -> State<AppState> {
    State(state.clone())
}
