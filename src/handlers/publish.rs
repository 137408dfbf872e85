// POST /api/publish handler

use std::convert::Infallible;

use warp::http::StatusCode;

use super::reply::{json_reply, store_error_reply, JsonReply};
use crate::models::{PublishRequest, PublishResponse};
use crate::state::AppState;

pub async fn publish_handler(
    state: AppState,
    request: PublishRequest,
) -> Result<JsonReply, Infallible> {
    log::info!(
        "POST /api/publish ({} bytes, partition {})",
        request.content.len(),
        state.partition()
    );

    match state.store().publish(&request.content).await {
        Ok(()) => Ok(json_reply(&PublishResponse::created(), StatusCode::CREATED)),
        Err(err) => Ok(store_error_reply(&err, state.unavailable_detail())),
    }
}
