// GET /api/getbytime handler

use std::convert::Infallible;

use warp::http::StatusCode;

use super::reply::{error_reply, json_reply, store_error_reply, JsonReply};
use crate::models::{MessagesList, TimeRangeRequest};
use crate::state::AppState;

pub async fn get_by_time_handler(
    state: AppState,
    request: TimeRangeRequest,
) -> Result<JsonReply, Infallible> {
    log::info!(
        "GET /api/getbytime [{}, {}] (partition {})",
        request.start,
        request.end,
        state.partition()
    );

    match state
        .store()
        .get_by_time_range(&request.start, &request.end)
        .await
    {
        Ok(messages) if messages.is_empty() => {
            log::debug!("No messages between {} and {}", request.start, request.end);
            Ok(error_reply("no messages found", StatusCode::NOT_FOUND))
        }
        Ok(messages) => Ok(json_reply(&MessagesList { messages }, StatusCode::OK)),
        Err(err) => Ok(store_error_reply(&err, state.unavailable_detail())),
    }
}
