// GET /api/getlast handler

use std::convert::Infallible;

use warp::http::StatusCode;

use super::reply::{error_reply, json_reply, store_error_reply, JsonReply};
use crate::state::AppState;

pub async fn get_last_handler(state: AppState) -> Result<JsonReply, Infallible> {
    log::info!("GET /api/getlast (partition {})", state.partition());

    match state.store().get_most_recent().await {
        Ok(Some(message)) => Ok(json_reply(&message, StatusCode::OK)),
        Ok(None) => {
            log::debug!("No message in partition {}", state.partition());
            Ok(error_reply("no message found", StatusCode::NOT_FOUND))
        }
        Err(err) => Ok(store_error_reply(&err, state.unavailable_detail())),
    }
}
