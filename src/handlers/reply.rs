// JSON replies shared by every handler

use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

use crate::message_store::StoreError;
use crate::models::ErrorResponse;

pub type JsonReply = WithStatus<Json>;

/// Default 500 detail for an unreachable store; `AppState::with_unavailable_detail` overrides it
pub const DETAIL_STORE_UNAVAILABLE: &str = "could not connect to redis";
pub const DETAIL_STORE_FAILURE: &str = "message store error";
pub const DETAIL_MALFORMED_RANGE: &str = "malformed time range";

pub fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> JsonReply {
    warp::reply::with_status(warp::reply::json(body), status)
}

pub fn error_reply(detail: impl Into<String>, status: StatusCode) -> JsonReply {
    json_reply(&ErrorResponse::new(detail), status)
}

/// Map a store failure onto its HTTP status and `detail` text
pub fn store_error_reply(err: &StoreError, unavailable_detail: &str) -> JsonReply {
    match err {
        StoreError::Unavailable(reason) => {
            log::error!("Message store unavailable: {}", reason);
            error_reply(unavailable_detail, StatusCode::INTERNAL_SERVER_ERROR)
        }
        StoreError::MalformedTimeRange { start, end } => {
            log::debug!("Rejecting malformed time range: start={:?} end={:?}", start, end);
            error_reply(DETAIL_MALFORMED_RANGE, StatusCode::BAD_REQUEST)
        }
        StoreError::Database(_) | StoreError::Configuration(_) => {
            log::error!("Message store failure: {}", err);
            error_reply(DETAIL_STORE_FAILURE, StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
