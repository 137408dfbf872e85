// Turns warp rejections into JSON error bodies

use std::convert::Infallible;

use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{MethodNotAllowed, UnsupportedMediaType};
use warp::Rejection;

use super::reply::{error_reply, JsonReply};

pub async fn handle_rejection(err: Rejection) -> Result<JsonReply, Infallible> {
    if err.is_not_found() {
        return Ok(error_reply("Not Found", StatusCode::NOT_FOUND));
    }

    if let Some(e) = err.find::<BodyDeserializeError>() {
        log::debug!("Rejected request body: {}", e);
        return Ok(error_reply(
            format!("invalid request body: {}", e),
            StatusCode::UNPROCESSABLE_ENTITY,
        ));
    }

    if err.find::<UnsupportedMediaType>().is_some() {
        return Ok(error_reply(
            "Unsupported Media Type",
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ));
    }

    if err.find::<MethodNotAllowed>().is_some() {
        return Ok(error_reply(
            "Method Not Allowed",
            StatusCode::METHOD_NOT_ALLOWED,
        ));
    }

    log::error!("Unhandled rejection: {:?}", err);
    Ok(error_reply(
        "internal server error",
        StatusCode::INTERNAL_SERVER_ERROR,
    ))
}
