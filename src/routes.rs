// Route definitions and handlers

use std::convert::Infallible;

use warp::Filter;

use crate::handlers;
use crate::state::AppState;

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let api = warp::path("api");

    // POST /api/publish
    let publish = api
        .and(warp::path("publish"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(warp::body::json())
        .and_then(handlers::publish_handler);

    // GET /api/getlast
    let get_last = api
        .and(warp::path("getlast"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::get_last_handler);

    // GET /api/getbytime (window bounds travel in a JSON body)
    let get_by_time = api
        .and(warp::path("getbytime"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state))
        .and(warp::body::json())
        .and_then(handlers::get_by_time_handler);

    // Combine routes
    publish
        .or(get_last)
        .or(get_by_time)
        .recover(handlers::handle_rejection)
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
