// API module entry
// Routes incoming requests to the CRUD handlers

mod handlers;
mod payload;
mod response;

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::logger;

/// Routing decision for a single request.
#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    ListUsers,
    CreateUser,
    GetUser(&'a str),
    UpdateUser(&'a str),
    DeleteUser(&'a str),
    NotFound,
}

/// Match a method and path to a route.
///
/// The path is split on `/` and empty segments are dropped, so leading,
/// trailing, and repeated slashes are tolerated. Segment count and the
/// literal `api`/`users` segments must match exactly.
fn resolve<'a>(method: &Method, path: &'a str) -> Route<'a> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["api", "users"] => match *method {
            Method::GET => Route::ListUsers,
            Method::POST => Route::CreateUser,
            _ => Route::NotFound,
        },
        ["api", "users", id] => match *method {
            Method::GET => Route::GetUser(id),
            Method::PUT => Route::UpdateUser(id),
            Method::DELETE => Route::DeleteUser(id),
            _ => Route::NotFound,
        },
        _ => Route::NotFound,
    }
}

/// Main entry point for HTTP request handling.
///
/// Generic over the body type so tests can drive it with in-memory bodies.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match resolve(&method, &path) {
        Route::ListUsers => handlers::list_users(&state),
        Route::CreateUser => handlers::create_user(req, &state).await,
        Route::GetUser(id) => handlers::get_user(&state, id),
        Route::UpdateUser(id) => handlers::update_user(req, &state, id).await,
        Route::DeleteUser(id) => handlers::delete_user(&state, id),
        Route::NotFound => response::not_found(),
    };

    if state.config.logging.access_log {
        logger::log_request(&method, &path, response.status());
    }

    Ok(response)
}
