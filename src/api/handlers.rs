// CRUD handlers module
// One handler per routed operation over the user collection

use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use uuid::Uuid;

use crate::config::AppState;
use crate::logger;
use crate::model::User;

use super::payload;
use super::response::{json_response, message_response, no_content};

/// GET /api/users
pub fn list_users(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let users = state.store.load();
    json_response(StatusCode::OK, &users)
}

/// GET /api/users/{id}
pub fn get_user(state: &Arc<AppState>, user_id: &str) -> Response<Full<Bytes>> {
    let Ok(id) = Uuid::parse_str(user_id) else {
        return message_response(StatusCode::BAD_REQUEST, "Invalid user ID format");
    };

    let users = state.store.load();
    match users.into_iter().find(|user| user.id == id) {
        Some(user) => json_response(StatusCode::OK, &user),
        None => message_response(StatusCode::NOT_FOUND, "User not found"),
    }
}

/// POST /api/users
///
/// The response is returned before the rewritten collection is persisted; the
/// write completes in a background task.
pub async fn create_user<B>(req: Request<B>, state: &Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body = match read_json_body(req).await {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    let Some(new_user) = payload::parse_new_user(&body) else {
        return message_response(StatusCode::BAD_REQUEST, "Missing required fields");
    };

    let mut users = state.store.load();
    let user = User {
        id: Uuid::new_v4(),
        username: new_user.username,
        age: new_user.age,
        hobbies: new_user.hobbies,
    };
    users.push(user.clone());

    let response = json_response(StatusCode::CREATED, &user);
    let store = Arc::clone(&state.store);
    tokio::spawn(async move { store.save(&users) });
    response
}

/// PUT /api/users/{id}
///
/// Existence is checked before the body is read, so an unknown id wins over a
/// malformed body. Persistence is fire-and-forget like create.
pub async fn update_user<B>(
    req: Request<B>,
    state: &Arc<AppState>,
    user_id: &str,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let Ok(id) = Uuid::parse_str(user_id) else {
        return message_response(StatusCode::BAD_REQUEST, "Invalid user ID format");
    };

    let mut users = state.store.load();
    let Some(index) = users.iter().position(|user| user.id == id) else {
        return message_response(StatusCode::NOT_FOUND, "User not found");
    };

    let body = match read_json_body(req).await {
        Ok(body) => body,
        Err(resp) => return resp,
    };

    payload::merge_user(&mut users[index], &body);

    let response = json_response(StatusCode::OK, &users[index]);
    let store = Arc::clone(&state.store);
    tokio::spawn(async move { store.save(&users) });
    response
}

/// DELETE /api/users/{id}
///
/// Unlike create and update, the rewrite completes before the 204 goes out.
pub fn delete_user(state: &Arc<AppState>, user_id: &str) -> Response<Full<Bytes>> {
    let Ok(id) = Uuid::parse_str(user_id) else {
        return message_response(StatusCode::BAD_REQUEST, "Invalid user ID format");
    };

    let mut users = state.store.load();
    let Some(index) = users.iter().position(|user| user.id == id) else {
        return message_response(StatusCode::NOT_FOUND, "User not found");
    };

    users.remove(index);
    state.store.save(&users);
    no_content()
}

/// Collect the request body and parse it as JSON.
///
/// Both a failed read and a parse failure map to the same 500; once the body
/// stream has been consumed there is no separate error path.
async fn read_json_body<B>(req: Request<B>) -> Result<serde_json::Value, Response<Full<Bytes>>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let bytes = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read request body: {e}"));
            return Err(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error parsing request body",
            ));
        }
    };

    serde_json::from_slice(&bytes).map_err(|_| {
        message_response(StatusCode::INTERNAL_SERVER_ERROR, "Error parsing request body")
    })
}
