//! Request handlers: one per route, each a thin marshalling layer over
//! the graph facade.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use amity_core::{FriendshipSummary, PathResult, Recommendation, SeedSummary, UserRecord};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_RECOMMENDATION_LIMIT: i64 = 5;

/// `GET /` and `GET /status`
pub async fn status() -> Json<Value> {
    Json(json!({
        "status": "API is running",
        "timestamp": Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let users = state.graph.list_users().await?;
    Ok(Json(users))
}

/// `GET /users/{name}`
///
/// A missing user serializes as JSON null with status 200.
pub async fn get_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Option<UserRecord>>, ApiError> {
    let user = state.graph.get_user(&name).await?;
    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub age: Option<i64>,
}

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserRecord>, ApiError> {
    let user = state
        .graph
        .create_user(&req.name, &req.email, req.age)
        .await?;
    Ok(Json(user))
}

/// `GET /friends/{name}`
pub async fn list_friends(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let friends = state.graph.friends_of(&name).await?;
    Ok(Json(friends))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub limit: Option<i64>,
}

/// `GET /recommendations/{name}?limit=N`
pub async fn recommendations(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    if limit < 1 {
        return Err(ApiError::BadRequest("limit must be positive".to_string()));
    }
    let recs = state.graph.recommend_friends(&name, limit).await?;
    Ok(Json(recs))
}

/// `GET /path/{user1}/{user2}`
///
/// An absent path serializes as JSON null with status 200.
pub async fn shortest_path(
    State(state): State<AppState>,
    Path((user1, user2)): Path<(String, String)>,
) -> Result<Json<Option<PathResult>>, ApiError> {
    let path = state.graph.shortest_path(&user1, &user2).await?;
    Ok(Json(path))
}

#[derive(Debug, Deserialize)]
pub struct CreateFriendshipRequest {
    pub user1: String,
    pub user2: String,
}

/// `POST /friendship`
pub async fn create_friendship(
    State(state): State<AppState>,
    Json(req): Json<CreateFriendshipRequest>,
) -> Result<Json<FriendshipSummary>, ApiError> {
    let summary = state
        .graph
        .create_friendship(&req.user1, &req.user2)
        .await?;
    Ok(Json(summary))
}

/// `DELETE /friendship/{user1}/{user2}`
pub async fn delete_friendship(
    State(state): State<AppState>,
    Path((user1, user2)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    state.graph.delete_friendship(&user1, &user2).await?;
    Ok(Json(json!({ "message": "Friendship deleted successfully" })))
}

/// `POST /seed`
pub async fn seed(State(state): State<AppState>) -> Result<Json<SeedSummary>, ApiError> {
    let summary = state.graph.seed_sample_data().await?;
    Ok(Json(summary))
}

/// `DELETE /clear`
pub async fn clear(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.graph.clear().await?;
    Ok(Json(json!({ "message": "Database cleared successfully" })))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
