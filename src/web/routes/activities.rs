use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::Activity;
use crate::services::activities_service;
use crate::store::ActivityStore;
use crate::web::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(
    State(store): State<Arc<ActivityStore>>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<Arc<ActivityStore>>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = activities_service::sign_up(&store, &name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<Arc<ActivityStore>>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = activities_service::unregister(&store, &name, &query.email)?;
    Ok(Json(MessageResponse { message }))
}
