use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::ActivityStore;
use crate::models::Directory;
use crate::services::enrollment_service;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// The email as sent. Only absence or a blank value is rejected; the format is not checked.
    fn into_email(self) -> Result<String, ApiError> {
        self.email
            .filter(|e| !e.trim().is_empty())
            .ok_or(ApiError::MissingEmail)
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<Directory> {
    Json(enrollment_service::list_activities(&store).await)
}

pub async fn signup_handler(
    State(store): State<ActivityStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = query.into_email()?;
    let message = enrollment_service::signup(&store, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    State(store): State<ActivityStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = query.into_email()?;
    let message = enrollment_service::unregister(&store, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}
