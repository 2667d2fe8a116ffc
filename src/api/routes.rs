//! HTTP route handlers for Axum.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::error;

use crate::{
    recommend::{HealthProfile, Recommendation, Recommender},
    sentiment::{AnalysisResult, SentimentEngine},
};

use super::{
    error::ApiError,
    types::{AnalyzeRequest, HealthDto},
};

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto::ok())
}

pub async fn analyze(
    State(engine): State<Arc<SentimentEngine>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<AnalysisResult> {
    let Json(request) = payload?;
    if request.reviews.is_empty() {
        return Err(crate::error::AnalysisError::EmptyBatch.into());
    }
    let result = tokio::task::spawn_blocking(move || engine.analyze(&request.reviews))
        .await
        .map_err(|e| {
            error!(error = %e, "analysis worker failed");
            ApiError::internal(e.to_string())
        })??;
    Ok(Json(result))
}

pub async fn recommend(
    State(recommender): State<Recommender>,
    payload: Result<Json<HealthProfile>, JsonRejection>,
) -> ApiResult<Recommendation> {
    let Json(profile) = payload?;
    let recommendation = recommender.recommend(&profile).await?;
    Ok(Json(recommendation))
}
