use axum::extract::{
    rejection::{JsonRejection, QueryRejection},
    Json, Query, State,
};

use crate::api::types::*;
use crate::api::{ApiError, AppState};
use crate::core::ModerationReport;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hive AI Service".to_string(),
        status: "running".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: None,
    })
}

pub async fn ai_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: Some("AI Service".to_string()),
    })
}

pub async fn recommend_users(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<UserRecommendationsResponse>, ApiError> {
    let Json(req) = payload?;
    tracing::debug!(
        "Recommend users for {} ({}) among {} users",
        req.user.id,
        req.recommendation_type,
        req.all_users.len()
    );

    let recommendations = state.engine.recommend_users(&req.user, &req.all_users)?;

    tracing::info!(
        "✅ user {} → {} recommendations",
        req.user.id,
        recommendations.len()
    );

    Ok(Json(UserRecommendationsResponse { recommendations }))
}

pub async fn moderate_content(
    State(state): State<AppState>,
    payload: Result<Json<ModerationRequest>, JsonRejection>,
) -> Result<Json<ModerationReport>, ApiError> {
    let Json(req) = payload?;
    let report = state.engine.moderate(&req.text);

    if !report.is_safe {
        tracing::info!("🚩 Content flagged for review: {:?}", report.flags);
    }

    Ok(Json(report))
}

pub async fn smart_search(
    State(state): State<AppState>,
    payload: Result<Json<SmartSearchRequest>, JsonRejection>,
) -> Result<Json<SmartSearchResponse>, ApiError> {
    let Json(req) = payload?;
    tracing::debug!("Smart search '{}' over {} items", req.query, req.content.len());

    let results = state.engine.smart_search(&req.query, req.content)?;

    tracing::info!("✅ '{}' → {} results", req.query, results.len());

    Ok(Json(SmartSearchResponse { results }))
}

pub async fn match_skills(
    State(state): State<AppState>,
    params: Result<Query<SkillMatchParams>, QueryRejection>,
    payload: Result<Json<SkillMatchBody>, JsonRejection>,
) -> Result<Json<SkillMatchResponse>, ApiError> {
    let Query(params) = params?;
    let Json(body) = payload?;
    let (skill_offered, skills_wanted) = body.resolve(params);
    let skill_offered = skill_offered
        .ok_or_else(|| ApiError::Unprocessable("field required: skill_offered".to_string()))?;

    tracing::debug!(
        "Match '{}' against {} wanted skills",
        skill_offered,
        skills_wanted.len()
    );

    let matches = state.engine.match_skills(&skill_offered, skills_wanted)?;

    Ok(Json(SkillMatchResponse { matches }))
}

pub async fn recommend_events(
    State(state): State<AppState>,
    payload: Result<Json<EventRecommendationRequest>, JsonRejection>,
) -> Result<Json<EventRecommendationsResponse>, ApiError> {
    let Json(req) = payload?;
    tracing::debug!(
        "Recommend events for {} interests among {} events",
        req.user_interests.len(),
        req.available_events.len()
    );

    let recommendations = state
        .engine
        .recommend_events(&req.user_interests, req.available_events)?;

    Ok(Json(EventRecommendationsResponse { recommendations }))
}
