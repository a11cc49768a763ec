use crate::models::matches::MatchSubmission;
use crate::repository::database::StoreError;
use crate::util::score;
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use log::error;
use serde_json::json;
use validator::Validate;

pub async fn recent_matches_service(data: Data<AppState>) -> impl Responder {
    match data.db.recent_matches().await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(err) => {
            error!("Failed to fetch recent matches. The error: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Database error." }))
        }
    }
}

pub async fn next_match_number_service(data: Data<AppState>) -> impl Responder {
    match data.db.next_match_number().await {
        Ok(next) => HttpResponse::Ok().json(json!({ "nextMatchNo": next })),
        Err(err) => {
            error!("Failed to compute the next match number. The error: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Database error." }))
        }
    }
}

/// POST /api/matches. Cheap payload checks happen here, before a connection
/// is taken from the pool; everything stateful runs inside
/// `Database::record_match`.
pub async fn record_match_service(
    data: Data<AppState>,
    submission: Json<MatchSubmission>,
) -> impl Responder {
    let submission = submission.into_inner();

    if submission.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "Match number and team IDs are required." }));
    }
    if submission.team1_id == submission.team2_id {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "A match must involve two different teams." }));
    }
    for declared in [&submission.team1_score, &submission.team2_score] {
        if score::declared_total(declared).is_none() {
            return HttpResponse::BadRequest()
                .json(json!({ "error": format!("\"{declared}\" is not a valid score.") }));
        }
    }

    match data.db.record_match(submission).await {
        Ok(match_id) => HttpResponse::Created()
            .json(json!({ "message": "Match recorded successfully!", "matchId": match_id })),
        Err(err @ StoreError::ScoreMismatch { .. }) => {
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
        Err(err @ StoreError::ForeignPlayer { .. }) => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        Err(err) if err.is_unique_violation() => HttpResponse::Conflict()
            .json(json!({ "error": "That match number has already been recorded." })),
        Err(err) => {
            error!("Failed to record a match. The error: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to record match." }))
        }
    }
}
