use crate::models::team::NewTeam;
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use log::error;
use serde_json::json;
use validator::Validate;

pub async fn list_teams_service(data: Data<AppState>) -> impl Responder {
    match data.db.list_teams().await {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(err) => {
            error!("Failed to fetch the team listing. The error: {:?}", err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Database error while fetching teams." }))
        }
    }
}

pub async fn team_detail_service(data: Data<AppState>, id: i32) -> impl Responder {
    match data.db.team_detail(id).await {
        Ok(Some(detail)) => HttpResponse::Ok().json(detail),
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": "Team not found" })),
        Err(err) => {
            error!("Failed to fetch team {}. The error: {:?}", id, err);
            HttpResponse::InternalServerError().json(json!({ "error": "Database error." }))
        }
    }
}

pub async fn create_team_service(data: Data<AppState>, new_team: Json<NewTeam>) -> impl Responder {
    let new_team = new_team.into_inner();
    if new_team.validate().is_err() {
        return HttpResponse::BadRequest().json(json!({ "error": "Team name is required." }));
    }

    match data.db.create_team(new_team).await {
        Ok(team_id) => HttpResponse::Created()
            .json(json!({ "message": "Team added successfully!", "teamId": team_id })),
        Err(err) => {
            error!("Failed to insert a new team. The error: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to add team." }))
        }
    }
}
