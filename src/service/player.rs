use crate::models::player::NewPlayer;
use crate::AppState;
use actix_web::web::{Data, Json};
use actix_web::{HttpResponse, Responder};
use log::error;
use serde_json::json;
use validator::Validate;

pub async fn list_players_service(data: Data<AppState>) -> impl Responder {
    match data.db.list_players().await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(err) => {
            error!("Failed to fetch the player listing. The error: {:?}", err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Database error while fetching players." }))
        }
    }
}

pub async fn team_roster_service(data: Data<AppState>, team_id: i32) -> impl Responder {
    match data.db.team_roster(team_id).await {
        Ok(roster) => HttpResponse::Ok().json(roster),
        Err(err) => {
            error!(
                "Failed to fetch the roster for team {}. The error: {:?}",
                team_id, err
            );
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Database error while fetching players." }))
        }
    }
}

pub async fn player_detail_service(data: Data<AppState>, id: i32) -> impl Responder {
    match data.db.player_detail(id).await {
        Ok(Some(detail)) => HttpResponse::Ok().json(detail),
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": "Player not found" })),
        Err(err) => {
            error!("Failed to fetch player {}. The error: {:?}", id, err);
            HttpResponse::InternalServerError().json(json!({ "error": "Database error." }))
        }
    }
}

pub async fn create_player_service(
    data: Data<AppState>,
    new_player: Json<NewPlayer>,
) -> impl Responder {
    let new_player = new_player.into_inner();
    if new_player.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "Player name and team ID are required." }));
    }

    match data.db.create_player(new_player).await {
        Ok(player_id) => HttpResponse::Created()
            .json(json!({ "message": "Player added successfully!", "playerId": player_id })),
        Err(err) => {
            error!("Failed to insert a new player. The error: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to add player." }))
        }
    }
}
