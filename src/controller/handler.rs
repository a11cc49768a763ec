use crate::models::matches::MatchSubmission;
use crate::models::player::NewPlayer;
use crate::models::team::NewTeam;
use crate::service::matches::{
    next_match_number_service, recent_matches_service, record_match_service,
};
use crate::service::player::{
    create_player_service, list_players_service, player_detail_service, team_roster_service,
};
use crate::service::stats::{points_table_service, top_batters_service, top_bowlers_service};
use crate::service::team::{create_team_service, list_teams_service, team_detail_service};
use crate::util::static_files::resolve_page;
use crate::AppState;
use actix_files::NamedFile;
use actix_web::web::{Data, Json, Path};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

#[get("/teams")]
async fn list_teams_handler(data: Data<AppState>) -> impl Responder {
    list_teams_service(data).await
}

#[get("/teams/{id}")]
async fn team_detail_handler(data: Data<AppState>, path: Path<i32>) -> impl Responder {
    team_detail_service(data, path.into_inner()).await
}

#[get("/teams/{team_id}/players")]
async fn team_roster_handler(data: Data<AppState>, path: Path<i32>) -> impl Responder {
    team_roster_service(data, path.into_inner()).await
}

#[get("/players")]
async fn list_players_handler(data: Data<AppState>) -> impl Responder {
    list_players_service(data).await
}

#[get("/players/{id}")]
async fn player_detail_handler(data: Data<AppState>, path: Path<i32>) -> impl Responder {
    player_detail_service(data, path.into_inner()).await
}

#[get("/top-batters")]
async fn top_batters_handler(data: Data<AppState>) -> impl Responder {
    top_batters_service(data).await
}

#[get("/top-bowlers")]
async fn top_bowlers_handler(data: Data<AppState>) -> impl Responder {
    top_bowlers_service(data).await
}

#[get("/points-table")]
async fn points_table_handler(data: Data<AppState>) -> impl Responder {
    points_table_service(data).await
}

#[get("/matches/recent")]
async fn recent_matches_handler(data: Data<AppState>) -> impl Responder {
    recent_matches_service(data).await
}

#[get("/next-match-number")]
async fn next_match_number_handler(data: Data<AppState>) -> impl Responder {
    next_match_number_service(data).await
}

#[post("/teams")]
async fn create_team_handler(data: Data<AppState>, new_team: Json<NewTeam>) -> impl Responder {
    create_team_service(data, new_team).await
}

#[post("/players")]
async fn create_player_handler(
    data: Data<AppState>,
    new_player: Json<NewPlayer>,
) -> impl Responder {
    create_player_service(data, new_player).await
}

#[post("/matches")]
async fn record_match_handler(
    data: Data<AppState>,
    submission: Json<MatchSubmission>,
) -> impl Responder {
    record_match_service(data, submission).await
}

pub fn config(conf: &mut web::ServiceConfig) {
    let scope = web::scope("/api")
        .service(list_teams_handler)
        .service(team_roster_handler)
        .service(team_detail_handler)
        .service(list_players_handler)
        .service(player_detail_handler)
        .service(top_batters_handler)
        .service(top_bowlers_handler)
        .service(points_table_handler)
        .service(recent_matches_handler)
        .service(next_match_number_handler)
        .service(create_team_handler)
        .service(create_player_handler)
        .service(record_match_handler);

    conf.service(scope);
}

/// Incomplete or malformed JSON bodies come back as a 400 with the same
/// `{"error": ...}` shape the API uses everywhere else.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}

/// Fallback for every GET the API scope did not claim: serve the browser
/// pages. Extension-less paths resolve to the same-named `.html` file.
pub async fn serve_page(req: HttpRequest, data: Data<AppState>) -> HttpResponse {
    let root = std::path::Path::new(&data.config.static_dir);
    let file_path = match resolve_page(root, req.path()) {
        Some(file_path) => file_path,
        None => {
            return HttpResponse::NotFound().json(json!({ "error": "Resource not found" }));
        }
    };

    match NamedFile::open_async(&file_path).await {
        Ok(file) => file.into_response(&req),
        Err(_) => HttpResponse::NotFound().json(json!({ "error": "Resource not found" })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::Config;
    use crate::repository::database::Database;
    use actix_web::{test, App};

    // The pool is built lazily and none of these requests get past payload
    // validation, so no live database is needed.
    fn test_state() -> Data<AppState> {
        let config = Config {
            database_url: "postgres://postgres@127.0.0.1/league_test".to_string(),
            port: 0,
            static_dir: "./public".to_string(),
        };
        Data::new(AppState {
            db: Database::new(config.clone()),
            config,
        })
    }

    #[actix_web::test]
    async fn create_player_without_team_id_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/players")
            .set_json(serde_json::json!({ "playerName": "Jasprit Bumrah" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn create_team_with_blank_name_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/teams")
            .set_json(serde_json::json!({ "teamName": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Team name is required.");
    }

    #[actix_web::test]
    async fn match_between_a_team_and_itself_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/matches")
            .set_json(serde_json::json!({
                "matchNo": 1,
                "matchDate": "2026-04-18",
                "team1Id": 4,
                "team2Id": 4,
                "team1Score": "150/6",
                "team2Score": "151/3"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "A match must involve two different teams.");
    }

    #[actix_web::test]
    async fn match_with_unparseable_score_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/matches")
            .set_json(serde_json::json!({
                "matchNo": 2,
                "matchDate": "2026-04-19",
                "team1Id": 1,
                "team2Id": 2,
                "team1Score": "plenty",
                "team2Score": "151/3"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn match_without_team_ids_is_a_400() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .app_data(json_config())
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/matches")
            .set_json(serde_json::json!({
                "matchNo": 3,
                "matchDate": "2026-04-20",
                "team1Score": "150/6",
                "team2Score": "151/3"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
