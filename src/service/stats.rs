use crate::AppState;
use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use log::error;
use serde_json::json;

pub async fn top_batters_service(data: Data<AppState>) -> impl Responder {
    match data.db.top_batters().await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => {
            error!("Failed to fetch the top batters. The error: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Database error" }))
        }
    }
}

pub async fn top_bowlers_service(data: Data<AppState>) -> impl Responder {
    match data.db.top_bowlers().await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => {
            error!("Failed to fetch the top bowlers. The error: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Database error" }))
        }
    }
}

pub async fn points_table_service(data: Data<AppState>) -> impl Responder {
    match data.db.points_table().await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => {
            error!("Failed to fetch the points table. The error: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Database error" }))
        }
    }
}
