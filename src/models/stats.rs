use diesel::sql_types::{BigInt, Double, Integer, Nullable, Text};
use diesel::QueryableByName;
use serde::Serialize;

// Rows of the aggregation views created by the migrations. The views own the
// arithmetic; these structs only name the columns for the wire.

#[derive(Serialize, Debug, QueryableByName)]
pub struct TopBatterRow {
    #[diesel(sql_type = Integer)]
    #[serde(rename = "playerId")]
    pub player_id: i32,
    #[diesel(sql_type = Text)]
    #[serde(rename = "pName")]
    pub p_name: String,
    #[diesel(sql_type = Text)]
    #[serde(rename = "tName")]
    pub t_name: String,
    #[diesel(sql_type = BigInt)]
    #[serde(rename = "totalRuns")]
    pub total_runs: i64,
    #[diesel(sql_type = Double)]
    #[serde(rename = "avgSr")]
    pub avg_sr: f64,
}

#[derive(Serialize, Debug, QueryableByName)]
pub struct TopBowlerRow {
    #[diesel(sql_type = Integer)]
    #[serde(rename = "playerId")]
    pub player_id: i32,
    #[diesel(sql_type = Text)]
    #[serde(rename = "pName")]
    pub p_name: String,
    #[diesel(sql_type = Text)]
    #[serde(rename = "tName")]
    pub t_name: String,
    #[diesel(sql_type = BigInt)]
    pub wickets: i64,
    #[diesel(sql_type = Double)]
    pub economy: f64,
}

#[derive(Serialize, Debug, QueryableByName)]
pub struct StandingsRow {
    #[diesel(sql_type = Integer)]
    #[serde(rename = "teamId")]
    pub team_id: i32,
    #[diesel(sql_type = Text)]
    #[serde(rename = "tName")]
    pub t_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    #[serde(rename = "teamLogoUrl")]
    pub team_logo_url: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub played: i64,
    #[diesel(sql_type = BigInt)]
    pub wins: i64,
    #[diesel(sql_type = BigInt)]
    pub losses: i64,
    #[diesel(sql_type = BigInt)]
    pub points: i64,
}
