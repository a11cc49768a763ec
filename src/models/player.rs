use diesel::sql_types::{Double, Integer, Nullable, Text};
use diesel::{Insertable, Queryable, QueryableByName};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Player listing row: the denormalized career columns joined with the
/// owning team's name.
#[derive(Serialize, Debug, Queryable)]
pub struct PlayerWithTeam {
    #[serde(rename = "playerId")]
    pub player_id: i32,
    #[serde(rename = "pName")]
    pub p_name: String,
    #[serde(rename = "tName")]
    pub t_name: Option<String>,
    #[serde(rename = "matchesPlayed")]
    pub matches_played: i32,
    #[serde(rename = "totalRuns")]
    pub total_runs: i32,
    #[serde(rename = "avgSr")]
    pub avg_sr: f64,
    pub wickets: i32,
    pub economy: f64,
    pub best: Option<String>,
}

/// Minimal (id, name) pair for roster listings and the performance-entry
/// selects on the add-match page.
#[derive(Serialize, Debug, Queryable)]
pub struct RosterEntry {
    #[serde(rename = "playerId")]
    pub player_id: i32,
    #[serde(rename = "pName")]
    pub p_name: String,
}

#[derive(Debug, Deserialize, Validate, Insertable)]
#[diesel(table_name = crate::models::schema::players)]
pub struct NewPlayer {
    #[serde(rename = "playerName")]
    #[validate(length(min = 1))]
    pub p_name: String,
    #[serde(rename = "teamId")]
    pub team_id: i32,
}

/// Profile header for the player detail page: the full player row plus the
/// team's name and logo.
#[derive(Serialize, Debug, QueryableByName)]
pub struct PlayerProfile {
    #[diesel(sql_type = Integer)]
    #[serde(rename = "playerId")]
    pub player_id: i32,
    #[diesel(sql_type = Text)]
    #[serde(rename = "pName")]
    pub p_name: String,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "teamId")]
    pub team_id: i32,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "matchesPlayed")]
    pub matches_played: i32,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "totalRuns")]
    pub total_runs: i32,
    #[diesel(sql_type = Double)]
    #[serde(rename = "avgSr")]
    pub avg_sr: f64,
    #[diesel(sql_type = Integer)]
    pub wickets: i32,
    #[diesel(sql_type = Double)]
    pub economy: f64,
    #[diesel(sql_type = Nullable<Text>)]
    pub best: Option<String>,
    #[diesel(sql_type = Text)]
    #[serde(rename = "tName")]
    pub t_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    #[serde(rename = "teamLogoUrl")]
    pub team_logo_url: Option<String>,
}

/// One line of a player's match-by-match history, with the opposing team
/// resolved to a name.
#[derive(Serialize, Debug, QueryableByName)]
pub struct PerformanceRow {
    #[diesel(sql_type = Integer)]
    #[serde(rename = "matchNo")]
    pub match_no: i32,
    #[diesel(sql_type = Text)]
    #[serde(rename = "againstTeam")]
    pub against_team: String,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "runsScored")]
    pub runs_scored: i32,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "ballsFaced")]
    pub balls_faced: i32,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "wicketsTaken")]
    pub wickets_taken: i32,
    #[diesel(sql_type = Double)]
    #[serde(rename = "oversBowled")]
    pub overs_bowled: f64,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "runsConceded")]
    pub runs_conceded: i32,
}

/// Aggregate payload for GET /api/players/{id}.
#[derive(Serialize, Debug)]
pub struct PlayerDetail {
    pub player: PlayerProfile,
    pub performances: Vec<PerformanceRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_requires_both_fields() {
        let missing_team: Result<NewPlayer, _> =
            serde_json::from_str(r#"{"playerName":"Jasprit Bumrah"}"#);
        assert!(missing_team.is_err());

        let player: NewPlayer =
            serde_json::from_str(r#"{"playerName":"Jasprit Bumrah","teamId":1}"#).unwrap();
        assert_eq!(player.team_id, 1);
    }

    #[test]
    fn player_listing_row_serializes_camel_case() {
        let row = PlayerWithTeam {
            player_id: 7,
            p_name: "MS Dhoni".to_string(),
            t_name: Some("Chennai Super Kings".to_string()),
            matches_played: 12,
            total_runs: 310,
            avg_sr: 142.5,
            wickets: 0,
            economy: 0.0,
            best: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["pName"], "MS Dhoni");
        assert_eq!(json["matchesPlayed"], 12);
        assert_eq!(json["avgSr"], 142.5);
    }
}
