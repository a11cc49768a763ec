use chrono::NaiveDate;
use diesel::sql_types::{Integer, Nullable, Text};
use diesel::{Insertable, QueryableByName};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Everything the add-match page submits in one POST: the match row, both
/// teams' extras, and the per-player breakdown. Persisted atomically by
/// `Database::record_match`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchSubmission {
    #[validate(range(min = 1))]
    pub match_no: i32,
    pub match_date: NaiveDate,
    pub team1_id: i32,
    pub team2_id: i32,
    pub team1_score: String,
    pub team2_score: String,
    #[serde(default)]
    pub team1_extras: i32,
    #[serde(default)]
    pub team2_extras: i32,
    pub winner_id: Option<i32>,
    pub mom_id: Option<i32>,
    pub venue: Option<String>,
    #[serde(default)]
    pub player_performances: Vec<PerformanceEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    pub player_id: i32,
    #[serde(default)]
    pub runs_scored: i32,
    #[serde(default)]
    pub balls_faced: i32,
    #[serde(default)]
    pub wickets_taken: i32,
    #[serde(default)]
    pub overs_bowled: f64,
    #[serde(default)]
    pub runs_conceded: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::matches)]
pub struct NewMatch {
    pub match_no: i32,
    pub match_date: NaiveDate,
    pub team1_id: i32,
    pub team2_id: i32,
    pub team1_score: String,
    pub team2_score: String,
    pub winner_id: Option<i32>,
    pub man_of_the_match_id: Option<i32>,
    pub venue: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::extras)]
pub struct NewExtra {
    pub match_id: i32,
    pub team_id: i32,
    pub runs: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::models::schema::player_matches)]
pub struct NewPlayerMatch {
    pub match_id: i32,
    pub player_id: i32,
    pub runs_scored: i32,
    pub balls_faced: i32,
    pub wickets_taken: i32,
    pub overs_bowled: f64,
    pub runs_conceded: i32,
}

/// Row of the recent-matches strip on the dashboard.
#[derive(Serialize, Debug, QueryableByName)]
pub struct RecentMatch {
    #[diesel(sql_type = Integer)]
    #[serde(rename = "matchId")]
    pub match_id: i32,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "matchNo")]
    pub match_no: i32,
    #[diesel(sql_type = Text)]
    #[serde(rename = "team1Name")]
    pub team1_name: String,
    #[diesel(sql_type = Text)]
    #[serde(rename = "team2Name")]
    pub team2_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    #[serde(rename = "team1Logo")]
    pub team1_logo: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    #[serde(rename = "team2Logo")]
    pub team2_logo: Option<String>,
    #[diesel(sql_type = Text)]
    #[serde(rename = "team1Score")]
    pub team1_score: String,
    #[diesel(sql_type = Text)]
    #[serde(rename = "team2Score")]
    pub team2_score: String,
    #[diesel(sql_type = Nullable<Text>)]
    #[serde(rename = "winnerName")]
    pub winner_name: Option<String>,
}

/// One line of a team's match history on the team detail page.
#[derive(Serialize, Debug, QueryableByName)]
pub struct TeamMatchRow {
    #[diesel(sql_type = Integer)]
    #[serde(rename = "matchId")]
    pub match_id: i32,
    #[diesel(sql_type = Integer)]
    #[serde(rename = "matchNo")]
    pub match_no: i32,
    #[diesel(sql_type = Text)]
    #[serde(rename = "team1Name")]
    pub team1_name: String,
    #[diesel(sql_type = Text)]
    #[serde(rename = "team2Name")]
    pub team2_name: String,
    #[diesel(sql_type = Text)]
    #[serde(rename = "team1Score")]
    pub team1_score: String,
    #[diesel(sql_type = Text)]
    #[serde(rename = "team2Score")]
    pub team2_score: String,
    #[diesel(sql_type = Nullable<Text>)]
    #[serde(rename = "winnerName")]
    pub winner_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_accepts_the_full_browser_payload() {
        let submission: MatchSubmission = serde_json::from_str(
            r#"{
                "matchNo": 14,
                "matchDate": "2026-04-18",
                "team1Id": 1,
                "team2Id": 2,
                "team1Score": "180/4",
                "team2Score": "164/9",
                "team1Extras": 5,
                "team2Extras": 11,
                "winnerId": 1,
                "momId": 7,
                "venue": "Eden Gardens",
                "playerPerformances": [
                    {"playerId": 7, "runsScored": 88, "ballsFaced": 51},
                    {"playerId": 9, "wicketsTaken": 3, "oversBowled": 4.0, "runsConceded": 22}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(submission.match_no, 14);
        assert_eq!(submission.mom_id, Some(7));
        assert_eq!(submission.player_performances.len(), 2);
        assert_eq!(submission.player_performances[0].runs_scored, 88);
        // Unstated figures default to zero rather than failing the whole payload.
        assert_eq!(submission.player_performances[0].wickets_taken, 0);
    }

    #[test]
    fn submission_without_required_fields_fails_to_parse() {
        let missing_team: Result<MatchSubmission, _> = serde_json::from_str(
            r#"{"matchNo": 3, "matchDate": "2026-04-18", "team1Id": 1,
                "team1Score": "90/2", "team2Score": "91/4"}"#,
        );
        assert!(missing_team.is_err());
    }

    #[test]
    fn non_positive_match_number_fails_validation() {
        let submission: MatchSubmission = serde_json::from_str(
            r#"{"matchNo": 0, "matchDate": "2026-04-18", "team1Id": 1, "team2Id": 2,
                "team1Score": "90/2", "team2Score": "91/4"}"#,
        )
        .unwrap();
        assert!(submission.validate().is_err());
    }
}
