use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full team row, returned by the team detail endpoint.
#[derive(Serialize, Debug, Clone, Queryable)]
pub struct Team {
    #[serde(rename = "teamId")]
    pub team_id: i32,
    #[serde(rename = "tName")]
    pub t_name: String,
    pub owner: Option<String>,
    #[serde(rename = "tHome")]
    pub t_home: Option<String>,
    #[serde(rename = "teamLogoUrl")]
    pub team_logo_url: Option<String>,
}

/// Slim projection used by the team listing and the select boxes on the
/// add-match page.
#[derive(Serialize, Debug, Queryable)]
pub struct TeamSummary {
    #[serde(rename = "teamId")]
    pub team_id: i32,
    #[serde(rename = "tName")]
    pub t_name: String,
    #[serde(rename = "teamLogoUrl")]
    pub team_logo_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate, Insertable)]
#[diesel(table_name = crate::models::schema::teams)]
pub struct NewTeam {
    #[serde(rename = "teamName")]
    #[validate(length(min = 1))]
    pub t_name: String,
    pub owner: Option<String>,
    #[serde(rename = "home")]
    pub t_home: Option<String>,
    #[serde(rename = "logoUrl")]
    pub team_logo_url: Option<String>,
}

/// Aggregate payload for GET /api/teams/{id}.
#[derive(Serialize, Debug)]
pub struct TeamDetail {
    pub team: Team,
    pub players: Vec<crate::models::player::RosterEntry>,
    pub matches: Vec<crate::models::matches::TeamMatchRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_summary_uses_camel_case_wire_names() {
        let summary = TeamSummary {
            team_id: 3,
            t_name: "Chennai Super Kings".to_string(),
            team_logo_url: None,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["teamId"], 3);
        assert_eq!(json["tName"], "Chennai Super Kings");
        assert!(json["teamLogoUrl"].is_null());
    }

    #[test]
    fn new_team_accepts_the_browser_payload() {
        let team: NewTeam = serde_json::from_str(
            r#"{"teamName":"Mumbai Indians","owner":"RIL","home":"Wankhede","logoUrl":null}"#,
        )
        .unwrap();
        assert_eq!(team.t_name, "Mumbai Indians");
        assert_eq!(team.t_home.as_deref(), Some("Wankhede"));
    }

    #[test]
    fn new_team_rejects_an_empty_name() {
        let team: NewTeam =
            serde_json::from_str(r#"{"teamName":"","owner":null,"home":null,"logoUrl":null}"#)
                .unwrap();
        assert!(team.validate().is_err());
    }
}
