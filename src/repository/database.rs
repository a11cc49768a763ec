use crate::config::config::Config;
use crate::models::matches::{
    MatchSubmission, NewExtra, NewMatch, NewPlayerMatch, RecentMatch, TeamMatchRow,
};
use crate::models::player::{
    NewPlayer, PerformanceRow, PlayerDetail, PlayerProfile, PlayerWithTeam, RosterEntry,
};
use crate::models::schema::{extras, matches, player_matches, players, teams};
use crate::models::stats::{StandingsRow, TopBatterRow, TopBowlerRow};
use crate::models::team::{NewTeam, Team, TeamDetail, TeamSummary};
use crate::util::score;
use deadpool::managed::Object;
use diesel::sql_types::Integer;
use diesel::{
    BoolExpressionMethods, ExpressionMethods, NullableExpressionMethods, OptionalExtension,
    QueryDsl,
};
use diesel_async::pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use thiserror::Error;

pub type DBPool = Pool<AsyncPgConnection>;

type PooledConn = Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not acquire a database connection: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::deadpool::PoolError),
    #[error("database error: {0}")]
    QueryError(#[from] diesel::result::Error),
    #[error("Team {team} score breakdown does not match the total score of {declared}.")]
    ScoreMismatch { team: u8, declared: String },
    #[error("Player {player} is not on either team in this match.")]
    ForeignPlayer { player: i32 },
}

impl StoreError {
    /// True for inserts refused by a unique constraint, in practice a
    /// duplicate match number raced in by a second submission.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StoreError::QueryError(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ))
        )
    }
}

const TEAM_MATCHES_SQL: &str = "\
    SELECT m.match_id, m.match_no, t1.t_name AS team1_name, t2.t_name AS team2_name, \
           m.team1_score, m.team2_score, w.t_name AS winner_name \
    FROM matches m \
    JOIN teams t1 ON m.team1_id = t1.team_id \
    JOIN teams t2 ON m.team2_id = t2.team_id \
    LEFT JOIN teams w ON m.winner_id = w.team_id \
    WHERE m.team1_id = $1 OR m.team2_id = $1 \
    ORDER BY m.match_no DESC";

const PLAYER_PROFILE_SQL: &str = "\
    SELECT p.player_id, p.p_name, p.team_id, p.matches_played, p.total_runs, p.avg_sr, \
           p.wickets, p.economy, p.best, t.t_name, t.team_logo_url \
    FROM players p \
    JOIN teams t ON p.team_id = t.team_id \
    WHERE p.player_id = $1";

const PLAYER_HISTORY_SQL: &str = "\
    SELECT m.match_no, t.t_name AS against_team, pm.runs_scored, pm.balls_faced, \
           pm.wickets_taken, pm.overs_bowled, pm.runs_conceded \
    FROM player_matches pm \
    JOIN matches m ON pm.match_id = m.match_id \
    JOIN players p ON pm.player_id = p.player_id \
    JOIN teams t ON (CASE WHEN m.team1_id = p.team_id THEN m.team2_id ELSE m.team1_id END) = t.team_id \
    WHERE pm.player_id = $1 \
    ORDER BY m.match_no DESC";

const RECENT_MATCHES_SQL: &str = "\
    SELECT m.match_id, m.match_no, t1.t_name AS team1_name, t2.t_name AS team2_name, \
           t1.team_logo_url AS team1_logo, t2.team_logo_url AS team2_logo, \
           m.team1_score, m.team2_score, w.t_name AS winner_name \
    FROM matches m \
    JOIN teams t1 ON m.team1_id = t1.team_id \
    JOIN teams t2 ON m.team2_id = t2.team_id \
    LEFT JOIN teams w ON m.winner_id = w.team_id \
    ORDER BY m.match_no DESC \
    LIMIT 5";

const TOP_BATTERS_SQL: &str =
    "SELECT player_id, p_name, t_name, total_runs, avg_sr FROM top_batters LIMIT 10";

const TOP_BOWLERS_SQL: &str =
    "SELECT player_id, p_name, t_name, wickets, economy FROM top_bowlers LIMIT 10";

const STANDINGS_SQL: &str = "\
    SELECT team_id, t_name, team_logo_url, played, wins, losses, points FROM team_standings";

pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new(config: Config) -> Self {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let pool = Pool::builder(manager)
            .build()
            .expect("Failed to create pool.");
        Database { pool }
    }

    async fn get_db_conn(&self) -> Result<PooledConn, StoreError> {
        self.pool.get().await.map_err(StoreError::PoolError)
    }

    pub async fn list_teams(&self) -> Result<Vec<TeamSummary>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let rows = teams::table
            .select((teams::team_id, teams::t_name, teams::team_logo_url))
            .order(teams::t_name.asc())
            .load::<TeamSummary>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn team_detail(&self, id: i32) -> Result<Option<TeamDetail>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let team = teams::table
            .find(id)
            .first::<Team>(&mut conn)
            .await
            .optional()?;

        let team = match team {
            Some(team) => team,
            None => return Ok(None),
        };

        let roster = players::table
            .filter(players::team_id.eq(id))
            .select((players::player_id, players::p_name))
            .order(players::p_name.asc())
            .load::<RosterEntry>(&mut conn)
            .await?;
        let match_history = diesel::sql_query(TEAM_MATCHES_SQL)
            .bind::<Integer, _>(id)
            .load::<TeamMatchRow>(&mut conn)
            .await?;

        Ok(Some(TeamDetail {
            team,
            players: roster,
            matches: match_history,
        }))
    }

    pub async fn team_roster(&self, team_id: i32) -> Result<Vec<RosterEntry>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let roster = players::table
            .filter(players::team_id.eq(team_id))
            .select((players::player_id, players::p_name))
            .order(players::p_name.asc())
            .load::<RosterEntry>(&mut conn)
            .await?;
        Ok(roster)
    }

    pub async fn list_players(&self) -> Result<Vec<PlayerWithTeam>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let rows = players::table
            .left_join(teams::table)
            .select((
                players::player_id,
                players::p_name,
                teams::t_name.nullable(),
                players::matches_played,
                players::total_runs,
                players::avg_sr,
                players::wickets,
                players::economy,
                players::best,
            ))
            .order(players::p_name.asc())
            .load::<PlayerWithTeam>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn player_detail(&self, id: i32) -> Result<Option<PlayerDetail>, StoreError> {
        // Profile and history are independent reads, so run them on two
        // pooled connections at once.
        let (profile, performances) =
            futures::try_join!(self.player_profile(id), self.player_history(id))?;

        Ok(profile.map(|player| PlayerDetail {
            player,
            performances,
        }))
    }

    async fn player_profile(&self, id: i32) -> Result<Option<PlayerProfile>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let profile = diesel::sql_query(PLAYER_PROFILE_SQL)
            .bind::<Integer, _>(id)
            .get_result::<PlayerProfile>(&mut conn)
            .await
            .optional()?;
        Ok(profile)
    }

    async fn player_history(&self, id: i32) -> Result<Vec<PerformanceRow>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let rows = diesel::sql_query(PLAYER_HISTORY_SQL)
            .bind::<Integer, _>(id)
            .load::<PerformanceRow>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn top_batters(&self) -> Result<Vec<TopBatterRow>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let rows = diesel::sql_query(TOP_BATTERS_SQL)
            .load::<TopBatterRow>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn top_bowlers(&self) -> Result<Vec<TopBowlerRow>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let rows = diesel::sql_query(TOP_BOWLERS_SQL)
            .load::<TopBowlerRow>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn points_table(&self) -> Result<Vec<StandingsRow>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let rows = diesel::sql_query(STANDINGS_SQL)
            .load::<StandingsRow>(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn recent_matches(&self) -> Result<Vec<RecentMatch>, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let rows = diesel::sql_query(RECENT_MATCHES_SQL)
            .load::<RecentMatch>(&mut conn)
            .await?;
        Ok(rows)
    }

    /// Advisory only: the schema's unique constraint on match_no is what
    /// actually arbitrates two submissions racing for the same number.
    pub async fn next_match_number(&self) -> Result<i32, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let current: Option<i32> = matches::table
            .select(diesel::dsl::max(matches::match_no))
            .first(&mut conn)
            .await?;
        Ok(current.unwrap_or(0) + 1)
    }

    pub async fn create_team(&self, new_team: NewTeam) -> Result<i32, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let team_id = diesel::insert_into(teams::table)
            .values(&new_team)
            .returning(teams::team_id)
            .get_result::<i32>(&mut conn)
            .await?;
        Ok(team_id)
    }

    pub async fn create_player(&self, new_player: NewPlayer) -> Result<i32, StoreError> {
        let mut conn = self.get_db_conn().await?;
        let player_id = diesel::insert_into(players::table)
            .values(&new_player)
            .returning(players::player_id)
            .get_result::<i32>(&mut conn)
            .await?;
        Ok(player_id)
    }

    /// Persists one completed match: the match row, one extras row per team
    /// and one row per performance entry, all in a single transaction on one
    /// dedicated connection. Both teams' score breakdowns are reconciled
    /// against the rows just inserted before commit; any failure rolls the
    /// whole submission back.
    pub async fn record_match(&self, submission: MatchSubmission) -> Result<i32, StoreError> {
        let mut conn = self.get_db_conn().await?;

        conn.transaction::<i32, StoreError, _>(|conn| {
            async move {
                let new_match = NewMatch {
                    match_no: submission.match_no,
                    match_date: submission.match_date,
                    team1_id: submission.team1_id,
                    team2_id: submission.team2_id,
                    team1_score: submission.team1_score.clone(),
                    team2_score: submission.team2_score.clone(),
                    winner_id: submission.winner_id,
                    man_of_the_match_id: submission.mom_id,
                    venue: submission.venue.clone(),
                };
                let match_id = diesel::insert_into(matches::table)
                    .values(&new_match)
                    .returning(matches::match_id)
                    .get_result::<i32>(conn)
                    .await?;

                let extra_rows = vec![
                    NewExtra {
                        match_id,
                        team_id: submission.team1_id,
                        runs: submission.team1_extras,
                    },
                    NewExtra {
                        match_id,
                        team_id: submission.team2_id,
                        runs: submission.team2_extras,
                    },
                ];
                diesel::insert_into(extras::table)
                    .values(&extra_rows)
                    .execute(conn)
                    .await?;

                if !submission.player_performances.is_empty() {
                    let player_ids: Vec<i32> = submission
                        .player_performances
                        .iter()
                        .map(|entry| entry.player_id)
                        .collect();
                    let rosters: Vec<(i32, i32)> = players::table
                        .filter(players::player_id.eq_any(&player_ids))
                        .select((players::player_id, players::team_id))
                        .load(conn)
                        .await?;
                    if let Some(player) =
                        outside_player(&rosters, submission.team1_id, submission.team2_id)
                    {
                        return Err(StoreError::ForeignPlayer { player });
                    }

                    let performance_rows: Vec<NewPlayerMatch> = submission
                        .player_performances
                        .iter()
                        .map(|entry| NewPlayerMatch {
                            match_id,
                            player_id: entry.player_id,
                            runs_scored: entry.runs_scored,
                            balls_faced: entry.balls_faced,
                            wickets_taken: entry.wickets_taken,
                            overs_bowled: entry.overs_bowled,
                            runs_conceded: entry.runs_conceded,
                        })
                        .collect();
                    diesel::insert_into(player_matches::table)
                        .values(&performance_rows)
                        .execute(conn)
                        .await?;
                }

                Self::check_breakdown(
                    conn,
                    submission.match_no,
                    match_id,
                    1,
                    submission.team1_id,
                    &submission.team1_score,
                )
                .await?;
                Self::check_breakdown(
                    conn,
                    submission.match_no,
                    match_id,
                    2,
                    submission.team2_id,
                    &submission.team2_score,
                )
                .await?;

                Ok(match_id)
            }
            .scope_boxed()
        })
        .await
    }

    /// Re-reads the rows just inserted for one side of the match and applies
    /// the breakdown rule against the declared score string.
    async fn check_breakdown(
        conn: &mut AsyncPgConnection,
        match_no: i32,
        match_id: i32,
        side: u8,
        team_id: i32,
        declared: &str,
    ) -> Result<(), StoreError> {
        let batted_runs: Option<i64> = player_matches::table
            .inner_join(players::table)
            .filter(player_matches::match_id.eq(match_id))
            .filter(players::team_id.eq(team_id))
            .select(diesel::dsl::sum(player_matches::runs_scored))
            .first(conn)
            .await?;
        let extra_runs: Option<i32> = extras::table
            .filter(
                extras::match_id
                    .eq(match_id)
                    .and(extras::team_id.eq(team_id)),
            )
            .select(extras::runs)
            .first(conn)
            .await
            .optional()?;

        if !score::breakdown_reconciles(
            declared,
            batted_runs.unwrap_or(0),
            i64::from(extra_runs.unwrap_or(0)),
        ) {
            log::warn!(
                "Score breakdown mismatch for match {} team {}: declared {:?}",
                match_no,
                team_id,
                declared
            );
            return Err(StoreError::ScoreMismatch {
                team: side,
                declared: declared.to_owned(),
            });
        }
        Ok(())
    }
}

/// Every performance row must name a player from one of the two competing
/// teams. Given the (player_id, team_id) pairs looked up for the submitted
/// ids, returns the first player belonging to neither side.
fn outside_player(rosters: &[(i32, i32)], team1_id: i32, team2_id: i32) -> Option<i32> {
    rosters
        .iter()
        .find(|(_, team_id)| *team_id != team1_id && *team_id != team2_id)
        .map(|(player_id, _)| *player_id)
}
