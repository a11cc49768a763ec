//! Score-string handling and the breakdown reconciliation rule.
//!
//! A declared score is the familiar scoreboard string, runs optionally
//! followed by wickets: `"180/4"` or just `"180"`. A match submission is
//! only accepted when, for each team, declared runs equal the sum of that
//! team's batters' runs plus the team's extras.

/// Parses the runs component of a declared score string.
pub fn declared_total(score: &str) -> Option<i64> {
    let runs = score.trim().split('/').next().unwrap_or("").trim();
    runs.parse::<i64>().ok().filter(|n| *n >= 0)
}

/// The breakdown rule: declared runs must equal batted runs plus extras.
/// An unparseable declared score never reconciles.
pub fn breakdown_reconciles(declared: &str, batted_runs: i64, extras: i64) -> bool {
    match declared_total(declared) {
        Some(total) => total == batted_runs + extras,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_runs_with_and_without_wickets() {
        assert_eq!(declared_total("180/4"), Some(180));
        assert_eq!(declared_total("180"), Some(180));
        assert_eq!(declared_total("  205/7 "), Some(205));
        assert_eq!(declared_total("0/0"), Some(0));
    }

    #[test]
    fn rejects_garbage_scores() {
        assert_eq!(declared_total(""), None);
        assert_eq!(declared_total("/4"), None);
        assert_eq!(declared_total("abc"), None);
        assert_eq!(declared_total("-10/2"), None);
    }

    #[test]
    fn reconciles_when_batters_plus_extras_match_the_total() {
        // 175 off the bat plus 5 extras reaches the declared 180.
        assert!(breakdown_reconciles("180/4", 175, 5));
        assert!(breakdown_reconciles("91", 91, 0));
    }

    #[test]
    fn fails_when_the_breakdown_falls_short_or_over() {
        // Same innings, extras dropped to zero: 175 != 180.
        assert!(!breakdown_reconciles("180/4", 175, 0));
        assert!(!breakdown_reconciles("180/4", 180, 5));
    }

    #[test]
    fn unparseable_declared_score_never_reconciles() {
        assert!(!breakdown_reconciles("n/a", 0, 0));
    }
}
