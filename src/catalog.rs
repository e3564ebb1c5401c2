//! Compiled-in league catalog driving the whole pipeline.

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSelector {
    pub category: &'static str,
    pub field: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct LeagueConfig {
    pub id: &'static str,
    /// Sport key in upstream URLs, e.g. "football".
    pub sport: &'static str,
    /// League key in upstream URLs, e.g. "nfl".
    pub league: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub icon: &'static str,
    pub founded: Option<u16>,
    pub teams_count: usize,
    pub roster_limit: usize,
    pub stat_selectors: &'static [StatSelector],
    pub feature_sections: &'static [&'static str],
}

const fn sel(
    category: &'static str,
    field: &'static str,
    label: &'static str,
    description: &'static str,
) -> StatSelector {
    StatSelector {
        category,
        field,
        label,
        description,
    }
}

pub const LEAGUES: &[LeagueConfig] = &[
    LeagueConfig {
        id: "nfl",
        sport: "football",
        league: "nfl",
        name: "National Football League",
        short_name: "NFL",
        icon: "football",
        founded: Some(1920),
        teams_count: 32,
        roster_limit: 20,
        stat_selectors: &[
            sel("scoring", "totalPointsPerGame", "Points/Game", "Average points scored per game"),
            sel("passing", "yardsPerGame", "Pass Yards/Game", "Passing yards gained per game"),
            sel("rushing", "yardsPerGame", "Rush Yards/Game", "Rushing yards gained per game"),
            sel("defensive", "sacks", "Sacks", "Total sacks recorded"),
            sel("miscellaneous", "totalTakeaways", "Takeaways", "Total turnovers forced"),
            sel(
                "miscellaneous",
                "turnOverDifferential",
                "Turnover Diff",
                "Giveaway versus takeaway differential",
            ),
        ],
        feature_sections: &["Offense", "Defense", "Special Teams"],
    },
    LeagueConfig {
        id: "nba",
        sport: "basketball",
        league: "nba",
        name: "National Basketball Association",
        short_name: "NBA",
        icon: "basketball",
        founded: Some(1946),
        teams_count: 30,
        roster_limit: 18,
        stat_selectors: &[
            sel("general", "avgPoints", "Points/Game", "Points scored per game"),
            sel("general", "avgAssists", "Assists/Game", "Team assists per game"),
            sel("general", "avgRebounds", "Rebounds/Game", "Total rebounds per game"),
            sel("offensive", "threePointPct", "3PT%", "Team three-point percentage"),
            sel("defensive", "avgBlocks", "Blocks/Game", "Blocks recorded per game"),
        ],
        feature_sections: &["Pace & Space", "Half Court Execution", "Defensive Identity"],
    },
    LeagueConfig {
        id: "mlb",
        sport: "baseball",
        league: "mlb",
        name: "Major League Baseball",
        short_name: "MLB",
        icon: "baseball",
        founded: Some(1903),
        teams_count: 30,
        roster_limit: 28,
        stat_selectors: &[
            sel("batting", "avg", "AVG", "Team batting average"),
            sel("batting", "runs", "Runs", "Runs scored this season"),
            sel("batting", "homeRuns", "Home Runs", "Total home runs"),
            sel("pitching", "ERA", "Team ERA", "Earned run average"),
            sel("pitching", "strikeouts", "Strikeouts", "Pitching strikeouts"),
        ],
        feature_sections: &["Lineup Depth", "Bullpen Snapshot", "Farm System"],
    },
    LeagueConfig {
        id: "nhl",
        sport: "hockey",
        league: "nhl",
        name: "National Hockey League",
        short_name: "NHL",
        icon: "hockey",
        founded: Some(1917),
        teams_count: 32,
        roster_limit: 22,
        stat_selectors: &[
            sel("offensive", "goals", "Goals", "Total goals scored"),
            sel("offensive", "points", "Points", "Total points (goals + assists)"),
            sel("defensive", "avgGoalsAgainst", "GA/Game", "Goals allowed per game"),
            sel("defensive", "savePct", "Save %", "Save percentage"),
            sel("offensive", "powerPlayGoals", "PP Goals", "Power play goals"),
            sel("penalties", "penaltyMinutes", "Penalty Minutes", "Time spent in the box"),
        ],
        feature_sections: &["Top Line", "Goaltending", "Special Teams"],
    },
];

pub fn league_by_id(id: &str) -> Option<&'static LeagueConfig> {
    LEAGUES.iter().find(|l| l.id.eq_ignore_ascii_case(id.trim()))
}

/// Catalog entries whose id is in `ids`, in catalog order. Empty `ids` selects all.
pub fn select_leagues(ids: &[String]) -> Result<Vec<LeagueConfig>, ConfigError> {
    if ids.is_empty() {
        return Ok(LEAGUES.to_vec());
    }
    if let Some(unknown) = ids.iter().find(|id| league_by_id(id).is_none()) {
        return Err(ConfigError::UnknownLeague(unknown.clone()));
    }
    Ok(LEAGUES
        .iter()
        .filter(|l| ids.iter().any(|id| l.id.eq_ignore_ascii_case(id.trim())))
        .copied()
        .collect())
}
