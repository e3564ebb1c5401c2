//! Upstream URL layout. Core-API documents link to each other with `$ref`; the
//! site API is addressed by sport, league and team id.

use crate::catalog::LeagueConfig;

pub const ESPN_SITE_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports";
pub const ESPN_CORE_BASE: &str = "https://sports.core.api.espn.com/v2/sports";

pub fn league_teams_url(league: &LeagueConfig) -> String {
    format!(
        "{ESPN_CORE_BASE}/{}/leagues/{}/teams?limit=200",
        league.sport, league.league
    )
}

pub fn site_team_url(league: &LeagueConfig, team_id: &str) -> String {
    format!("{}/{team_id}", site_teams_base(league))
}

pub fn team_statistics_url(league: &LeagueConfig, team_id: &str) -> String {
    format!("{}/{team_id}/statistics", site_teams_base(league))
}

pub fn team_schedule_url(league: &LeagueConfig, team_id: &str) -> String {
    format!("{}/{team_id}/schedule", site_teams_base(league))
}

pub fn team_roster_url(league: &LeagueConfig, team_id: &str) -> String {
    format!("{}/{team_id}/roster", site_teams_base(league))
}

fn site_teams_base(league: &LeagueConfig) -> String {
    format!("{ESPN_SITE_BASE}/{}/{}/teams", league.sport, league.league)
}
