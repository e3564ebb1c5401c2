use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::catalog::LeagueConfig;
use crate::endpoints::league_teams_url;
use crate::error::FetchError;
use crate::http_cache::Fetcher;
use crate::http_client::Transport;
use crate::index::EntityIndex;
use crate::model::{Dataset, League, SelectorInfo};
use crate::team::normalize_team;
use crate::value::array_at;

pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Runs every league in order and folds the indices into the final dataset.
/// The first terminal fetch error aborts the whole build.
pub fn build_dataset<T: Transport>(
    fetcher: &mut Fetcher<T>,
    leagues: &[LeagueConfig],
    generated_at: DateTime<Utc>,
) -> Result<Dataset, FetchError> {
    let mut index = EntityIndex::default();
    let mut out = Vec::with_capacity(leagues.len());
    for league in leagues {
        out.push(build_league(fetcher, league, &mut index)?);
    }

    Ok(Dataset {
        generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
        leagues: out,
        players: index.players.into_players(),
        stadiums: index.stadiums.into_stadiums(),
    })
}

pub fn build_league<T: Transport>(
    fetcher: &mut Fetcher<T>,
    config: &LeagueConfig,
    index: &mut EntityIndex,
) -> Result<League, FetchError> {
    log::info!("Processing {}...", config.name);
    let listing = fetcher.get(&league_teams_url(config))?;

    let mut league = League {
        id: config.id.to_string(),
        sport: config.sport.to_string(),
        league: config.league.to_string(),
        name: config.name.to_string(),
        short_name: config.short_name.to_string(),
        icon: config.icon.to_string(),
        founded: config.founded,
        stat_selectors: config
            .stat_selectors
            .iter()
            .map(|s| SelectorInfo {
                category: s.category.to_string(),
                field: s.field.to_string(),
                label: s.label.to_string(),
                description: s.description.to_string(),
            })
            .collect(),
        feature_sections: config.feature_sections.iter().map(|s| s.to_string()).collect(),
        teams: Vec::new(),
    };

    for item in array_at(&listing, "items") {
        let Some(team_ref) = item.get("$ref").and_then(Value::as_str) else {
            log::debug!("{}: team listing entry without $ref", config.id);
            continue;
        };
        if let Some(team) = normalize_team(fetcher, config, team_ref, index)? {
            league.teams.push(team);
        }
    }

    if league.teams.len() != config.teams_count {
        log::debug!(
            "{}: normalized {} teams, catalog expects {}",
            config.id,
            league.teams.len(),
            config.teams_count
        );
    }
    Ok(league)
}
