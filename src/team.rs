//! Normalizes one team from its core-API document plus the site-API
//! statistics, schedule and roster resources.

use serde_json::Value;

use crate::catalog::LeagueConfig;
use crate::endpoints::{site_team_url, team_statistics_url};
use crate::error::FetchError;
use crate::http_cache::Fetcher;
use crate::http_client::Transport;
use crate::index::{EntityIndex, StadiumIndex, stadium_id};
use crate::model::{Coordinates, PlayerTeam, Stadium, StadiumTeam, Team, TeamColors};
use crate::roster::fetch_roster;
use crate::schedule::fetch_team_schedule;
use crate::stats::project_stats;
use crate::value::{array_at, hrefs, pick_string, ref_at, str_at, u32_at};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Franchise {
    pub founded: Option<u16>,
    pub championships: Option<u32>,
}

/// Fetches and assembles the team behind `team_ref`, registering its stadium
/// and roster players in `index`.
///
/// Returns `Ok(None)` for a listing entry whose document carries no team id.
pub fn normalize_team<T: Transport>(
    fetcher: &mut Fetcher<T>,
    league: &LeagueConfig,
    team_ref: &str,
    index: &mut EntityIndex,
) -> Result<Option<Team>, FetchError> {
    let core = fetcher.get(team_ref)?;
    let Some(source_id) = str_at(&core, "id") else {
        log::debug!("{}: skipping team entry without id ({team_ref})", league.id);
        return Ok(None);
    };
    let team_id = format!(
        "{}-{}",
        league.id,
        str_at(&core, "slug").unwrap_or_else(|| source_id.clone())
    );
    log::debug!("{}: normalizing {team_id}", league.id);

    let site = fetcher.get(&site_team_url(league, &source_id))?;
    let (conference, division) = collect_division(fetcher, &core)?;
    let stadium_id = collect_venue(fetcher, &core, &team_id, league.id, &mut index.stadiums)?;
    let franchise = collect_franchise(fetcher, &core)?;
    let coach = collect_coach(fetcher, &core)?;
    let stats_raw = collect_statistics(fetcher, league, &source_id)?;
    let schedule = fetch_team_schedule(fetcher, league, &source_id)?;
    let roster = fetch_roster(fetcher, league, &source_id)?;

    let site_team = site.get("team").unwrap_or(&Value::Null);
    let team = Team {
        id: team_id,
        source_id,
        league_id: league.id.to_string(),
        name: str_at(&core, "displayName"),
        short_name: str_at(&core, "shortDisplayName"),
        nickname: str_at(&core, "nickname"),
        location: str_at(&core, "location"),
        abbreviation: str_at(&core, "abbreviation"),
        colors: TeamColors {
            primary: hex_color(&core, "color"),
            secondary: hex_color(&core, "alternateColor"),
        },
        logos: hrefs(array_at(&core, "logos")),
        conference,
        division,
        record: collect_record(site_team),
        standing_summary: str_at(site_team, "standingSummary"),
        coach,
        stadium_id,
        founded: franchise.founded.or(league.founded),
        championships: franchise.championships,
        stats: project_stats(&stats_raw, league.stat_selectors),
        schedule,
        roster,
        feature_sections: league.feature_sections.iter().map(|s| s.to_string()).collect(),
    };

    let owner = PlayerTeam {
        id: team.id.clone(),
        name: team.name.clone(),
        league_id: league.id.to_string(),
    };
    for entry in &team.roster {
        index.players.enrich(entry, &owner);
    }

    Ok(Some(team))
}

/// `(conference, division)` from the team's group and the group's parent.
pub fn collect_division<T: Transport>(
    fetcher: &mut Fetcher<T>,
    core: &Value,
) -> Result<(Option<String>, Option<String>), FetchError> {
    let Some(groups_ref) = ref_at(core, "groups") else {
        return Ok((None, None));
    };
    let division = fetcher.get(groups_ref)?;
    let conference = match ref_at(&division, "parent") {
        Some(parent_ref) => str_at(&fetcher.get(parent_ref)?, "name"),
        None => None,
    };
    Ok((conference, str_at(&division, "name")))
}

pub fn collect_coach<T: Transport>(
    fetcher: &mut Fetcher<T>,
    core: &Value,
) -> Result<Option<String>, FetchError> {
    let Some(coaches_ref) = ref_at(core, "coaches") else {
        return Ok(None);
    };
    let listing = fetcher.get(coaches_ref)?;
    for item in array_at(&listing, "items") {
        let Some(coach_ref) = item.get("$ref").and_then(Value::as_str) else {
            continue;
        };
        let coach = fetcher.get(coach_ref)?;
        let kind = coach.get("type").unwrap_or(&Value::Null);
        let is_head = str_at(kind, "name").as_deref() == Some("Head Coach")
            || str_at(kind, "abbreviation").as_deref() == Some("HC");
        if !is_head {
            continue;
        }
        let name = coach
            .get("coach")
            .and_then(|person| pick_string(person, &["displayName", "fullName"]));
        if name.is_some() {
            return Ok(name);
        }
    }
    Ok(None)
}

pub fn collect_franchise<T: Transport>(
    fetcher: &mut Fetcher<T>,
    core: &Value,
) -> Result<Franchise, FetchError> {
    let Some(franchise_ref) = ref_at(core, "franchise") else {
        return Ok(Franchise::default());
    };
    let franchise = fetcher.get(franchise_ref)?;
    Ok(Franchise {
        founded: u32_at(&franchise, "yearFounded")
            .and_then(|y| u16::try_from(y).ok())
            .filter(|y| *y > 0),
        championships: franchise
            .get("championships")
            .and_then(|c| u32_at(c, "total")),
    })
}

/// Statistics document (`results.stats`) for a team; `Null` when absent.
pub fn collect_statistics<T: Transport>(
    fetcher: &mut Fetcher<T>,
    league: &LeagueConfig,
    team_id: &str,
) -> Result<Value, FetchError> {
    let doc = fetcher.get(&team_statistics_url(league, team_id))?;
    Ok(doc
        .get("results")
        .and_then(|r| r.get("stats"))
        .cloned()
        .unwrap_or(Value::Null))
}

/// Resolves the team's venue into the stadium index and returns its stadium id.
pub fn collect_venue<T: Transport>(
    fetcher: &mut Fetcher<T>,
    core: &Value,
    team_id: &str,
    league_id: &str,
    stadiums: &mut StadiumIndex,
) -> Result<Option<String>, FetchError> {
    let Some(venue_ref) = ref_at(core, "venue") else {
        return Ok(None);
    };
    let venue = fetcher.get(venue_ref)?;
    let Some(venue_id) = str_at(&venue, "id") else {
        log::debug!("venue without id at {venue_ref}");
        return Ok(None);
    };
    let id = stadium_id(&venue_id);
    let member = StadiumTeam {
        team_id: team_id.to_string(),
        league_id: league_id.to_string(),
    };
    stadiums.attach(&id, member, || stadium_from_venue(&venue));
    Ok(Some(id))
}

fn stadium_from_venue(venue: &Value) -> Stadium {
    let address = venue.get("address").unwrap_or(&Value::Null);
    Stadium {
        id: String::new(),
        venue_id: str_at(venue, "id"),
        name: pick_string(venue, &["fullName", "name"]),
        nickname: str_at(venue, "shortName"),
        capacity: u32_at(venue, "capacity"),
        surface: surface(venue),
        roof_type: str_at(venue, "roofType"),
        location: str_at(address, "city"),
        address: format_address(address),
        coordinates: venue
            .get("geoCoordinates")
            .and_then(|c| serde_json::from_value::<Coordinates>(c.clone()).ok()),
        images: hrefs(array_at(venue, "images")),
        teams: Vec::new(),
        description: None,
        history: Vec::new(),
        architecture: Vec::new(),
    }
}

fn surface(venue: &Value) -> Option<String> {
    if venue.get("grass").and_then(Value::as_bool) == Some(true) {
        return Some("Grass".to_string());
    }
    str_at(venue, "surface")
}

pub fn format_address(address: &Value) -> String {
    ["address1", "city", "state", "zipCode", "country"]
        .iter()
        .filter_map(|key| str_at(address, key))
        .collect::<Vec<_>>()
        .join(", ")
}

fn collect_record(site_team: &Value) -> Option<String> {
    site_team
        .get("record")
        .map(|r| array_at(r, "items"))
        .and_then(|items| items.first())
        .and_then(|item| str_at(item, "summary"))
}

fn hex_color(core: &Value, key: &str) -> Option<String> {
    str_at(core, key).map(|code| format!("#{code}"))
}
