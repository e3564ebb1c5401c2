use serde_json::Value;

use crate::catalog::LeagueConfig;
use crate::endpoints::team_roster_url;
use crate::error::FetchError;
use crate::http_cache::Fetcher;
use crate::http_client::Transport;
use crate::model::{BirthPlace, RosterPlayer};
use crate::value::{array_at, str_at, u32_at};

pub fn fetch_roster<T: Transport>(
    fetcher: &mut Fetcher<T>,
    league: &LeagueConfig,
    team_id: &str,
) -> Result<Vec<RosterPlayer>, FetchError> {
    let doc = fetcher.get(&team_roster_url(league, team_id))?;
    Ok(parse_roster(&doc, league.roster_limit))
}

/// Flattens position buckets, sorts by (position, jersey) as strings and keeps
/// the first `limit` entries.
pub fn parse_roster(doc: &Value, limit: usize) -> Vec<RosterPlayer> {
    let mut roster = array_at(doc, "athletes")
        .iter()
        .flat_map(|bucket| array_at(bucket, "items"))
        .map(|item| parse_player(item.get("player").unwrap_or(item)))
        .collect::<Vec<_>>();

    roster.sort_by(|a, b| {
        let key_a = (a.position.as_deref().unwrap_or(""), a.jersey.as_deref().unwrap_or(""));
        let key_b = (b.position.as_deref().unwrap_or(""), b.jersey.as_deref().unwrap_or(""));
        key_a.cmp(&key_b)
    });
    roster.truncate(limit);
    roster
}

fn parse_player(player: &Value) -> RosterPlayer {
    let position = player.get("position").unwrap_or(&Value::Null);
    let birth_place = player.get("birthPlace").unwrap_or(&Value::Null);
    let country = str_at(birth_place, "country");

    RosterPlayer {
        player_id: str_at(player, "id"),
        full_name: str_at(player, "fullName"),
        position: str_at(position, "displayName"),
        abbreviation: str_at(position, "abbreviation"),
        jersey: str_at(player, "jersey"),
        age: u32_at(player, "age"),
        height: str_at(player, "displayHeight"),
        weight: str_at(player, "displayWeight"),
        experience: player.get("experience").and_then(|e| u32_at(e, "years")),
        status: player.get("status").and_then(|s| str_at(s, "type")),
        headshot: player.get("headshot").and_then(|h| str_at(h, "href")),
        college: player.get("college").and_then(|c| str_at(c, "name")),
        country: country.clone(),
        birth_place: BirthPlace {
            city: str_at(birth_place, "city"),
            state: str_at(birth_place, "state"),
            country,
        },
        links: array_at(player, "links").to_vec(),
    }
}
