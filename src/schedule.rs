use serde_json::Value;

use crate::catalog::LeagueConfig;
use crate::endpoints::team_schedule_url;
use crate::error::FetchError;
use crate::http_cache::Fetcher;
use crate::http_client::Transport;
use crate::model::{Opponent, Schedule, ScheduleEvent};
use crate::value::{array_at, as_string, hrefs, score, str_at};

pub const SCHEDULE_WINDOW: usize = 5;

pub fn fetch_team_schedule<T: Transport>(
    fetcher: &mut Fetcher<T>,
    league: &LeagueConfig,
    team_id: &str,
) -> Result<Schedule, FetchError> {
    let doc = fetcher.get(&team_schedule_url(league, team_id))?;
    Ok(parse_schedule(&doc, team_id))
}

/// Splits a schedule document into the latest completed and the nearest
/// upcoming events for `team_id`, at most [`SCHEDULE_WINDOW`] each.
pub fn parse_schedule(doc: &Value, team_id: &str) -> Schedule {
    let mut previous = Vec::new();
    let mut upcoming = Vec::new();

    for event in array_at(doc, "events") {
        let Some(entry) = parse_event(event, team_id) else {
            continue;
        };
        if entry.completed {
            previous.push(entry);
        } else {
            upcoming.push(entry);
        }
    }

    previous.sort_by(|a, b| b.date.cmp(&a.date));
    previous.truncate(SCHEDULE_WINDOW);
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming.truncate(SCHEDULE_WINDOW);

    Schedule { previous, upcoming }
}

fn parse_event(event: &Value, team_id: &str) -> Option<ScheduleEvent> {
    let comp = array_at(event, "competitions").first()?;
    let competitors = array_at(comp, "competitors");
    let own_idx = competitors
        .iter()
        .position(|c| str_at(c, "id").as_deref() == Some(team_id))?;
    let own = &competitors[own_idx];
    let opp = competitors
        .iter()
        .enumerate()
        .find(|(idx, _)| *idx != own_idx)
        .map(|(_, c)| c);

    let status = comp
        .get("status")
        .and_then(|s| s.get("type"))
        .unwrap_or(&Value::Null);
    let completed = status
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let broadcast = array_at(comp, "notes")
        .iter()
        .find(|note| note.get("type").and_then(Value::as_str) == Some("Broadcast"))
        .and_then(|note| str_at(note, "text"));

    let links = array_at(event, "links")
        .iter()
        .filter(|link| link.get("isExternal").and_then(Value::as_bool) == Some(true))
        .cloned()
        .collect::<Vec<_>>();

    Some(ScheduleEvent {
        id: str_at(event, "id"),
        date: str_at(event, "date"),
        name: str_at(event, "name"),
        short_name: str_at(event, "shortName"),
        home: own.get("homeAway").and_then(Value::as_str) == Some("home"),
        venue: comp.get("venue").and_then(|v| str_at(v, "fullName")),
        status: str_at(status, "description"),
        completed,
        team_score: score(own.get("score")),
        opponent_score: opp.and_then(|o| score(o.get("score"))),
        broadcast,
        tickets: comp.get("tickets").filter(|t| !t.is_null()).cloned(),
        opponent: opp.map(parse_opponent),
        links: hrefs(&links),
    })
}

fn parse_opponent(competitor: &Value) -> Opponent {
    let team = competitor.get("team").unwrap_or(&Value::Null);
    let logo = str_at(team, "logo").or_else(|| {
        array_at(team, "logos")
            .first()
            .and_then(|l| l.get("href"))
            .and_then(as_string)
    });
    Opponent {
        id: str_at(competitor, "id"),
        name: str_at(team, "displayName").or_else(|| str_at(competitor, "displayName")),
        logo,
    }
}
