//! Output object graph: leagues own teams; players and stadiums live in indices
//! and are referenced from teams by id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const MISSING_STAT: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// UTC, `%Y-%m-%dT%H:%M:%SZ`.
    pub generated_at: String,
    pub leagues: Vec<League>,
    pub players: BTreeMap<String, Player>,
    pub stadiums: Vec<Stadium>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: String,
    pub sport: String,
    pub league: String,
    pub name: String,
    pub short_name: String,
    pub icon: String,
    pub founded: Option<u16>,
    pub stat_selectors: Vec<SelectorInfo>,
    pub feature_sections: Vec<String>,
    pub teams: Vec<Team>,
}

/// Catalog selector as published alongside the league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorInfo {
    pub category: String,
    pub field: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// `<league id>-<slug or source id>`.
    pub id: String,
    pub source_id: String,
    pub league_id: String,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub nickname: Option<String>,
    pub location: Option<String>,
    pub abbreviation: Option<String>,
    pub colors: TeamColors,
    pub logos: Vec<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub record: Option<String>,
    pub standing_summary: Option<String>,
    pub coach: Option<String>,
    pub stadium_id: Option<String>,
    pub founded: Option<u16>,
    pub championships: Option<u32>,
    pub stats: Vec<StatEntry>,
    pub schedule: Schedule,
    pub roster: Vec<RosterPlayer>,
    pub feature_sections: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub label: String,
    pub category: String,
    pub field: String,
    /// Upstream display value, or [`MISSING_STAT`].
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Completed events, newest first.
    pub previous: Vec<ScheduleEvent>,
    /// Not-yet-completed events, soonest first.
    pub upcoming: Vec<ScheduleEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: Option<String>,
    pub date: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub home: bool,
    pub venue: Option<String>,
    pub status: Option<String>,
    pub completed: bool,
    pub team_score: Option<String>,
    pub opponent_score: Option<String>,
    pub broadcast: Option<String>,
    pub tickets: Option<Value>,
    pub opponent: Option<Opponent>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub logo: Option<String>,
}

/// Per-team roster line. Not the same object as the global [`Player`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub player_id: Option<String>,
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub abbreviation: Option<String>,
    pub jersey: Option<String>,
    pub age: Option<u32>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub experience: Option<u32>,
    pub status: Option<String>,
    pub headshot: Option<String>,
    pub college: Option<String>,
    pub country: Option<String>,
    pub birth_place: BirthPlace,
    pub links: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthPlace {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Global, deduplicated player record keyed by upstream player id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub full_name: Option<String>,
    pub headshot: Option<String>,
    pub position: Option<String>,
    pub team: PlayerTeam,
    pub bio: PlayerBio,
    pub links: Vec<Value>,
    pub tagline: Option<String>,
    /// Curated snapshot in authored key order.
    pub featured_stats: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notables: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_timeline: Option<Vec<TimelineEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTeam {
    pub id: String,
    pub name: Option<String>,
    pub league_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBio {
    pub height: Option<String>,
    pub weight: Option<String>,
    pub age: Option<u32>,
    pub experience: Option<u32>,
    pub college: Option<String>,
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub born: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: u16,
    pub event: String,
}

/// Deduplicated venue keyed by `stadium-<upstream venue id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    pub id: String,
    pub venue_id: Option<String>,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub capacity: Option<u32>,
    pub surface: Option<String>,
    pub roof_type: Option<String>,
    pub location: Option<String>,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub images: Vec<String>,
    pub teams: Vec<StadiumTeam>,
    pub description: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub architecture: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StadiumTeam {
    pub team_id: String,
    pub league_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub detail: String,
}
