use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use allsport_data::assemble::build_dataset;
use allsport_data::bundle::write_bundle;
use allsport_data::catalog::{LeagueConfig, league_by_id};
use allsport_data::endpoints::{
    league_teams_url, site_team_url, team_roster_url, team_schedule_url, team_statistics_url,
};
use allsport_data::error::TransportError;
use allsport_data::http_cache::{Fetcher, RetryPolicy};
use allsport_data::http_client::{Transport, decode_body};
use allsport_data::model::Dataset;

/// Serves scripted documents. Unscripted URLs resolve to an empty object;
/// URLs listed in `failures` fail that many times first. `bodies` holds raw
/// response text, decoded on every request.
#[derive(Default)]
struct Scripted {
    docs: HashMap<String, Value>,
    bodies: HashMap<String, String>,
    failures: RefCell<HashMap<String, u32>>,
    hits: RefCell<Vec<String>>,
}

impl Scripted {
    fn serve(&mut self, url: impl Into<String>, doc: Value) -> &mut Self {
        self.docs.insert(url.into(), doc);
        self
    }

    fn serve_raw(&mut self, url: impl Into<String>, body: &str) -> &mut Self {
        self.bodies.insert(url.into(), body.to_string());
        self
    }

    fn fail(&mut self, url: impl Into<String>, times: u32) -> &mut Self {
        self.failures.get_mut().insert(url.into(), times);
        self
    }

    fn hits_for(&self, url: &str) -> usize {
        self.hits.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Transport for Scripted {
    fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        self.hits.borrow_mut().push(url.to_string());
        if let Some(left) = self.failures.borrow_mut().get_mut(url) {
            if *left > 0 {
                *left -= 1;
                return Err(TransportError::Status { status: 503 });
            }
        }
        if let Some(body) = self.bodies.get(url) {
            return decode_body(body);
        }
        Ok(self.docs.get(url).cloned().unwrap_or_else(|| json!({})))
    }
}

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        attempts: 3,
        delay: Duration::ZERO,
    }
}

fn run_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn league(id: &str) -> LeagueConfig {
    *league_by_id(id).expect("league in catalog")
}

fn core_url(path: &str) -> String {
    format!("https://core.test/{path}")
}

fn read_fixture(name: &str) -> Value {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    serde_json::from_str(&raw).expect("fixture should be valid json")
}

/// Lists `team_ids` for the league, each pointing at `core.test/teams/<id>`.
fn list_teams(script: &mut Scripted, league: &LeagueConfig, team_ids: &[&str]) {
    let items: Vec<Value> = team_ids
        .iter()
        .map(|id| json!({"$ref": core_url(&format!("teams/{id}"))}))
        .collect();
    script.serve(league_teams_url(league), json!({"count": items.len(), "items": items}));
}

fn run(script: Scripted, leagues: &[LeagueConfig]) -> (Dataset, Scripted) {
    let mut fetcher = Fetcher::new(script, fast_policy());
    let dataset = build_dataset(&mut fetcher, leagues, run_at()).expect("build succeeds");
    (dataset, fetcher.into_transport())
}

/// Two NBA teams sharing venue 500, with division, conference, coach and
/// franchise documents for the Lakers only.
fn shared_arena_script() -> Scripted {
    let nba = league("nba");
    let mut script = Scripted::default();
    list_teams(&mut script, &nba, &["13", "12"]);
    script
        .serve(
            core_url("teams/13"),
            json!({
                "id": "13",
                "slug": "los-angeles-lakers",
                "displayName": "Los Angeles Lakers",
                "shortDisplayName": "Lakers",
                "abbreviation": "LAL",
                "color": "552583",
                "alternateColor": "fdb927",
                "logos": [{"href": "https://a.espncdn.com/i/teamlogos/nba/500/lal.png"}],
                "venue": {"$ref": core_url("venues/500")},
                "groups": {"$ref": core_url("groups/pacific")},
                "coaches": {"$ref": core_url("teams/13/coaches")},
                "franchise": {"$ref": core_url("franchises/13")}
            }),
        )
        .serve(
            core_url("teams/12"),
            json!({
                "id": "12",
                "slug": "la-clippers",
                "displayName": "LA Clippers",
                "venue": {"$ref": core_url("venues/500")},
                "groups": {"$ref": core_url("groups/pacific")}
            }),
        )
        .serve(
            core_url("venues/500"),
            json!({
                "id": "500",
                "fullName": "Shared Arena",
                "capacity": 19068,
                "grass": false,
                "address": {"address1": "1111 S Figueroa St", "city": "Los Angeles", "state": "CA"}
            }),
        )
        .serve(
            core_url("groups/pacific"),
            json!({"name": "Pacific", "parent": {"$ref": core_url("groups/west")}}),
        )
        .serve(core_url("groups/west"), json!({"name": "Western Conference"}))
        .serve(
            core_url("teams/13/coaches"),
            json!({"items": [{"$ref": core_url("coaches/1")}, {"$ref": core_url("coaches/2")}]}),
        )
        .serve(
            core_url("coaches/1"),
            json!({"type": {"name": "Assistant Coach"}, "coach": {"displayName": "Nate McMillan"}}),
        )
        .serve(
            core_url("coaches/2"),
            json!({"type": {"abbreviation": "HC"}, "coach": {"fullName": "JJ Redick"}}),
        )
        .serve(
            core_url("franchises/13"),
            json!({"yearFounded": 1947, "championships": {"total": 17}}),
        )
        .serve(
            site_team_url(&nba, "13"),
            json!({"team": {
                "record": {"items": [{"summary": "47-35"}]},
                "standingSummary": "7th in Western Conference"
            }}),
        )
        .serve(team_statistics_url(&nba, "13"), read_fixture("team_statistics.json"))
        .serve(team_schedule_url(&nba, "13"), read_fixture("team_schedule.json"))
        .serve(team_roster_url(&nba, "13"), read_fixture("team_roster.json"));
    script
}

#[test]
fn shared_venue_yields_one_stadium_with_both_teams() {
    let (dataset, script) = run(shared_arena_script(), &[league("nba")]);

    assert_eq!(dataset.stadiums.len(), 1);
    let arena = &dataset.stadiums[0];
    assert_eq!(arena.id, "stadium-500");
    assert_eq!(arena.venue_id.as_deref(), Some("500"));
    assert_eq!(arena.capacity, Some(19068));
    assert_eq!(arena.address, "1111 S Figueroa St, Los Angeles, CA");
    let members: Vec<_> = arena.teams.iter().map(|t| t.team_id.as_str()).collect();
    assert_eq!(members, vec!["nba-los-angeles-lakers", "nba-la-clippers"]);

    let teams = &dataset.leagues[0].teams;
    assert!(teams.iter().all(|t| t.stadium_id.as_deref() == Some("stadium-500")));
    assert_eq!(script.hits_for(&core_url("venues/500")), 1);
    assert_eq!(script.hits_for(&core_url("groups/west")), 1);
}

#[test]
fn team_fields_follow_linked_documents() {
    let (dataset, _) = run(shared_arena_script(), &[league("nba")]);
    let league = &dataset.leagues[0];
    assert_eq!(league.id, "nba");
    assert_eq!(league.sport, "basketball");
    assert_eq!(league.stat_selectors.len(), 5);
    assert_eq!(league.stat_selectors[3].field, "threePointPct");
    assert_eq!(league.feature_sections[0], "Pace & Space");

    let lakers = &league.teams[0];
    assert_eq!(lakers.id, "nba-los-angeles-lakers");
    assert_eq!(lakers.source_id, "13");
    assert_eq!(lakers.colors.primary.as_deref(), Some("#552583"));
    assert_eq!(lakers.colors.secondary.as_deref(), Some("#fdb927"));
    assert_eq!(lakers.conference.as_deref(), Some("Western Conference"));
    assert_eq!(lakers.division.as_deref(), Some("Pacific"));
    assert_eq!(lakers.coach.as_deref(), Some("JJ Redick"));
    assert_eq!(lakers.founded, Some(1947));
    assert_eq!(lakers.championships, Some(17));
    assert_eq!(lakers.record.as_deref(), Some("47-35"));
    assert_eq!(lakers.standing_summary.as_deref(), Some("7th in Western Conference"));
    assert_eq!(lakers.stats[0].value, "117.2");
    assert_eq!(lakers.schedule.previous.len(), 2);
    assert_eq!(lakers.roster.len(), 6);
    assert_eq!(lakers.feature_sections.len(), 3);
}

#[test]
fn sparse_team_gets_nulls_and_league_defaults() {
    let (dataset, _) = run(shared_arena_script(), &[league("nba")]);
    let clippers = &dataset.leagues[0].teams[1];

    assert_eq!(clippers.colors.primary, None);
    assert_eq!(clippers.colors.secondary, None);
    assert!(clippers.logos.is_empty());
    assert_eq!(clippers.coach, None);
    assert_eq!(clippers.record, None);
    assert_eq!(clippers.championships, None);
    assert_eq!(clippers.founded, Some(1946));
    assert_eq!(clippers.conference.as_deref(), Some("Western Conference"));

    let nba = league("nba");
    assert_eq!(clippers.stats.len(), nba.stat_selectors.len());
    assert!(clippers.stats.iter().all(|s| s.value == "-"));
    assert!(clippers.schedule.previous.is_empty());
    assert!(clippers.roster.is_empty());
}

#[test]
fn curated_player_receives_override() {
    let (dataset, _) = run(shared_arena_script(), &[league("nba")]);
    assert_eq!(dataset.players.len(), 6);

    let lebron = dataset.players.get("1966").expect("lebron indexed");
    assert_eq!(
        lebron.tagline.as_deref(),
        Some("Four-time NBA Champion & MVP rewriting longevity records.")
    );
    let featured = lebron.featured_stats.as_ref().expect("featured stats");
    assert_eq!(featured.get("PPG").and_then(Value::as_f64), Some(25.7));
    let order: Vec<_> = featured.keys().map(String::as_str).collect();
    assert_eq!(order, vec!["PPG", "RPG", "APG", "FG%"]);
    assert_eq!(lebron.team.id, "nba-los-angeles-lakers");
    assert_eq!(lebron.team.league_id, "nba");

    let reaves = dataset.players.get("4066648").expect("reaves indexed");
    assert_eq!(reaves.tagline, None);
    assert_eq!(reaves.bio.college.as_deref(), Some("Oklahoma"));
}

#[test]
fn head_coach_without_name_falls_through_to_next_entry() {
    let nhl = league("nhl");
    let mut script = Scripted::default();
    list_teams(&mut script, &nhl, &["26"]);
    script
        .serve(
            core_url("teams/26"),
            json!({"id": "26", "coaches": {"$ref": core_url("teams/26/coaches")}}),
        )
        .serve(
            core_url("teams/26/coaches"),
            json!({"items": [{"$ref": core_url("coaches/7")}, {"$ref": core_url("coaches/8")}]}),
        )
        .serve(
            core_url("coaches/7"),
            json!({"type": {"name": "Head Coach"}, "coach": {}}),
        )
        .serve(
            core_url("coaches/8"),
            json!({"type": {"abbreviation": "HC"}, "coach": {"displayName": "Jim Hiller"}}),
        );

    let (dataset, _) = run(script, &[nhl]);
    assert_eq!(dataset.leagues[0].teams[0].coach.as_deref(), Some("Jim Hiller"));
}

#[test]
fn missing_stat_category_reads_placeholder() {
    let nfl = league("nfl");
    let mut script = Scripted::default();
    list_teams(&mut script, &nfl, &["12"]);
    script
        .serve(core_url("teams/12"), json!({"id": "12", "slug": "kansas-city-chiefs"}))
        .serve(
            team_statistics_url(&nfl, "12"),
            json!({"results": {"stats": {"categories": [
                {"name": "scoring", "stats": [
                    {"name": "totalPointsPerGame", "displayValue": "27.4"}
                ]}
            ]}}}),
        );

    let (dataset, _) = run(script, &[nfl]);
    let chiefs = &dataset.leagues[0].teams[0];
    assert_eq!(chiefs.stats.len(), nfl.stat_selectors.len());
    assert_eq!(chiefs.stats[0].value, "27.4");
    assert_eq!(chiefs.stats[1].category, "passing");
    assert_eq!(chiefs.stats[1].value, "-");
}

#[test]
fn entry_without_id_is_skipped() {
    let nhl = league("nhl");
    let mut script = Scripted::default();
    list_teams(&mut script, &nhl, &["ghost", "26"]);
    script
        .serve(core_url("teams/ghost"), json!({"name": "Unknown"}))
        .serve(core_url("teams/26"), json!({"id": 26, "displayName": "Los Angeles Kings"}));

    let (dataset, _) = run(script, &[nhl]);
    let teams = &dataset.leagues[0].teams;
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, "nhl-26");
    assert_eq!(teams[0].stadium_id, None);
}

#[test]
fn transient_failures_are_retried() {
    let mlb = league("mlb");
    let listing = league_teams_url(&mlb);
    let mut script = Scripted::default();
    list_teams(&mut script, &mlb, &[]);
    script.fail(listing.clone(), 2);

    let (dataset, script) = run(script, &[mlb]);
    assert!(dataset.leagues[0].teams.is_empty());
    assert_eq!(script.hits_for(&listing), 3);
}

#[test]
fn exhausted_retries_abort_the_build() {
    let nba = league("nba");
    let stats_url = team_statistics_url(&nba, "13");
    let mut script = shared_arena_script();
    script.fail(stats_url.clone(), 5);

    let mut fetcher = Fetcher::new(script, fast_policy());
    let err = build_dataset(&mut fetcher, &[nba], run_at()).expect_err("build aborts");
    assert_eq!(err.url, stats_url);
    assert_eq!(err.attempts, 3);
    assert!(err.to_string().contains(&stats_url));
    assert_eq!(fetcher.transport().hits_for(&stats_url), 3);
}

#[test]
fn empty_body_is_retried_then_aborts() {
    let nfl = league("nfl");
    let listing = league_teams_url(&nfl);
    let mut script = Scripted::default();
    script.serve_raw(listing.clone(), "");

    let mut fetcher = Fetcher::new(script, fast_policy());
    let err = build_dataset(&mut fetcher, &[nfl], run_at()).expect_err("build aborts");
    assert_eq!(err.url, listing);
    assert_eq!(err.attempts, 3);
    assert!(matches!(err.source, TransportError::Decode(_)));
    assert_eq!(fetcher.transport().hits_for(&listing), 3);
    assert_eq!(fetcher.cached_urls(), 0);
}

#[test]
fn malformed_team_document_aborts_with_its_url() {
    let nba = league("nba");
    let mut script = shared_arena_script();
    script.serve_raw(core_url("teams/12"), r#"{"id": "12", "slug": "#);

    let mut fetcher = Fetcher::new(script, fast_policy());
    let err = build_dataset(&mut fetcher, &[nba], run_at()).expect_err("build aborts");
    assert_eq!(err.url, core_url("teams/12"));
    assert!(err.to_string().contains("invalid json"));
    assert_eq!(fetcher.transport().hits_for(&core_url("teams/12")), 3);
}

#[test]
fn generated_at_is_utc_seconds() {
    let (dataset, _) = run(Scripted::default(), &[league("nhl")]);
    assert_eq!(dataset.generated_at, "2024-10-15T12:00:00Z");
    assert_eq!(dataset.leagues.len(), 1);
    assert!(dataset.leagues[0].teams.is_empty());
}

#[test]
fn written_bundle_embeds_the_dataset() {
    let (dataset, _) = run(shared_arena_script(), &[league("nba")]);
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sports-data.js");
    write_bundle(&dataset, &path).expect("write bundle");

    let text = fs::read_to_string(&path).expect("read bundle");
    let start = text.find("const SPORTS_DATA = ").expect("constant") + "const SPORTS_DATA = ".len();
    let end = text.find(";\nif (typeof window").expect("window guard");
    let parsed: Dataset = serde_json::from_str(&text[start..end]).expect("embedded json");
    assert_eq!(parsed, dataset);
    assert!(text.contains("\"stadium-500\""));
    let ppg = text.find("\"PPG\": 25.7").expect("PPG in bundle");
    let fg = text.find("\"FG%\": 0.54").expect("FG% in bundle");
    assert!(ppg < fg);
}
