use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use allsport_data::catalog::league_by_id;
use allsport_data::roster::parse_roster;
use allsport_data::schedule::parse_schedule;
use allsport_data::stats::project_stats;

fn read_fixture(name: &str) -> Value {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    serde_json::from_str(&raw).expect("fixture should be valid json")
}

#[test]
fn projects_nba_statistics_fixture() {
    let doc = read_fixture("team_statistics.json");
    let stats = &doc["results"]["stats"];
    let nba = league_by_id("nba").expect("nba in catalog");
    let bundle = project_stats(stats, nba.stat_selectors);

    let values: Vec<_> = bundle.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["117.2", "28.3", "43.6", "37.7", "-"]);
    assert_eq!(bundle[3].label, "3PT%");
    assert_eq!(bundle[4].category, "defensive");
}

#[test]
fn parses_roster_fixture_in_position_jersey_order() {
    let doc = read_fixture("team_roster.json");
    let roster = parse_roster(&doc, 18);
    let ids: Vec<_> = roster
        .iter()
        .map(|p| p.player_id.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(
        ids,
        vec!["6583", "3136776", "3917376", "3907387", "4066648", "1966"]
    );
    let lebron = roster.last().expect("lebron");
    assert_eq!(lebron.abbreviation.as_deref(), Some("SF"));
    assert_eq!(lebron.experience, Some(21));
}

#[test]
fn roster_fixture_respects_limit() {
    let doc = read_fixture("team_roster.json");
    let roster = parse_roster(&doc, 4);
    assert_eq!(roster.len(), 4);
    assert_eq!(roster[3].player_id.as_deref(), Some("3907387"));
}

#[test]
fn parses_schedule_fixture() {
    let doc = read_fixture("team_schedule.json");
    let schedule = parse_schedule(&doc, "13");

    assert_eq!(schedule.previous.len(), 2);
    assert_eq!(schedule.upcoming.len(), 1);
    assert_eq!(schedule.previous[0].id.as_deref(), Some("401656375"));
    assert!(!schedule.previous[0].home);
    assert_eq!(schedule.previous[0].team_score.as_deref(), Some("105"));
    assert_eq!(schedule.previous[0].opponent_score.as_deref(), Some("109"));
    assert_eq!(
        schedule.previous[0]
            .opponent
            .as_ref()
            .and_then(|o| o.logo.as_deref()),
        Some("https://a.espncdn.com/i/teamlogos/nba/500/phx.png")
    );
    assert_eq!(schedule.previous[1].broadcast.as_deref(), Some("TNT"));
    assert_eq!(
        schedule.previous[1].links,
        vec!["https://www.ticketmaster.test/event/1".to_string()]
    );

    let next = &schedule.upcoming[0];
    assert!(!next.completed);
    assert_eq!(next.team_score, None);
    assert_eq!(next.broadcast.as_deref(), Some("Spectrum SportsNet"));
}

#[test]
fn schedule_for_unlisted_team_is_empty() {
    let doc = read_fixture("team_schedule.json");
    let schedule = parse_schedule(&doc, "999");
    assert!(schedule.previous.is_empty());
    assert!(schedule.upcoming.is_empty());
}
