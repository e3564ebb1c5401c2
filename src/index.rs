//! Run-scoped deduplication of stadiums and players.
//!
//! The indices are plain maps mutated in place as teams are visited, one at a
//! time. They are passed explicitly through the pipeline and handed to the
//! dataset once every league is done.

use std::collections::{BTreeMap, HashMap};

use crate::model::{Player, PlayerBio, PlayerTeam, RosterPlayer, Stadium, StadiumTeam};
use crate::overrides::{player_override, stadium_override};

pub fn stadium_id(venue_id: &str) -> String {
    format!("stadium-{venue_id}")
}

/// Stadiums keyed by synthesized id, kept in first-seen order.
#[derive(Debug, Default)]
pub struct StadiumIndex {
    order: Vec<Stadium>,
    positions: HashMap<String, usize>,
}

impl StadiumIndex {
    /// Registers `team` at the stadium, creating the stadium from `build` on
    /// first sight, then re-applies the curated override.
    pub fn attach(
        &mut self,
        id: &str,
        team: StadiumTeam,
        build: impl FnOnce() -> Stadium,
    ) -> &Stadium {
        let pos = match self.positions.get(id) {
            Some(pos) => *pos,
            None => {
                let mut stadium = build();
                stadium.id = id.to_string();
                stadium.teams.clear();
                self.order.push(stadium);
                let pos = self.order.len() - 1;
                self.positions.insert(id.to_string(), pos);
                pos
            }
        };

        let stadium = &mut self.order[pos];
        stadium.teams.push(team);
        if let Some(patch) = stadium_override(id) {
            patch.apply(stadium);
        }
        stadium
    }

    pub fn get(&self, id: &str) -> Option<&Stadium> {
        self.positions.get(id).map(|pos| &self.order[*pos])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_stadiums(self) -> Vec<Stadium> {
        self.order
    }
}

/// Global player records keyed by upstream player id.
#[derive(Debug, Default)]
pub struct PlayerIndex {
    players: BTreeMap<String, Player>,
}

impl PlayerIndex {
    /// Creates the record on first sight; an already-indexed player keeps its
    /// original team. The override is re-applied either way.
    pub fn enrich(&mut self, entry: &RosterPlayer, team: &PlayerTeam) -> Option<&Player> {
        let id = entry.player_id.as_deref()?;
        let record = self
            .players
            .entry(id.to_string())
            .or_insert_with(|| new_player(id, entry, team));
        if let Some(patch) = player_override(id) {
            patch.apply(record);
        }
        Some(&*record)
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn into_players(self) -> BTreeMap<String, Player> {
        self.players
    }
}

fn new_player(id: &str, entry: &RosterPlayer, team: &PlayerTeam) -> Player {
    Player {
        id: id.to_string(),
        full_name: entry.full_name.clone(),
        headshot: entry.headshot.clone(),
        position: entry.position.clone(),
        team: team.clone(),
        bio: PlayerBio {
            height: entry.height.clone(),
            weight: entry.weight.clone(),
            age: entry.age,
            experience: entry.experience,
            college: entry.college.clone(),
            country: entry.country.clone(),
            ..PlayerBio::default()
        },
        links: entry.links.clone(),
        tagline: None,
        featured_stats: None,
        notables: None,
        career_timeline: None,
    }
}

/// Both indices, threaded through every normalization call of a run.
#[derive(Debug, Default)]
pub struct EntityIndex {
    pub stadiums: StadiumIndex,
    pub players: PlayerIndex,
}
