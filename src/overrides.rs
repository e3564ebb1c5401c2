//! Curated patches for star players and featured stadiums.
//!
//! Player overrides replace every key they carry wholesale (`featured_stats` and
//! `bio` included, no per-entry merge). Stadium overrides only replace a field
//! when the override value is non-empty.

use serde_json::{Map, Value};

use crate::model::{HistoryEntry, Player, PlayerBio, Stadium, TimelineEntry};

use self::StatValue::{Float, Int};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerOverride {
    pub tagline: Option<&'static str>,
    pub notables: Option<&'static [&'static str]>,
    pub career_timeline: Option<&'static [(u16, &'static str)]>,
    /// Emitted in table order.
    pub featured_stats: Option<&'static [(&'static str, StatValue)]>,
    pub bio: Option<BioOverride>,
}

/// Snapshot figure; counts stay integers in the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Int(i64),
    Float(f64),
}

impl StatValue {
    pub fn to_value(self) -> Value {
        match self {
            Int(n) => Value::from(n),
            Float(f) => Value::from(f),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BioOverride {
    pub height: &'static str,
    pub weight: &'static str,
    pub born: &'static str,
    pub nationality: &'static str,
    pub draft: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StadiumOverride {
    pub description: Option<&'static str>,
    pub history: &'static [(&'static str, &'static str)],
    pub architecture: &'static [&'static str],
    pub images: &'static [&'static str],
}

pub static PLAYER_OVERRIDES: &[(&str, PlayerOverride)] = &[
    (
        "1966",
        PlayerOverride {
            tagline: Some("Four-time NBA Champion & MVP rewriting longevity records."),
            notables: Some(&["19x All-Star", "4x Finals MVP", "NBA All-Time Scoring Leader"]),
            career_timeline: Some(&[
                (2004, "NBA Rookie of the Year"),
                (2012, "First NBA Championship with the Miami Heat"),
                (2016, "Delivers Cleveland Cavaliers their first title"),
                (2020, "Wins championship and Finals MVP with the Lakers"),
            ]),
            featured_stats: Some(&[
                ("PPG", Float(25.7)),
                ("RPG", Float(7.3)),
                ("APG", Float(8.3)),
                ("FG%", Float(0.540)),
            ]),
            bio: Some(BioOverride {
                height: "6'9\" (206 cm)",
                weight: "250 lbs (113 kg)",
                born: "Dec 30, 1984 (39 years)",
                nationality: "American",
                draft: "2003, Round 1, Pick 1",
            }),
        },
    ),
    (
        "3975",
        PlayerOverride {
            tagline: Some("Greatest shooter ever, redefining spacing and pace."),
            notables: Some(&["4x NBA Champion", "2x MVP", "NBA record 3-pointers"]),
            career_timeline: None,
            featured_stats: Some(&[
                ("PPG", Float(26.4)),
                ("APG", Float(5.1)),
                ("3P%", Float(0.421)),
            ]),
            bio: None,
        },
    ),
    (
        "14881",
        PlayerOverride {
            tagline: Some("Back-to-back Super Bowl champion with video-game numbers."),
            notables: Some(&["2x NFL MVP", "3x Super Bowl Champion", "3x Super Bowl MVP"]),
            career_timeline: None,
            featured_stats: Some(&[
                ("PassYds", Int(4560)),
                ("PassTD", Int(35)),
                ("QBR", Float(73.6)),
            ]),
            bio: None,
        },
    ),
    (
        "34886",
        PlayerOverride {
            tagline: Some("Two-way sensation reshaping modern baseball."),
            notables: Some(&[
                "2021 & 2023 AL MVP",
                "First player to qualify as pitcher and hitter in same season",
            ]),
            career_timeline: None,
            featured_stats: Some(&[
                ("AVG", Float(0.312)),
                ("HR", Int(44)),
                ("OPS", Float(1.066)),
                ("ERA", Float(3.14)),
            ]),
            bio: None,
        },
    ),
    (
        "3990",
        PlayerOverride {
            tagline: Some("Generational talent with unmatched acceleration and edge control."),
            notables: Some(&["3x Hart Trophy", "5x Art Ross Trophy"]),
            career_timeline: None,
            featured_stats: Some(&[("PTS", Int(132)), ("G", Int(44)), ("A", Int(88))]),
            bio: None,
        },
    ),
    (
        "1627759",
        PlayerOverride {
            tagline: Some("Do-it-all center powering the Nuggets' motion offense."),
            notables: None,
            career_timeline: None,
            featured_stats: Some(&[
                ("PPG", Float(26.8)),
                ("RPG", Float(12.4)),
                ("APG", Float(9.0)),
            ]),
            bio: None,
        },
    ),
    (
        "6478",
        PlayerOverride {
            tagline: Some("Towering slugger with transcendent power and leadership."),
            notables: None,
            career_timeline: None,
            featured_stats: Some(&[("AVG", Float(0.293)), ("HR", Int(62)), ("RBI", Int(131))]),
            bio: None,
        },
    ),
    (
        "178960",
        PlayerOverride {
            tagline: Some("Elite goal-scorer with a lethal release."),
            notables: None,
            career_timeline: None,
            featured_stats: Some(&[("G", Int(69)), ("PTS", Int(107))]),
            bio: None,
        },
    ),
];

const fn blurb(description: &'static str) -> StadiumOverride {
    StadiumOverride {
        description: Some(description),
        history: &[],
        architecture: &[],
        images: &[],
    }
}

pub static STADIUM_OVERRIDES: &[(&str, StadiumOverride)] = &[
    (
        "stadium-4019",
        StadiumOverride {
            description: Some(
                "SoFi Stadium is the NFL's first indoor-outdoor venue with a translucent roof and a stunning Infinity Screen hanging over the field.",
            ),
            history: &[
                (
                    "Groundbreaking",
                    "Construction began in 2016 as part of a 298-acre mixed-use development.",
                ),
                ("Opening", "Opened in 2020 for the Los Angeles Rams and Chargers."),
                ("Super Bowl LVI", "Hosted Super Bowl LVI in February 2022."),
            ],
            architecture: &[
                "Designed by HKS with sweeping canopies and a climate-friendly ETFE roof.",
                "Features the 360-degree double-sided Infinity Screen by Samsung.",
                "Seismic base isolation protects the structure from earthquakes.",
            ],
            images: &[
                "https://images.unsplash.com/photo-1602016667925-18be89a9736a?auto=format&fit=crop&w=1600&q=80",
                "https://images.unsplash.com/photo-1602006702246-054c27cfe20f?auto=format&fit=crop&w=1600&q=80",
            ],
        },
    ),
    (
        "stadium-336",
        StadiumOverride {
            description: Some(
                "Madison Square Garden is the world's most famous arena, home to iconic moments in basketball, hockey, boxing, and music.",
            ),
            history: &[
                ("Opened", "Debuted in 1968 atop Pennsylvania Station in Midtown Manhattan."),
                ("Renovations", "Completed a $1B top-to-bottom transformation in 2013."),
            ],
            architecture: &[
                "Circular bowl design with sky bridges overlooking the floor.",
                "Signature LED ceiling and IPTV system for immersive experiences.",
            ],
            images: &[
                "https://images.unsplash.com/photo-1469474968028-56623f02e42e?auto=format&fit=crop&w=1600&q=80",
            ],
        },
    ),
    (
        "stadium-3",
        StadiumOverride {
            description: Some(
                "Fenway Park is MLB's oldest ballpark, famous for the Green Monster and intimate sightlines.",
            ),
            history: &[
                ("Opened", "The Boston Red Sox christened Fenway Park in 1912."),
                (
                    "Renovations",
                    "A series of restorations preserved the park's charm while adding modern amenities.",
                ),
            ],
            architecture: &[
                "Quirky dimensions including the 37-foot Green Monster in left field.",
                "Manual scoreboard operated from inside the wall.",
            ],
            images: &[
                "https://images.unsplash.com/photo-1508098682722-e99c43a406b2?auto=format&fit=crop&w=1600&q=80",
            ],
        },
    ),
    (
        "stadium-21",
        StadiumOverride {
            description: Some(
                "Lambeau Field blends historic charm with modern amenities and is revered for the 'Frozen Tundra'.",
            ),
            history: &[
                ("Opened", "The Packers debuted at then-City Stadium in 1957."),
                ("Renamed", "Renamed Lambeau Field in 1965 to honor founder Curly Lambeau."),
            ],
            architecture: &[
                "A bowl design with seating expansions now beyond 80,000.",
                "Titletown District adds restaurants, sledding hill, and skating trail.",
            ],
            images: &[
                "https://images.unsplash.com/photo-1559060014-7d61e27f27c7?auto=format&fit=crop&w=1600&q=80",
            ],
        },
    ),
    (
        "stadium-388",
        StadiumOverride {
            description: Some(
                "Chase Center anchors San Francisco's Mission Bay with cutting-edge LED displays and fan concourses overlooking the bay.",
            ),
            history: &[],
            architecture: &[],
            images: &[
                "https://images.unsplash.com/photo-1587089879241-7d6f1afad79e?auto=format&fit=crop&w=1600&q=80",
            ],
        },
    ),
    (
        "stadium-5",
        StadiumOverride {
            description: Some(
                "Yankee Stadium honors its Bronx legacy with Monument Park and expansive concourses.",
            ),
            history: &[],
            architecture: &[],
            images: &[
                "https://images.unsplash.com/photo-1507842217343-583bb7270b66?auto=format&fit=crop&w=1600&q=80",
            ],
        },
    ),
    (
        "stadium-25",
        blurb(
            "Dodger Stadium offers sweeping views of downtown L.A. and mountains, pairing mid-century design with modern plazas.",
        ),
    ),
    (
        "stadium-4009",
        blurb(
            "T-Mobile Arena delivers a party atmosphere on the Vegas Strip with dazzling pregame shows for the Golden Knights.",
        ),
    ),
    (
        "stadium-61",
        blurb(
            "United Center is the largest arena in the U.S., known for the Bulls and Blackhawks championship eras.",
        ),
    ),
    (
        "stadium-28",
        blurb(
            "AT&T Stadium pairs a colossal video board with art installations and a retractable roof.",
        ),
    ),
    (
        "stadium-3602",
        blurb(
            "Climate Pledge Arena is the world's first net zero certified arena with an iconic sloped roof.",
        ),
    ),
    (
        "stadium-3780",
        blurb(
            "Euro-style Ball Arena in Denver hosts the Nuggets and Avalanche with versatile lighting and acoustics.",
        ),
    ),
    (
        "stadium-110",
        blurb(
            "PNC Park boasts postcard views of Pittsburgh's skyline and Roberto Clemente Bridge.",
        ),
    ),
    (
        "stadium-31",
        blurb(
            "Wrigley Field is famed for ivy-covered walls, rooftop seating, and seventh-inning traditions.",
        ),
    ),
];

pub fn player_override(player_id: &str) -> Option<&'static PlayerOverride> {
    PLAYER_OVERRIDES
        .iter()
        .find(|(id, _)| *id == player_id)
        .map(|(_, o)| o)
}

pub fn stadium_override(stadium_id: &str) -> Option<&'static StadiumOverride> {
    STADIUM_OVERRIDES
        .iter()
        .find(|(id, _)| *id == stadium_id)
        .map(|(_, o)| o)
}

impl PlayerOverride {
    /// Replaces every key this override carries; keys it omits are untouched.
    pub fn apply(&self, player: &mut Player) {
        if let Some(tagline) = self.tagline {
            player.tagline = Some(tagline.to_string());
        }
        if let Some(notables) = self.notables {
            player.notables = Some(notables.iter().map(|s| s.to_string()).collect());
        }
        if let Some(timeline) = self.career_timeline {
            player.career_timeline = Some(
                timeline
                    .iter()
                    .map(|(year, event)| TimelineEntry {
                        year: *year,
                        event: event.to_string(),
                    })
                    .collect(),
            );
        }
        if let Some(stats) = self.featured_stats {
            player.featured_stats = Some(
                stats
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_value()))
                    .collect::<Map<_, _>>(),
            );
        }
        if let Some(bio) = self.bio {
            player.bio = PlayerBio {
                height: Some(bio.height.to_string()),
                weight: Some(bio.weight.to_string()),
                born: Some(bio.born.to_string()),
                nationality: Some(bio.nationality.to_string()),
                draft: Some(bio.draft.to_string()),
                ..PlayerBio::default()
            };
        }
    }
}

impl StadiumOverride {
    /// Replaces only the fields whose override value is non-empty.
    pub fn apply(&self, stadium: &mut Stadium) {
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            stadium.description = Some(description.to_string());
        }
        if !self.history.is_empty() {
            stadium.history = self
                .history
                .iter()
                .map(|(title, detail)| HistoryEntry {
                    title: title.to_string(),
                    detail: detail.to_string(),
                })
                .collect();
        }
        if !self.architecture.is_empty() {
            stadium.architecture = self.architecture.iter().map(|s| s.to_string()).collect();
        }
        if !self.images.is_empty() {
            stadium.images = self.images.iter().map(|s| s.to_string()).collect();
        }
    }
}
