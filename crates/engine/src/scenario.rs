//! Scenario replay.
//!
//! A scenario is a JSON document naming games and players by local keys,
//! followed by results to report and rating values to record. Replaying it
//! against an [`App`] exercises the whole engine and produces a
//! [`ScenarioReport`] suitable for printing.
//!
//! ```json
//! {
//!   "games": [{ "key": "chess", "name": "Chess", "rules": { "max_teams": 2 } }],
//!   "players": [{ "key": "ann", "name": "Ann" }, { "key": "bo", "name": "Bo" }],
//!   "results": [{ "game": "chess", "teams": [
//!     { "rank": 1, "players": ["ann"] },
//!     { "rank": 2, "players": ["bo"] }
//!   ] }],
//!   "ratings": [{ "game": "chess", "player": "ann", "value": 1016 }]
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tally_domain::{
    Game, GameId, GameName, GameRules, Player, PlayerId, PlayerName, ResultErrors, ResultId,
    ResultSummary,
};

use crate::app::App;
use crate::entities::LedgerError;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::{ReportResultError, ResultReport, TeamReport};

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub games: Vec<GameEntry>,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
    #[serde(default)]
    pub ratings: Vec<RatingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameEntry {
    pub key: String,
    pub name: GameName,
    #[serde(default)]
    pub rules: GameRules,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    pub key: String,
    pub name: PlayerName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultEntry {
    pub game: String,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub rank: i32,
    #[serde(default)]
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingEntry {
    pub game: String,
    pub player: String,
    pub value: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate key in scenario: {0}")]
    DuplicateKey(String),
    #[error("Unknown game key: {0}")]
    UnknownGame(String),
    #[error("Unknown player key: {0}")]
    UnknownPlayer(String),
    #[error(transparent)]
    Report(#[from] ReportResultError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Outcome of one reported result, in scenario order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultOutcome {
    pub index: usize,
    pub game: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ResultSummary>,
    /// Evaluated after every result in the scenario has been reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_recent: Option<bool>,
    #[serde(skip_serializing_if = "ResultErrors::is_empty")]
    pub errors: ResultErrors,
}

/// Ledger contents for one (game, player) pair, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingHistoryReport {
    pub game: String,
    pub player: String,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub results: Vec<ResultOutcome>,
    pub rating_histories: Vec<RatingHistoryReport>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ScenarioError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&json)
    }
}

/// Key-to-id lookups built while seeding.
#[derive(Default)]
struct Keys {
    games: HashMap<String, GameId>,
    players: HashMap<String, PlayerId>,
}

impl Keys {
    fn game(&self, key: &str) -> Result<GameId, ScenarioError> {
        self.games
            .get(key)
            .copied()
            .ok_or_else(|| ScenarioError::UnknownGame(key.to_string()))
    }

    fn player(&self, key: &str) -> Result<PlayerId, ScenarioError> {
        self.players
            .get(key)
            .copied()
            .ok_or_else(|| ScenarioError::UnknownPlayer(key.to_string()))
    }
}

/// Replay `scenario` against `app`.
///
/// Rejected results are part of the report, not errors. Only structural
/// problems with the scenario itself (unknown keys, storage failures) abort.
pub async fn run(app: &App, scenario: Scenario) -> Result<ScenarioReport, ScenarioError> {
    let keys = seed(app, &scenario).await?;

    let mut outcomes = Vec::with_capacity(scenario.results.len());
    let mut accepted: Vec<(usize, ResultId)> = Vec::new();
    for (index, entry) in scenario.results.iter().enumerate() {
        let report = ResultReport {
            game_id: keys.game(&entry.game)?,
            teams: entry
                .teams
                .iter()
                .map(|team| -> Result<TeamReport, ScenarioError> {
                    Ok(TeamReport {
                        rank: team.rank,
                        player_ids: team
                            .players
                            .iter()
                            .map(|key| keys.player(key))
                            .collect::<Result<_, _>>()?,
                    })
                })
                .collect::<Result<_, _>>()?,
        };

        let mut outcome = ResultOutcome {
            index,
            game: entry.game.clone(),
            accepted: false,
            summary: None,
            most_recent: None,
            errors: ResultErrors::new(),
        };
        match app.use_cases.results.report.execute(report).await {
            Ok(result) => {
                outcome.accepted = true;
                outcome.summary = Some(result.summary());
                accepted.push((index, result.id()));
            }
            Err(ReportResultError::Invalid(errors)) => outcome.errors = errors,
            Err(other) => return Err(other.into()),
        }
        outcomes.push(outcome);
    }

    for &(index, id) in &accepted {
        outcomes[index].most_recent = app
            .use_cases
            .results
            .most_recent
            .is_most_recent_by_id(id)
            .await?;
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    for entry in &scenario.ratings {
        let (game_id, player_id) = (keys.game(&entry.game)?, keys.player(&entry.player)?);
        app.use_cases
            .ratings
            .record
            .execute(player_id, game_id, entry.value)
            .await?;
        let pair = (entry.game.clone(), entry.player.clone());
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
    }

    let mut rating_histories = Vec::with_capacity(pairs.len());
    for (game, player) in pairs {
        let events = app
            .use_cases
            .ratings
            .ledger
            .events_for(keys.player(&player)?, keys.game(&game)?)
            .await?;
        rating_histories.push(RatingHistoryReport {
            game,
            player,
            values: events.iter().map(|e| e.value).collect(),
        });
    }

    Ok(ScenarioReport {
        results: outcomes,
        rating_histories,
    })
}

async fn seed(app: &App, scenario: &Scenario) -> Result<Keys, ScenarioError> {
    let mut keys = Keys::default();
    let now = app.clock.now();

    for entry in &scenario.games {
        let game = Game::new(entry.name.clone(), entry.rules, now);
        if keys.games.insert(entry.key.clone(), game.id()).is_some() {
            return Err(ScenarioError::DuplicateKey(entry.key.clone()));
        }
        app.repositories.game.save(&game).await?;
    }

    for entry in &scenario.players {
        let player = Player::new(entry.name.clone());
        if keys.players.insert(entry.key.clone(), player.id()).is_some() {
            return Err(ScenarioError::DuplicateKey(entry.key.clone()));
        }
        app.repositories.player.save(&player).await?;
    }

    tracing::debug!(
        games = keys.games.len(),
        players = keys.players.len(),
        "Seeded scenario"
    );
    Ok(keys)
}
