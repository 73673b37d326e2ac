//! Report a game result.

use std::sync::Arc;

use tally_domain::{GameId, GameResult, Player, PlayerId, ResultErrors};

use crate::entities::Results;
use crate::infrastructure::ports::{ClockPort, GameRepo, PlayerRepo, RepoError};

/// One team as submitted by a reporter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct TeamReport {
    pub rank: i32,
    pub player_ids: Vec<PlayerId>,
}

/// A submitted outcome, before it is built into a [`GameResult`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ResultReport {
    pub game_id: GameId,
    pub teams: Vec<TeamReport>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportResultError {
    #[error("Game not found: {0}")]
    GameNotFound(GameId),
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
    #[error("Result rejected: {0}")]
    Invalid(ResultErrors),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Build, validate, and persist a result.
///
/// On success the owning game is touched so its `updated_at` reflects the new
/// result. A rejected result is never persisted and leaves the game alone.
pub struct ReportResult {
    games: Arc<dyn GameRepo>,
    players: Arc<dyn PlayerRepo>,
    results: Arc<Results>,
    clock: Arc<dyn ClockPort>,
}

impl ReportResult {
    pub fn new(
        games: Arc<dyn GameRepo>,
        players: Arc<dyn PlayerRepo>,
        results: Arc<Results>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            games,
            players,
            results,
            clock,
        }
    }

    pub async fn execute(&self, report: ResultReport) -> Result<GameResult, ReportResultError> {
        let game = self
            .games
            .get(report.game_id)
            .await?
            .ok_or(ReportResultError::GameNotFound(report.game_id))?;

        let now = self.clock.now();
        let mut result = GameResult::new(game.id(), now);
        for team in &report.teams {
            let players = self.load_players(&team.player_ids).await?;
            result.build_team(team.rank, players);
        }

        let errors = result.validate(game.rules());
        if !errors.is_empty() {
            tracing::warn!(
                game_id = %game.id(),
                failures = %errors,
                "Rejected result"
            );
            return Err(ReportResultError::Invalid(errors));
        }

        self.results.save(&result).await?;
        // `game` may be stale by now; touch the stored copy.
        if let Some(mut current) = self.games.get(game.id()).await? {
            current.touch(now);
            self.games.save(&current).await?;
        }

        tracing::info!(
            result_id = %result.id(),
            game_id = %game.id(),
            teams = result.teams().len(),
            "Recorded result"
        );
        Ok(result)
    }

    async fn load_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>, ReportResultError> {
        let mut players = Vec::with_capacity(ids.len());
        for &id in ids {
            let player = self
                .players
                .get(id)
                .await?
                .ok_or(ReportResultError::PlayerNotFound(id))?;
            players.push(player);
        }
        Ok(players)
    }
}
