use crate::club::{Lineup, Player, PlayerCollection, TeamCollection};
use crate::error::LeagueResult;
use crate::r#match::MatchTeam;
use crate::stats::GameStats;

/// Harvest of one played game: its stats plus both private team views, to be written back.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub stats: GameStats,
    pub home: MatchTeam,
    pub away: MatchTeam,
}

impl MatchResult {
    /// Copies end-of-match energies and lineups back into the league tables.
    pub fn write_back(
        self,
        teams: &mut TeamCollection,
        players: &mut PlayerCollection,
    ) -> LeagueResult<GameStats> {
        for side in [self.home, self.away] {
            let team_id = side.team_id;
            let (court, squad): (_, Vec<Player>) = side.into_parts();

            teams.by_id_mut(team_id)?.lineup = Lineup::from(court);
            players.merge(squad);
        }

        Ok(self.stats)
    }
}
