use crate::stats::GameStats;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub team_id: u32,
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn new(team_id: u32) -> Self {
        TeamRecord {
            team_id,
            ..Default::default()
        }
    }

    pub fn played(&self) -> u32 {
        self.wins + self.losses
    }
}

/// Win/loss records tallied from completed games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueTable {
    rows: Vec<TeamRecord>,
}

impl LeagueTable {
    /// Every team in `team_ids` gets a row, 0-0 if it has not played yet.
    pub fn new<'g>(team_ids: &[u32], games: impl IntoIterator<Item = &'g GameStats>) -> Self {
        let mut table = LeagueTable {
            rows: team_ids.iter().map(|&id| TeamRecord::new(id)).collect(),
        };

        for game in games {
            if let Some(winner) = game.winning_team_id {
                table.row_mut(winner).wins += 1;
            }
            if let Some(loser) = game.losing_team_id {
                table.row_mut(loser).losses += 1;
            }
        }

        table
    }

    fn row_mut(&mut self, team_id: u32) -> &mut TeamRecord {
        let index = match self.rows.iter().position(|r| r.team_id == team_id) {
            Some(index) => index,
            None => {
                self.rows.push(TeamRecord::new(team_id));
                self.rows.len() - 1
            }
        };

        &mut self.rows[index]
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.rows
    }

    pub fn record_for(&self, team_id: u32) -> TeamRecord {
        self.rows
            .iter()
            .find(|r| r.team_id == team_id)
            .copied()
            .unwrap_or_else(|| TeamRecord::new(team_id))
    }

    /// Most wins first, then fewest losses; equal records keep table order.
    pub fn standings(&self) -> Vec<TeamRecord> {
        self.rows
            .iter()
            .copied()
            .sorted_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::FixtureId;

    fn game(home: u32, away: u32, week: u32, winner: u32) -> GameStats {
        let mut stats = GameStats::new(FixtureId::new(home, away, week));
        stats.winning_team_id = Some(winner);
        stats.losing_team_id = Some(if winner == home { away } else { home });
        stats
    }

    #[test]
    fn test_team_without_games_is_zero_zero() {
        let table = LeagueTable::new(&[1, 2, 3], std::iter::empty());

        assert_eq!(table.record_for(3), TeamRecord::new(3));
        assert_eq!(table.record_for(3).played(), 0);
        // unknown teams too
        assert_eq!(table.record_for(99).played(), 0);
    }

    #[test]
    fn test_records_tally_winners_and_losers() {
        let games = vec![game(1, 2, 0, 1), game(3, 1, 1, 1), game(2, 3, 2, 3)];
        let table = LeagueTable::new(&[1, 2, 3], &games);

        assert_eq!(table.record_for(1), TeamRecord { team_id: 1, wins: 2, losses: 0 });
        assert_eq!(table.record_for(2), TeamRecord { team_id: 2, wins: 0, losses: 2 });
        assert_eq!(table.record_for(3), TeamRecord { team_id: 3, wins: 1, losses: 1 });
    }

    #[test]
    fn test_incomplete_games_are_ignored() {
        let games = vec![GameStats::new(FixtureId::new(1, 2, 0))];
        let table = LeagueTable::new(&[1, 2], &games);

        assert_eq!(table.record_for(1).played(), 0);
    }

    #[test]
    fn test_standings_order() {
        let games = vec![
            game(1, 2, 0, 2),
            game(3, 4, 0, 3),
            game(1, 3, 1, 3),
            game(2, 4, 1, 4),
        ];
        let table = LeagueTable::new(&[1, 2, 3, 4], &games);

        let order: Vec<u32> = table.standings().iter().map(|r| r.team_id).collect();

        // 3: 2-0, 2: 1-1, 4: 1-1 (table order), 1: 0-2
        assert_eq!(order, vec![3, 2, 4, 1]);
    }
}
