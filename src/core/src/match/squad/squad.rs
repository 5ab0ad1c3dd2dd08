use crate::club::{
    CourtLineup, LineupPreferences, Player, PlayerCollection, Substitution, Team, BACK_ROW,
    FRONT_ROW, LINEUP_SIZE,
};
use crate::error::{LeagueError, LeagueResult};
use log::debug;

/// Private per-match view of one team: its own copies of the roster players and a locked
/// court lineup. Nothing here is shared with the league tables until the match is written back.
#[derive(Debug, Clone)]
pub struct MatchTeam {
    pub team_id: u32,
    pub team_name: String,
    pub squad: PlayerCollection,
    pub court: CourtLineup,
    pub preferences: Option<LineupPreferences>,
    pub substitutions_remaining: u32,
}

impl MatchTeam {
    /// Takes the team's current lineup; it must have all six slots filled from `pool`.
    pub fn new(team: &Team, pool: &PlayerCollection) -> LeagueResult<Self> {
        let squad = pool.subset(&team.player_ids);
        let court = team.lineup.to_court(team.id)?;

        let resolved = court
            .player_ids()
            .iter()
            .filter(|&&id| squad.contains(id))
            .count();

        if resolved < LINEUP_SIZE {
            return Err(LeagueError::IncompleteLineup {
                team_id: team.id,
                available: resolved,
            });
        }

        let mut match_team = MatchTeam {
            team_id: team.id,
            team_name: team.name.clone(),
            squad,
            court,
            preferences: team.preferences().cloned(),
            substitutions_remaining: 0,
        };

        match_team.exchange_libero();

        Ok(match_team)
    }

    pub fn player(&self, slot: usize) -> Option<&Player> {
        self.squad.get(self.court.get(slot))
    }

    pub fn back_row(&self) -> Vec<&Player> {
        BACK_ROW.iter().filter_map(|&slot| self.player(slot)).collect()
    }

    pub fn front_row(&self) -> Vec<&Player> {
        FRONT_ROW.iter().filter_map(|&slot| self.player(slot)).collect()
    }

    /// On-court players in slot order.
    pub fn on_court(&self) -> Vec<&Player> {
        (1..=LINEUP_SIZE).filter_map(|slot| self.player(slot)).collect()
    }

    pub fn server(&self) -> Option<&Player> {
        self.player(1)
    }

    /// Energy cost of one rally for everyone on court.
    pub fn fatigue_on_court(&mut self) {
        for id in self.court.player_ids() {
            if let Some(player) = self.squad.get_mut(id) {
                player.fatigue();
            }
        }
    }

    /// Between-set recovery for the whole squad, bench included.
    pub fn rest(&mut self) {
        self.squad.players_mut().for_each(|p| p.rest());
    }

    pub fn reset_substitutions(&mut self, per_set: u32) {
        self.substitutions_remaining = per_set;
    }

    /// Rotation after winning serve back, followed by the libero exchange and, while the
    /// set's budget lasts, at most one fatigue substitution.
    pub fn side_out(&mut self, fatigue_threshold: f32) -> Option<Substitution> {
        self.court.rotate(1);
        self.exchange_libero();

        if self.substitutions_remaining == 0 {
            return None;
        }

        let substitution = self.court.substitute_fatigued(
            &self.squad,
            self.preferences.as_ref(),
            fatigue_threshold,
        )?;

        self.substitutions_remaining -= 1;

        debug!(
            "{}: substitution in slot {} ({} out, {} in), {} left",
            self.team_name,
            substitution.slot,
            substitution.player_out,
            substitution.player_in,
            self.substitutions_remaining
        );

        Some(substitution)
    }

    fn exchange_libero(&mut self) {
        if let Some(exchange) = self.court.exchange_libero(&self.squad) {
            debug!(
                "{}: libero exchange in slot {} ({} out, {} in)",
                self.team_name, exchange.slot, exchange.player_out, exchange.player_in
            );
        }
    }

    pub fn into_parts(self) -> (CourtLineup, Vec<Player>) {
        (self.court, self.squad.into_players())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerEnergy, PlayerPosition};
    use crate::testing::roster;

    fn match_team() -> MatchTeam {
        let (mut team, players) = roster(1, 100);
        let pool = PlayerCollection::new(players);
        team.set_lineup(&pool);

        MatchTeam::new(&team, &pool).unwrap()
    }

    #[test]
    fn test_new_requires_full_lineup() {
        let (team, players) = roster(1, 100);
        let pool = PlayerCollection::new(players);

        // lineup never built
        assert_eq!(
            MatchTeam::new(&team, &pool).map(|t| t.team_id),
            Err(LeagueError::IncompleteLineup {
                team_id: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_new_puts_libero_in_back_row() {
        let team = match_team();

        let libero_slot = team
            .on_court()
            .iter()
            .find(|p| p.is_libero())
            .and_then(|p| team.court.slot_of(p.id));

        assert!(libero_slot.is_some_and(|slot| BACK_ROW.contains(&slot)));
    }

    #[test]
    fn test_squad_is_a_private_copy() {
        let (mut team, players) = roster(1, 100);
        let pool = PlayerCollection::new(players);
        team.set_lineup(&pool);

        let mut match_team = MatchTeam::new(&team, &pool).unwrap();
        match_team.fatigue_on_court();

        let server = match_team.court.server();
        assert!(match_team.squad.get(server).unwrap().current_energy() < 100.0);
        assert_eq!(pool.get(server).unwrap().current_energy(), 100.0);
    }

    #[test]
    fn test_side_out_spends_substitution_budget() {
        let mut team = match_team();
        team.reset_substitutions(1);

        for id in team.court.player_ids() {
            let player = team.squad.get_mut(id).unwrap();
            if player.position == PlayerPosition::Hitter {
                player.energy = PlayerEnergy::new(10.0);
            }
        }

        assert!(team.side_out(1500.0).is_some());
        assert_eq!(team.substitutions_remaining, 0);

        // budget exhausted: rotation only
        let before = team.court;
        assert_eq!(team.side_out(1500.0), None);
        assert_ne!(team.court, before);
    }
}
