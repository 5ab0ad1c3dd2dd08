use crate::club::team::lineup::{
    compare_for_position, CourtLineup, LineupPreferences, BACK_ROW, FRONT_ROW, LINEUP_SIZE,
    ROTATION_ORDER,
};
use crate::club::{Player, PlayerCollection, PlayerPosition};
use log::debug;
use std::cmp::Ordering;

const PREFERENCE_BONUS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub slot: usize,
    pub player_out: u32,
    pub player_in: u32,
}

impl CourtLineup {
    /// Moves every occupant `steps` places along the rotation cycle.
    pub fn rotate(&mut self, steps: usize) {
        for _ in 0..steps % LINEUP_SIZE {
            let previous = *self;
            for (index, &slot) in ROTATION_ORDER.iter().enumerate() {
                let from = ROTATION_ORDER[(index + 1) % LINEUP_SIZE];
                self.set(slot, previous.get(from));
            }
        }
    }

    /// Keeps the libero in the back row: it replaces a back-row middle, and hands its
    /// slot back to the best bench middle once rotation carries it to the front row.
    /// Does not count as a substitution.
    pub fn exchange_libero(&mut self, squad: &PlayerCollection) -> Option<Substitution> {
        let libero_on_court = self
            .on_court(squad)
            .find(|(_, player)| player.is_libero())
            .map(|(slot, _)| slot);

        let exchange = match libero_on_court {
            None => BACK_ROW
                .iter()
                .copied()
                .find(|&slot| {
                    squad
                        .get(self.get(slot))
                        .is_some_and(|p| p.position == PlayerPosition::Middle)
                })
                .and_then(|slot| {
                    self.best_on_bench(squad, PlayerPosition::Libero)
                        .map(|libero| (slot, libero.id))
                }),
            Some(slot) if FRONT_ROW.contains(&slot) => self
                .best_on_bench(squad, PlayerPosition::Middle)
                .map(|middle| (slot, middle.id)),
            Some(_) => None,
        };

        exchange.map(|(slot, player_in)| self.swap(slot, player_in))
    }

    /// Replaces at most one tired non-libero with a fresher bench player of the same position.
    pub fn substitute_fatigued(
        &mut self,
        squad: &PlayerCollection,
        preferences: Option<&LineupPreferences>,
        threshold: f32,
    ) -> Option<Substitution> {
        for slot in ROTATION_ORDER {
            let Some(tired) = squad.get(self.get(slot)) else {
                continue;
            };

            if tired.is_libero() || tired.fatigue_score() <= threshold {
                continue;
            }

            let replacement = squad
                .players()
                .filter(|p| p.position == tired.position && !self.contains(p.id))
                .filter(|p| p.fatigue_score() <= threshold)
                .max_by(|a, b| {
                    Self::bench_score(a, preferences)
                        .partial_cmp(&Self::bench_score(b, preferences))
                        .unwrap_or(Ordering::Equal)
                        .then_with(|| b.id.cmp(&a.id))
                });

            if let Some(replacement) = replacement {
                debug!(
                    "fatigue substitution: {} out ({:.0} energy), {} in",
                    tired,
                    tired.current_energy(),
                    replacement
                );
                return Some(self.swap(slot, replacement.id));
            }
        }

        None
    }

    fn bench_score(player: &Player, preferences: Option<&LineupPreferences>) -> f32 {
        let bonus = preferences
            .and_then(|p| p.rank(player.position, player.id))
            .map(|rank| PREFERENCE_BONUS / (rank as f32 + 1.0))
            .unwrap_or(0.0);

        player.overall() * 0.6 + player.current_energy() * 0.4 + bonus
    }

    fn best_on_bench<'s>(
        &self,
        squad: &'s PlayerCollection,
        position: PlayerPosition,
    ) -> Option<&'s Player> {
        squad
            .players()
            .filter(|p| p.position == position && !self.contains(p.id))
            .min_by(|a, b| compare_for_position(a, b, None).then_with(|| a.id.cmp(&b.id)))
    }

    fn on_court<'s>(
        &self,
        squad: &'s PlayerCollection,
    ) -> impl Iterator<Item = (usize, &'s Player)> + use<'s> {
        let slots = self.slots;
        (1..=LINEUP_SIZE).filter_map(move |slot| squad.get(slots[slot - 1]).map(|p| (slot, p)))
    }

    fn swap(&mut self, slot: usize, player_in: u32) -> Substitution {
        let player_out = self.get(slot);
        self.set(slot, player_in);

        Substitution {
            slot,
            player_out,
            player_in,
        }
    }
}
