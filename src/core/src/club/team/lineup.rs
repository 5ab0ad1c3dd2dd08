use crate::club::{Player, PlayerPosition};
use crate::error::{LeagueError, LeagueResult};
use std::cmp::Ordering;
use std::collections::HashMap;

pub const LINEUP_SIZE: usize = 6;

/// Serve-rotation cycle; a rotation moves every occupant one step along it.
pub const ROTATION_ORDER: [usize; LINEUP_SIZE] = [1, 6, 5, 4, 3, 2];

pub const BACK_ROW: [usize; 3] = [1, 6, 5];
pub const FRONT_ROW: [usize; 3] = [2, 3, 4];

const MIDDLE_SLOTS: [usize; 2] = [2, 5];
const SETTER_SLOTS: [usize; 3] = [1, 3, 6];
const HITTER_SLOTS: [usize; 4] = [1, 3, 4, 6];
const MAX_HITTERS: usize = 3;

/// Lineup as built before a match; slots may still be empty when the roster is short.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lineup {
    slots: [Option<u32>; LINEUP_SIZE],
}

impl Lineup {
    pub fn get(&self, slot: usize) -> Option<u32> {
        self.slots[slot - 1]
    }

    pub fn set(&mut self, slot: usize, player_id: u32) {
        self.slots[slot - 1] = Some(player_id);
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled() == LINEUP_SIZE
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.slots.contains(&Some(player_id))
    }

    /// Locks the lineup for play; every slot must be occupied.
    pub fn to_court(&self, team_id: u32) -> LeagueResult<CourtLineup> {
        let mut slots = [0; LINEUP_SIZE];

        for (index, slot) in self.slots.iter().enumerate() {
            slots[index] = slot.ok_or(LeagueError::IncompleteLineup {
                team_id,
                available: self.filled(),
            })?;
        }

        Ok(CourtLineup { slots })
    }
}

impl From<CourtLineup> for Lineup {
    fn from(court: CourtLineup) -> Self {
        Lineup {
            slots: court.slots.map(Some),
        }
    }
}

/// Lineup in play: all six slots are occupied for as long as the match runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourtLineup {
    pub(crate) slots: [u32; LINEUP_SIZE],
}

impl CourtLineup {
    pub fn get(&self, slot: usize) -> u32 {
        self.slots[slot - 1]
    }

    pub fn set(&mut self, slot: usize, player_id: u32) {
        self.slots[slot - 1] = player_id;
    }

    pub fn server(&self) -> u32 {
        self.get(1)
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.slots.contains(&player_id)
    }

    pub fn slot_of(&self, player_id: u32) -> Option<usize> {
        self.slots
            .iter()
            .position(|&id| id == player_id)
            .map(|index| index + 1)
    }

    pub fn player_ids(&self) -> [u32; LINEUP_SIZE] {
        self.slots
    }
}

/// Per-position ordering chosen by the user for their own team; lower index is preferred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineupPreferences {
    ranked: HashMap<PlayerPosition, Vec<u32>>,
}

impl LineupPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, position: PlayerPosition, player_ids: Vec<u32>) {
        self.ranked.insert(position, player_ids);
    }

    pub fn ranked(&self, position: PlayerPosition) -> Option<&[u32]> {
        self.ranked.get(&position).map(|ids| ids.as_slice())
    }

    pub fn rank(&self, position: PlayerPosition, player_id: u32) -> Option<usize> {
        self.ranked(position)?.iter().position(|&id| id == player_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerPosition, &Vec<u32>)> {
        self.ranked.iter()
    }
}

/// Orders two players of the same position, best first.
///
/// With a preference list for the position, ranked players come first in list order and
/// unranked players follow by rating. Without one, rating alone decides.
pub(crate) fn compare_for_position(
    a: &Player,
    b: &Player,
    preferences: Option<&LineupPreferences>,
) -> Ordering {
    let by_rating = || b.overall().partial_cmp(&a.overall()).unwrap_or(Ordering::Equal);

    match preferences.filter(|p| p.ranked(a.position).is_some()) {
        Some(preferences) => {
            let rank_a = preferences.rank(a.position, a.id).unwrap_or(usize::MAX);
            let rank_b = preferences.rank(b.position, b.id).unwrap_or(usize::MAX);
            rank_a.cmp(&rank_b).then_with(by_rating)
        }
        None => by_rating(),
    }
}

/// Builds the starting six from the players that could be resolved for a roster.
pub(crate) struct LineupSelector<'p> {
    available: Vec<&'p Player>,
    preferences: Option<&'p LineupPreferences>,
    lineup: Lineup,
}

impl<'p> LineupSelector<'p> {
    pub fn new(available: Vec<&'p Player>, preferences: Option<&'p LineupPreferences>) -> Self {
        LineupSelector {
            available,
            preferences,
            lineup: Lineup::default(),
        }
    }

    pub fn select(mut self) -> Lineup {
        for slot in MIDDLE_SLOTS {
            self.fill_slot(slot, PlayerPosition::Middle);
        }

        if let Some(slot) = self.first_free(&SETTER_SLOTS) {
            self.fill_slot(slot, PlayerPosition::Setter);
        }

        for _ in 0..MAX_HITTERS {
            match self.first_free(&HITTER_SLOTS) {
                Some(slot) => self.fill_slot(slot, PlayerPosition::Hitter),
                None => break,
            }
        }

        for slot in 1..=LINEUP_SIZE {
            if self.lineup.get(slot).is_none() {
                if let Some(player) = self.take_best_remaining() {
                    self.lineup.set(slot, player.id);
                }
            }
        }

        self.lineup
    }

    fn first_free(&self, slots: &[usize]) -> Option<usize> {
        slots.iter().copied().find(|&slot| self.lineup.get(slot).is_none())
    }

    fn fill_slot(&mut self, slot: usize, position: PlayerPosition) {
        let preferences = self.preferences;

        let best = self
            .available
            .iter()
            .enumerate()
            .filter(|(_, p)| p.position == position)
            .min_by(|(_, a), (_, b)| compare_for_position(a, b, preferences))
            .map(|(index, _)| index);

        if let Some(index) = best {
            let player = self.available.remove(index);
            self.lineup.set(slot, player.id);
        }
    }

    // Liberos only fill a slot when nobody else is left.
    fn take_best_remaining(&mut self) -> Option<&'p Player> {
        let index = self
            .available
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.is_libero().cmp(&b.is_libero()).then_with(|| {
                    b.overall().partial_cmp(&a.overall()).unwrap_or(Ordering::Equal)
                })
            })
            .map(|(index, _)| index)?;

        Some(self.available.remove(index))
    }
}
