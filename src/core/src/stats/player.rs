use crate::r#match::engine::ball::{BallPhase, BallTouch, PERFECT_TIER};

/// Box-score counters for one player, either for a single game or accumulated over a season.
///
/// Averages are running means over the matching `*_made` counter, so merging two snapshots
/// can weight each side by its own made count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    pub player_id: u32,

    pub serves_attempted: u32,
    pub serves_missed: u32,
    pub serves_made: u32,
    pub serves_aced: u32,
    pub average_serve_speed: f32,

    pub passes_attempted: u32,
    pub passes_missed: u32,
    pub perfect_passes: u32,

    pub sets_attempted: u32,
    pub sets_missed: u32,
    pub perfect_sets: u32,

    pub spikes_attempted: u32,
    pub spikes_missed: u32,
    pub spikes_made: u32,
    pub kills: u32,
    pub average_spike_speed: f32,
}

impl PlayerStats {
    pub fn new(player_id: u32) -> Self {
        PlayerStats {
            player_id,
            ..Default::default()
        }
    }

    /// Key of a player's cumulative stats for one season.
    pub fn stat_id(player_id: u32, year: u32) -> String {
        format!("{}-{}", player_id, year)
    }

    /// Records one touch. `next` is the touch that followed it in the same rally.
    pub fn record(&mut self, touch: &BallTouch, next: Option<&BallTouch>) {
        match touch.phase {
            BallPhase::Serve => self.record_serve(touch, next),
            BallPhase::Pass => self.record_pass(touch),
            BallPhase::Set => self.record_set(touch),
            BallPhase::Spike => self.record_spike(touch, next),
            BallPhase::Freeball => {}
        }
    }

    pub fn record_serve(&mut self, touch: &BallTouch, next: Option<&BallTouch>) {
        self.serves_attempted += 1;

        if !touch.in_play {
            self.serves_missed += 1;
            return;
        }

        self.serves_made += 1;
        self.average_serve_speed =
            running_average(self.average_serve_speed, touch.speed as f32, self.serves_made);

        if is_failed_pass(next) {
            self.serves_aced += 1;
        }
    }

    pub fn record_pass(&mut self, touch: &BallTouch) {
        self.passes_attempted += 1;

        if !touch.in_play {
            self.passes_missed += 1;
        } else if touch.speed == PERFECT_TIER {
            self.perfect_passes += 1;
        }
    }

    pub fn record_set(&mut self, touch: &BallTouch) {
        self.sets_attempted += 1;

        if !touch.in_play {
            self.sets_missed += 1;
        } else if touch.speed == PERFECT_TIER {
            self.perfect_sets += 1;
        }
    }

    pub fn record_spike(&mut self, touch: &BallTouch, next: Option<&BallTouch>) {
        self.spikes_attempted += 1;

        if !touch.in_play {
            self.spikes_missed += 1;
            return;
        }

        self.spikes_made += 1;
        self.average_spike_speed =
            running_average(self.average_spike_speed, touch.speed as f32, self.spikes_made);

        if is_failed_pass(next) {
            self.kills += 1;
        }
    }

    /// Folds another snapshot of the same player into this one.
    pub fn merge_from(&mut self, other: &PlayerStats) {
        self.average_serve_speed = merged_average(
            self.average_serve_speed,
            self.serves_made,
            other.average_serve_speed,
            other.serves_made,
        );
        self.average_spike_speed = merged_average(
            self.average_spike_speed,
            self.spikes_made,
            other.average_spike_speed,
            other.spikes_made,
        );

        self.serves_attempted += other.serves_attempted;
        self.serves_missed += other.serves_missed;
        self.serves_made += other.serves_made;
        self.serves_aced += other.serves_aced;

        self.passes_attempted += other.passes_attempted;
        self.passes_missed += other.passes_missed;
        self.perfect_passes += other.perfect_passes;

        self.sets_attempted += other.sets_attempted;
        self.sets_missed += other.sets_missed;
        self.perfect_sets += other.perfect_sets;

        self.spikes_attempted += other.spikes_attempted;
        self.spikes_missed += other.spikes_missed;
        self.spikes_made += other.spikes_made;
        self.kills += other.kills;
    }
}

/// Pure merge of two snapshots; the result keeps `existing.player_id`.
pub fn merge_player_stats(existing: &PlayerStats, incoming: &PlayerStats) -> PlayerStats {
    let mut merged = existing.clone();
    merged.merge_from(incoming);
    merged
}

fn is_failed_pass(next: Option<&BallTouch>) -> bool {
    next.is_some_and(|touch| touch.phase == BallPhase::Pass && !touch.in_play)
}

// `count` already includes the new value.
fn running_average(average: f32, value: f32, count: u32) -> f32 {
    if count == 0 {
        return 0.0;
    }

    (average * (count - 1) as f32 + value) / count as f32
}

fn merged_average(left: f32, left_count: u32, right: f32, right_count: u32) -> f32 {
    match (left_count, right_count) {
        (0, 0) => return 0.0,
        (_, 0) => return left,
        (0, _) => return right,
        _ => {}
    }

    let total = left_count + right_count;
    (left * left_count as f32 + right * right_count as f32) / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn touch(phase: BallPhase, speed: u32, in_play: bool) -> BallTouch {
        BallTouch {
            speed,
            in_play,
            phase,
            player_id: 1,
        }
    }

    #[test]
    fn test_serve_average_and_ace() {
        let mut stats = PlayerStats::new(1);
        let failed_pass = touch(BallPhase::Pass, 0, false);

        stats.record_serve(&touch(BallPhase::Serve, 40, true), None);
        stats.record_serve(&touch(BallPhase::Serve, 50, true), Some(&failed_pass));
        stats.record_serve(&touch(BallPhase::Serve, 0, false), None);

        assert_eq!(stats.serves_attempted, 3);
        assert_eq!(stats.serves_made, 2);
        assert_eq!(stats.serves_missed, 1);
        assert_eq!(stats.serves_aced, 1);
        assert_eq!(stats.average_serve_speed, 45.0);
    }

    #[test]
    fn test_pass_and_set_tiers() {
        let mut stats = PlayerStats::new(1);

        stats.record(&touch(BallPhase::Pass, 3, true), None);
        stats.record(&touch(BallPhase::Pass, 2, true), None);
        stats.record(&touch(BallPhase::Pass, 0, false), None);
        stats.record(&touch(BallPhase::Set, 3, true), None);
        stats.record(&touch(BallPhase::Set, 0, false), None);

        assert_eq!(stats.passes_attempted, 3);
        assert_eq!(stats.perfect_passes, 1);
        assert_eq!(stats.passes_missed, 1);
        assert_eq!(stats.sets_attempted, 2);
        assert_eq!(stats.perfect_sets, 1);
        assert_eq!(stats.sets_missed, 1);
    }

    #[test]
    fn test_spike_kill_only_on_failed_pass() {
        let mut stats = PlayerStats::new(1);

        stats.record(
            &touch(BallPhase::Spike, 60, true),
            Some(&touch(BallPhase::Pass, 0, false)),
        );
        stats.record(
            &touch(BallPhase::Spike, 50, true),
            Some(&touch(BallPhase::Pass, 2, true)),
        );
        stats.record(&touch(BallPhase::Spike, 0, false), None);

        assert_eq!(stats.spikes_attempted, 3);
        assert_eq!(stats.spikes_made, 2);
        assert_eq!(stats.spikes_missed, 1);
        assert_eq!(stats.kills, 1);
        assert_eq!(stats.average_spike_speed, 55.0);
    }

    #[test]
    fn test_freeball_is_not_counted() {
        let mut stats = PlayerStats::new(1);
        stats.record(&touch(BallPhase::Freeball, 10, true), None);

        assert_eq!(stats, PlayerStats::new(1));
    }

    #[test]
    fn test_merge_weights_averages_by_made_counts() {
        let mut season = PlayerStats::new(1);
        season.serves_made = 3;
        season.serves_attempted = 3;
        season.average_serve_speed = 40.0;

        let mut game = PlayerStats::new(1);
        game.serves_made = 1;
        game.serves_attempted = 2;
        game.serves_missed = 1;
        game.average_serve_speed = 60.0;

        let merged = merge_player_stats(&season, &game);

        assert_eq!(merged.serves_attempted, 5);
        assert_eq!(merged.serves_made, 4);
        assert_eq!(merged.serves_missed, 1);
        assert_eq!(merged.average_serve_speed, 45.0);
        // inputs untouched
        assert_eq!(season.serves_made, 3);
    }

    #[test]
    fn test_merge_with_zero_made_keeps_average() {
        let mut season = PlayerStats::new(1);
        season.spikes_attempted = 4;
        season.spikes_made = 2;
        season.average_spike_speed = 52.5;

        let mut game = PlayerStats::new(1);
        game.spikes_attempted = 3;
        game.spikes_missed = 3;

        let merged = merge_player_stats(&season, &game);

        assert_eq!(merged.spikes_made, 2);
        assert_eq!(merged.spikes_missed, 3);
        assert_eq!(merged.average_spike_speed, 52.5);
    }

    #[test]
    fn test_stat_id() {
        assert_eq!(PlayerStats::stat_id(42, 2025), "42-2025");
    }

    fn snapshot() -> impl Strategy<Value = PlayerStats> {
        (0u32..200, 0u32..200, 0.0f32..90.0, 0u32..200, 0.0f32..90.0).prop_map(
            |(attempted, made, serve_speed, spikes, spike_speed)| PlayerStats {
                player_id: 1,
                serves_attempted: attempted + made,
                serves_missed: attempted,
                serves_made: made,
                average_serve_speed: if made == 0 { 0.0 } else { serve_speed },
                spikes_attempted: spikes,
                spikes_made: spikes,
                average_spike_speed: if spikes == 0 { 0.0 } else { spike_speed },
                ..Default::default()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_merge_with_empty_is_identity(stats in snapshot()) {
            let empty = PlayerStats::new(1);

            prop_assert_eq!(merge_player_stats(&stats, &empty), stats.clone());
            prop_assert_eq!(merge_player_stats(&empty, &stats), stats);
        }

        #[test]
        fn prop_merged_average_lies_between_inputs(left in snapshot(), right in snapshot()) {
            let merged = merge_player_stats(&left, &right);

            prop_assert_eq!(merged.serves_made, left.serves_made + right.serves_made);

            if left.serves_made > 0 && right.serves_made > 0 {
                let low = left.average_serve_speed.min(right.average_serve_speed);
                let high = left.average_serve_speed.max(right.average_serve_speed);
                prop_assert!(merged.average_serve_speed >= low - 0.01);
                prop_assert!(merged.average_serve_speed <= high + 0.01);
            }
        }
    }
}
