use crate::error::LeagueResult;
use crate::r#match::FixtureId;
use crate::stats::{GameStats, PlayerStats, SetScore};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStatsData {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScoreData {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_points: u32,
    pub away_points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatsData {
    pub game_id: String,
    pub player_stats: Vec<PlayerStatsData>,
    pub set_scores: Vec<SetScoreData>,
    pub winning_team_id: Option<u32>,
    pub losing_team_id: Option<u32>,
}

impl PlayerStats {
    pub fn to_plain_data(&self) -> PlayerStatsData {
        PlayerStatsData {
            player_id: self.player_id,
            serves_attempted: self.serves_attempted,
            serves_missed: self.serves_missed,
            serves_made: self.serves_made,
            serves_aced: self.serves_aced,
            average_serve_speed: self.average_serve_speed,
            passes_attempted: self.passes_attempted,
            passes_missed: self.passes_missed,
            perfect_passes: self.perfect_passes,
            sets_attempted: self.sets_attempted,
            sets_missed: self.sets_missed,
            perfect_sets: self.perfect_sets,
            spikes_attempted: self.spikes_attempted,
            spikes_missed: self.spikes_missed,
            spikes_made: self.spikes_made,
            kills: self.kills,
            average_spike_speed: self.average_spike_speed,
        }
    }

    /// Snapshots written without `spikesMade` get it reconstructed from attempts and misses.
    pub fn from_plain_data(data: PlayerStatsData) -> PlayerStats {
        let spikes_made = if data.spikes_made == 0 {
            data.spikes_attempted.saturating_sub(data.spikes_missed)
        } else {
            data.spikes_made
        };

        PlayerStats {
            player_id: data.player_id,
            serves_attempted: data.serves_attempted,
            serves_missed: data.serves_missed,
            serves_made: data.serves_made,
            serves_aced: data.serves_aced,
            average_serve_speed: data.average_serve_speed,
            passes_attempted: data.passes_attempted,
            passes_missed: data.passes_missed,
            perfect_passes: data.perfect_passes,
            sets_attempted: data.sets_attempted,
            sets_missed: data.sets_missed,
            perfect_sets: data.perfect_sets,
            spikes_attempted: data.spikes_attempted,
            spikes_missed: data.spikes_missed,
            spikes_made,
            kills: data.kills,
            average_spike_speed: data.average_spike_speed,
        }
    }
}

impl SetScore {
    pub fn to_plain_data(&self) -> SetScoreData {
        SetScoreData {
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            home_points: self.home_points,
            away_points: self.away_points,
        }
    }

    pub fn from_plain_data(data: SetScoreData) -> SetScore {
        SetScore {
            home_team_id: data.home_team_id,
            away_team_id: data.away_team_id,
            home_points: data.home_points,
            away_points: data.away_points,
        }
    }
}

impl GameStats {
    /// Player lines are written in player id order.
    pub fn to_plain_data(&self) -> GameStatsData {
        GameStatsData {
            game_id: self.game_id.to_string(),
            player_stats: self
                .player_stats
                .values()
                .sorted_by_key(|s| s.player_id)
                .map(PlayerStats::to_plain_data)
                .collect(),
            set_scores: self.set_scores.iter().map(SetScore::to_plain_data).collect(),
            winning_team_id: self.winning_team_id,
            losing_team_id: self.losing_team_id,
        }
    }

    /// Fails when the stored game id is not a valid fixture id.
    pub fn from_plain_data(data: GameStatsData) -> LeagueResult<GameStats> {
        Ok(GameStats {
            game_id: data.game_id.parse::<FixtureId>()?,
            player_stats: data
                .player_stats
                .into_iter()
                .map(|s| (s.player_id, PlayerStats::from_plain_data(s)))
                .collect(),
            set_scores: data
                .set_scores
                .into_iter()
                .map(SetScore::from_plain_data)
                .collect(),
            winning_team_id: data.winning_team_id,
            losing_team_id: data.losing_team_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeagueError;
    use crate::r#match::engine::ball::{BallPhase, BallTouch};

    fn touch(player_id: u32, phase: BallPhase, speed: u32, in_play: bool) -> BallTouch {
        BallTouch {
            speed,
            in_play,
            phase,
            player_id,
        }
    }

    fn played_game() -> GameStats {
        let mut stats = GameStats::new(FixtureId::new(3, 7, 4));

        stats.record_rally(&[
            touch(31, BallPhase::Serve, 44, true),
            touch(72, BallPhase::Pass, 3, true),
            touch(71, BallPhase::Set, 2, true),
            touch(74, BallPhase::Spike, 51, true),
            touch(35, BallPhase::Pass, 0, false),
        ]);
        stats.set_scores.push(SetScore {
            home_team_id: 3,
            away_team_id: 7,
            home_points: 23,
            away_points: 25,
        });
        stats.winning_team_id = Some(7);
        stats.losing_team_id = Some(3);

        stats
    }

    #[test]
    fn test_round_trip_through_json() {
        let stats = played_game();

        let json = serde_json::to_string(&stats.to_plain_data()).unwrap();
        let restored = GameStats::from_plain_data(serde_json::from_str(&json).unwrap()).unwrap();

        assert_eq!(restored, stats);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(played_game().to_plain_data()).unwrap();

        assert_eq!(json["gameId"], "3-7-4");
        assert_eq!(json["winningTeamId"], 7);
        assert_eq!(json["playerStats"][0]["playerId"], 31);
        assert_eq!(json["playerStats"][0]["averageServeSpeed"], 44.0);
        assert_eq!(json["setScores"][0]["awayPoints"], 25);
    }

    #[test]
    fn test_malformed_game_id_is_rejected() {
        let mut data = played_game().to_plain_data();
        data.game_id = "3-7".to_string();

        assert_eq!(
            GameStats::from_plain_data(data),
            Err(LeagueError::MalformedFixtureId("3-7".to_string()))
        );
    }

    #[test]
    fn test_spikes_made_is_reconstructed_for_old_snapshots() {
        let json = r#"{
            "playerId": 4,
            "spikesAttempted": 10,
            "spikesMissed": 3,
            "averageSpikeSpeed": 50.0
        }"#;
        let stats = PlayerStats::from_plain_data(serde_json::from_str(json).unwrap());

        assert_eq!(stats.spikes_made, 7);
        assert_eq!(stats.serves_attempted, 0);
    }
}
