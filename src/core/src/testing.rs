//! Fixtures shared by the unit tests.

use crate::club::{Player, PlayerPosition, PlayerSkills, Team};

const ROSTER_POSITIONS: [PlayerPosition; 11] = [
    PlayerPosition::Setter,
    PlayerPosition::Setter,
    PlayerPosition::Hitter,
    PlayerPosition::Hitter,
    PlayerPosition::Hitter,
    PlayerPosition::Hitter,
    PlayerPosition::Middle,
    PlayerPosition::Middle,
    PlayerPosition::Middle,
    PlayerPosition::Libero,
    PlayerPosition::Libero,
];

/// Player with every skill and stamina set to `rating`.
pub fn player_with(id: u32, position: PlayerPosition, rating: f32) -> Player {
    Player::builder()
        .id(id)
        .name(format!("Player {}", id))
        .position(position)
        .skills(PlayerSkills {
            jumping: rating,
            power: rating,
            consistency: rating,
            setting: rating,
            blocking: rating,
            passing: rating,
        })
        .stamina(rating)
        .build()
        .unwrap()
}

/// Eleven-player roster (2 setters, 4 hitters, 3 middles, 2 liberos).
/// Player ids start at `first_player_id`.
pub fn roster(team_id: u32, first_player_id: u32) -> (Team, Vec<Player>) {
    let mut team = Team::builder()
        .id(team_id)
        .name(format!("Team {}", team_id))
        .build()
        .unwrap();

    let players = ROSTER_POSITIONS
        .iter()
        .enumerate()
        .map(|(offset, &position)| {
            let id = first_player_id + offset as u32;
            let mut player = player_with(id, position, 55.0 + ((id * 7) % 30) as f32);
            team.add_player(&mut player).unwrap();
            player
        })
        .collect();

    (team, players)
}

/// Ten full rosters, team ids `0..10`, team 0 user-controlled.
pub fn league_rosters() -> (Vec<Team>, Vec<Player>) {
    let mut teams = Vec::with_capacity(10);
    let mut players = Vec::with_capacity(110);

    for team_id in 0..10 {
        let (mut team, roster_players) = roster(team_id, 1000 + team_id * 100);
        team.user_team = team_id == 0;
        teams.push(team);
        players.extend(roster_players);
    }

    (teams, players)
}
