use crate::error::LeagueResult;
use crate::league::{Fixture, Season};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureData {
    pub home_team_id: u32,
    pub away_team_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonData {
    pub year: u32,
    pub team_ids: Vec<u32>,
    pub current_week: usize,
    pub schedule: Vec<Vec<FixtureData>>,
    #[serde(default)]
    pub playoff_schedule: Vec<Vec<FixtureData>>,
}

fn weeks_to_data(weeks: &[Vec<Fixture>]) -> Vec<Vec<FixtureData>> {
    weeks
        .iter()
        .map(|week| {
            week.iter()
                .map(|f| FixtureData {
                    home_team_id: f.home_team_id,
                    away_team_id: f.away_team_id,
                })
                .collect()
        })
        .collect()
}

fn weeks_from_data(weeks: Vec<Vec<FixtureData>>) -> Vec<Vec<Fixture>> {
    weeks
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|f| Fixture::new(f.home_team_id, f.away_team_id))
                .collect()
        })
        .collect()
}

impl Season {
    pub fn to_plain_data(&self) -> SeasonData {
        SeasonData {
            year: self.year,
            team_ids: self.team_ids.clone(),
            current_week: self.current_week,
            schedule: weeks_to_data(self.schedule()),
            playoff_schedule: weeks_to_data(&self.playoff_schedule),
        }
    }

    /// Keeps the stored schedule and week; a snapshot without a schedule gets a fresh one.
    pub fn from_plain_data(data: SeasonData) -> LeagueResult<Season> {
        if data.schedule.is_empty() {
            let mut season = Season::new(data.team_ids, data.year)?;
            season.current_week = data.current_week;
            return Ok(season);
        }

        Season::restore(
            data.team_ids,
            data.year,
            data.current_week,
            weeks_from_data(data.schedule),
            weeks_from_data(data.playoff_schedule),
        )
    }
}
