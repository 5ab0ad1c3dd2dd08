use color_eyre::eyre::{eyre, Result, WrapErr};
use env_logger::Env;
use log::info;
use std::env;
use std::fs;
use volley_core::utils::{Logging, SimulationRng};
use volley_core::{League, LeagueData};

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let league_file = env::args()
        .nth(1)
        .or_else(|| env::var("LEAGUE_FILE").ok())
        .ok_or_else(|| eyre!("no league file given: pass a path or set LEAGUE_FILE"))?;

    let mut rng = match env::var("SEED") {
        Ok(seed) => SimulationRng::seeded(
            seed.parse()
                .wrap_err_with(|| format!("SEED `{}` is not an unsigned integer", seed))?,
        ),
        Err(_) => SimulationRng::from_entropy(),
    };

    let weeks: Option<usize> = match env::var("WEEKS") {
        Ok(weeks) => Some(
            weeks
                .parse()
                .wrap_err_with(|| format!("WEEKS `{}` is not a number", weeks))?,
        ),
        Err(_) => None,
    };

    let json = fs::read_to_string(&league_file)
        .wrap_err_with(|| format!("failed to read {}", league_file))?;
    let data: LeagueData = serde_json::from_str(&json)
        .wrap_err_with(|| format!("{} is not a league snapshot", league_file))?;

    let mut league = League::from_plain_data(data)?;

    info!(
        "league loaded: {} teams, {} players, season {}",
        league.teams.teams.len(),
        league.players.len(),
        league.current_season_year
    );

    let mut played = 0;
    while weeks.is_none_or(|limit| played < limit) {
        let week_stats =
            Logging::estimate_result(|| league.simulate_week(&mut rng), "week simulated")?;

        if week_stats.is_empty() {
            break;
        }

        played += 1;
    }

    info!("simulated {} weeks", played);

    for (rank, record) in league.table().standings().iter().enumerate() {
        let name = league
            .teams
            .by_id(record.team_id)
            .map(|t| t.name.as_str())
            .unwrap_or("unknown");

        info!("{:>2}. {:<24} {:>2}-{:<2}", rank + 1, name, record.wins, record.losses);
    }

    let output = serde_json::to_string_pretty(&league.to_plain_data())?;

    match env::var("OUTPUT_FILE") {
        Ok(path) => {
            fs::write(&path, output).wrap_err_with(|| format!("failed to write {}", path))?
        }
        Err(_) => println!("{}", output),
    }

    Ok(())
}
