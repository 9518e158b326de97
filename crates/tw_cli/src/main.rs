//! Headless career runner
//!
//! Runs fully simulated league careers from a seed, prints standings and
//! playoff results, and can persist or inspect career save slots.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use tw_core::models::SeasonMode;
use tw_core::narrative::{recap_or_fallback, StaticNarrative};
use tw_core::{League, Phase, SaveManager};

#[derive(Parser)]
#[command(name = "tw_cli")]
#[command(about = "Run headless league careers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// One season, full reset afterwards
    Standard,
    /// Multi-season careers with carryover
    Dynasty,
}

impl From<Mode> for SeasonMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Standard => SeasonMode::Standard,
            Mode::Dynasty => SeasonMode::Dynasty,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one or more full seasons
    Simulate {
        /// RNG seed; the same seed replays the same career
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Season mode
        #[arg(long, value_enum, default_value = "standard")]
        mode: Mode,

        /// Number of seasons to run (dynasty only carries state across)
        #[arg(long, default_value = "1")]
        seasons: u32,

        /// Name for the user-controlled squad
        #[arg(long, default_value = "Void Reapers")]
        name: String,

        /// Print every week's results, not just the season wrap-up
        #[arg(long, default_value = "false")]
        verbose: bool,

        /// Save the finished career to this directory, slot 0
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },

    /// List career save slots in a directory
    Slots {
        /// Save directory
        #[arg(long)]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { seed, mode, seasons, name, verbose, save_dir } => {
            run_simulation(seed, mode.into(), seasons, &name, verbose, save_dir)
        }
        Commands::Slots { dir } => list_slots(&dir),
    }
}

fn run_simulation(
    seed: u64,
    mode: SeasonMode,
    seasons: u32,
    name: &str,
    verbose: bool,
    save_dir: Option<PathBuf>,
) -> Result<()> {
    if seasons == 0 {
        bail!("at least one season is required");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut league = League::new(&mut rng, name, mode);
    println!("Career started: {} ({:?} mode, seed {})", name, mode, seed);

    for season in 1..=seasons {
        league.set_auto_draft(true);
        league.advance_cpu_picks()?;
        println!("\n=== Season {} ===", season);
        println!("Draft complete, {} free agents remain", league.free_agents.len());

        loop {
            let report = league.advance_week(&mut rng)?;
            if verbose {
                for result in &report.results {
                    let home = team_name(&league, &result.home_id);
                    let away = team_name(&league, &result.away_id);
                    println!(
                        "  W{:02} {} {} - {} {}  [{}]",
                        report.week, home, result.home_score, result.away_score, away,
                        result.map.name
                    );
                }
            }
            if verbose {
                if let Some(result) = &report.player_result {
                    let home = team_name(&league, &result.home_id);
                    let away = team_name(&league, &result.away_id);
                    println!("       {}", recap_or_fallback(&StaticNarrative, result, home, away));
                }
            }
            if report.game_over {
                println!("Career over: the franchise went bankrupt.");
                return Ok(());
            }
            if let Some(champ) = &report.champion_id {
                println!("\nChampions: {}", team_name(&league, champ));
            }
            if league.phase == Phase::SeasonSummary {
                break;
            }
            if league.phase == Phase::Playoffs && report.playoffs_seeded {
                println!("\nPlayoffs seeded (top 4 by wins, then K/D):");
            }
        }

        print_standings(&league);

        if season < seasons {
            league.start_next_season(&mut rng)?;
        }
    }

    if let Some(dir) = save_dir {
        let manager = SaveManager::new(&dir);
        manager.save_to_slot(0, &league)?;
        println!("\nCareer saved to {}", dir.display());
    }
    Ok(())
}

fn print_standings(league: &League) {
    println!("\nFinal standings:");
    println!("{:<4} {:<24} {:>4} {:>4} {:>6} {:>8}", "#", "Squad", "W", "L", "K/D", "Budget");
    for (i, team) in league.standings().iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>4} {:>4} {:>+6} {:>7}k",
            i + 1,
            team.name,
            team.wins,
            team.losses,
            team.kd_diff(),
            team.budget
        );
    }
}

fn list_slots(dir: &PathBuf) -> Result<()> {
    let manager = SaveManager::new(dir);
    let slots = manager.all_slot_info();
    if slots.is_empty() {
        println!("No careers saved under {}", dir.display());
        return Ok(());
    }
    for info in slots {
        println!("{}", info.display_text());
    }
    Ok(())
}

fn team_name<'a>(league: &'a League, id: &'a str) -> &'a str {
    league.team(id).map(|t| t.name.as_str()).unwrap_or(id)
}
