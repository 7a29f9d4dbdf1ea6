//! Command-line front end: create a tournament, report results, print standings.
//! The tournament lives in a JSON file between invocations.
//! Run with: cargo run --bin tournament -- new --name Cup --out cup.json Alpha Beta Gamma
//! Engine options come from env: TOURNAMENT_THIRD_PLACE, TOURNAMENT_ALLOW_ELIMINATION_DRAWS.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tournament_engine::{
    champion, compute_podium, compute_standings, compute_summary, create_tournament,
    report_result_with, EngineConfig, Format, Registry, Sport, Tournament,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a tournament and write it to a file.
    New {
        #[arg(short, long)]
        name: String,
        /// groups or elimination
        #[arg(short, long, default_value = "groups")]
        format: Format,
        #[arg(short, long, default_value = "custom")]
        sport: Sport,
        /// Seed for the group shuffle (random if omitted).
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long)]
        out: PathBuf,
        /// Team names, in seeding order.
        #[arg(required = true)]
        teams: Vec<String>,
    },
    /// Print every match, round by round.
    Show { file: PathBuf },
    /// Report the score of one match and save the file.
    Report {
        file: PathBuf,
        match_id: String,
        #[arg(allow_hyphen_values = true)]
        score1: i64,
        #[arg(allow_hyphen_values = true)]
        score2: i64,
    },
    /// Print the ranking table (groups) or the podium (elimination).
    Standings { file: PathBuf },
}

fn load(path: &Path) -> Result<Tournament, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn save(path: &Path, tournament: &Tournament) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(tournament)?)?;
    log::info!("Saved tournament {} to {}", tournament.id, path.display());
    Ok(())
}

fn print_matches(t: &Tournament) {
    println!("{} ({} {}, {:?})", t.name, t.sport.icon(), t.sport.display_name(), t.format);
    for (round, matches) in t.matches_by_round() {
        println!("Round {round}");
        for m in matches {
            let score = match m.scores() {
                Some((s1, s2)) => format!("{s1} - {s2}"),
                None => "-".to_string(),
            };
            println!(
                "  {:<14} {:>16} {:^9} {}",
                m.id,
                t.slot_name(m.team1),
                score,
                t.slot_name(m.team2)
            );
        }
    }
}

fn print_standings(t: &Tournament, config: &EngineConfig) {
    match t.format {
        Format::Groups => {
            println!(
                "{:>3}  {:<16} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
                "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
            );
            for (i, s) in compute_standings(t).iter().enumerate() {
                println!(
                    "{:>3}  {:<16} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5} {:>4}",
                    i + 1,
                    s.name,
                    s.played,
                    s.wins,
                    s.draws,
                    s.losses,
                    s.goals_for,
                    s.goals_against,
                    s.goal_difference,
                    s.points
                );
            }
        }
        Format::Elimination => {
            let podium = compute_podium(t, config.third_place);
            if podium.is_empty() {
                println!("Final not played yet");
            }
            for e in podium {
                let name = t.team(e.team_id).map(|team| team.name.as_str()).unwrap_or("?");
                println!("{}. {}", e.position, name);
            }
        }
    }
    if let Some(winner) = champion(t).and_then(|id| t.team(id)) {
        println!("Champion: {}", winner.name);
    }

    let summary = compute_summary(t);
    println!();
    println!(
        "Matches played: {}/{}  Teams: {}",
        summary.played_matches, summary.total_matches, summary.teams
    );
    if let (Some(goals), Some(average)) = (summary.total_goals, summary.average_goals) {
        println!("Goals: {goals}  Per match: {average:.1}");
    }
}

fn run(args: Args, config: &EngineConfig) -> Result<(), Box<dyn Error>> {
    match args.command {
        Command::New {
            name,
            format,
            sport,
            seed,
            out,
            teams,
        } => {
            let registry = Registry::from_names(&teams)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let tournament = create_tournament(&name, sport, format, registry, &mut rng)?;
            save(&out, &tournament)?;
            print_matches(&tournament);
        }
        Command::Show { file } => print_matches(&load(&file)?),
        Command::Report {
            file,
            match_id,
            score1,
            score2,
        } => {
            let tournament = load(&file)?;
            let updated = report_result_with(&tournament, &match_id, score1, score2, config)?;
            save(&file, &updated)?;
            print_matches(&updated);
        }
        Command::Standings { file } => print_standings(&load(&file)?, config),
    }
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let config = EngineConfig::from_env();
    log::debug!("Engine config: {:?}", config);

    if let Err(err) = run(args, &config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
