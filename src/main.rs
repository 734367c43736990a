use clap::{Parser, Subcommand};
use ltv_leaderboard::{
    config::Settings,
    leaderboard::LeaderboardService,
    models::{LeaderboardSnapshot, Period},
    ranges::{local_today, PeriodRangeGenerator},
    utils::{format_date, format_number},
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod tui_main;

#[derive(Parser)]
#[clap(name = "ltv-leaderboard")]
#[clap(about = "LTV points leaderboard", long_about = None)]
struct Cli {
    /// Settings file (toml, yaml or json)
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the points API once and print the leaderboard
    Show {
        /// weekly, monthly or all_time
        #[clap(short, long, default_value = "weekly")]
        period: Period,

        /// Range option index, 0 being the current week or month
        #[clap(short, long)]
        range: Option<usize>,

        /// Print at most this many rows
        #[clap(short, long)]
        limit: Option<usize>,

        /// Print the snapshot as JSON
        #[clap(long)]
        json: bool,
    },

    /// List the selectable week or month ranges
    Ranges {
        #[clap(short, long, default_value = "weekly")]
        period: Period,
    },

    /// Launch the interactive dashboard
    Tui,
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<Settings> {
    let settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new().unwrap_or_else(|e| {
            eprintln!("Using default settings: {}", e);
            Settings::default()
        }),
    };

    settings.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(settings)
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_ref())?;

    if !matches!(cli.command, Commands::Tui) {
        init_logging(&settings.app.log_level);
    }

    let today = local_today();

    match cli.command {
        Commands::Show { period, range, limit, json } => {
            let service = LeaderboardService::from_settings(&settings)?
                .with_max_entries(limit.or(settings.leaderboard.max_entries));

            let options = service.generator(today).options_for(period);
            let selection = match range {
                Some(index) => Some(options.get(index).cloned().ok_or_else(|| {
                    anyhow::anyhow!("Range {} out of bounds, {} options available", index, options.len())
                })?),
                None => None,
            };

            let snapshot = match service.load(period, selection.as_ref(), today).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    error!("Unable to load leaderboard data: {}", e);
                    return Err(e.into());
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_snapshot(&snapshot, today);
            }
        }

        Commands::Ranges { period } => {
            let generator = PeriodRangeGenerator::from_settings(&settings.leaderboard, today);
            let options = generator.options_for(period);
            if options.is_empty() {
                let (start, end) = generator.effective_bounds(None);
                println!("{}: {} to {}", period.title(), start, end);
            }
            for (index, option) in options.iter().enumerate() {
                println!("{:>2}  {:<18} {} to {}", index, option.label, option.start, option.end);
            }
        }

        Commands::Tui => {
            tui_main::run_tui(&settings).await?;
        }
    }

    info!("Done");
    Ok(())
}

fn print_snapshot(snapshot: &LeaderboardSnapshot, today: chrono::NaiveDate) {
    println!("\n=== LTV Points Leaderboard ({}) ===", snapshot.period.title());
    println!("Range: {} to {}", snapshot.start_date, snapshot.end_date);
    println!(
        "Total Points Distributed: {} points",
        format_number(snapshot.points_distributed)
    );
    println!(
        "Distribution: {}",
        format_date(snapshot.next_distribution, today)
    );
    println!();

    if snapshot.is_empty() {
        println!("No entries.");
        return;
    }

    println!("{:>6}  {:<16} {:<10} {:>18}", "RANK", "USER", "BADGE", "POINTS");
    for entry in &snapshot.entries {
        println!(
            "{:>6}  {:<16} {:<10} {:>18}",
            entry.rank,
            entry.display_name(),
            entry.badge_tier.as_str(),
            format_number(entry.points)
        );
    }
}
