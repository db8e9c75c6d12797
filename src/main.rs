use clap::{Parser, Subcommand};
use sarpedon::server::{
    config::Config,
    model::app::AppState,
    scheduler::Scheduler,
    service::{
        leaderboard::LeaderboardService, ledger::ScoreLedger,
        materializer::LeaderboardMaterializer,
    },
    startup,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sarpedon")]
#[command(about = "Score ledger and leaderboard for image-based competitions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the scoreboard, then keep rebuilding it on the configured schedule
    Serve,
    /// Rebuild the scoreboard once from the ledger
    Rebuild,
    /// Print the scoreboard as CSV
    ExportCsv,
    /// Print a team's scoreboard entries as JSON
    Scores {
        #[arg(long)]
        team: String,

        #[arg(long)]
        image: Option<String>,
    },
    /// Print a team's result history as JSON
    History {
        #[arg(long)]
        team: String,

        #[arg(long)]
        image: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("sarpedon={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = startup::build_state(&config).await?;

    match cli.command {
        Commands::Serve => serve(state, &config.rebuild_cron).await?,
        Commands::Rebuild => {
            let count = LeaderboardMaterializer::new(&state.session)
                .rebuild_all()
                .await?;
            println!("{}", count);
        }
        Commands::ExportCsv => {
            let csv = LeaderboardService::new(&state.session, &state.images)
                .export_csv()
                .await?;
            print!("{}", csv);
        }
        Commands::Scores { team, image } => {
            let entries = LeaderboardService::new(&state.session, &state.images)
                .list_for_team(&team, image.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::History { team, image } => {
            let events = ScoreLedger::new(&state.session)
                .query_history(&team, image.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
    }

    Ok(())
}

async fn serve(state: AppState, rebuild_cron: &str) -> Result<(), Box<dyn std::error::Error>> {
    LeaderboardMaterializer::new(&state.session)
        .rebuild_all()
        .await?;

    let mut sched = Scheduler::new(state).await?.start(rebuild_cron).await?;

    tracing::info!("Scheduled scoreboard rebuilds on {:?}", rebuild_cron);

    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down");
    sched.shutdown().await?;

    Ok(())
}
