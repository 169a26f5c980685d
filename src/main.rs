use clap::Parser;
use polyodds::cli::{self, Cli, Commands, TableArgs};
use polyodds::config::{AppConfig, LoggingConfig};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        cli::output::print_error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;

    match cli.command {
        None => {
            init_logging(&config.logging);
            cli::table::run(TableArgs::default(), &config).await?;
        }
        Some(Commands::Table(args)) => {
            init_logging(&config.logging);
            cli::table::run(args, &config).await?;
        }
        Some(Commands::Dashboard) => {
            // Console output would corrupt the alternate screen
            let _guard = init_file_logging(&config.logging);
            run_dashboard(&config).await?;
        }
        Some(Commands::Races) => {
            init_logging(&config.logging);
            cli::show_races(&config);
        }
    }

    Ok(())
}

async fn run_dashboard(config: &AppConfig) -> anyhow::Result<()> {
    info!(endpoint = %config.api.base_url, "Launching dashboard");
    polyodds::tui::run_dashboard(config).await?;
    Ok(())
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

/// Console logging on stderr so `--json` output on stdout stays clean
fn init_logging(logging: &LoggingConfig) {
    let filter = env_filter(logging);

    if logging.json {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init();
    }
}

/// File-only logging for the dashboard. Logging is disabled if the directory is unusable.
fn init_file_logging(logging: &LoggingConfig) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(&logging.dir) {
        eprintln!(
            "Warning: Could not create log directory {} ({}), file logging disabled",
            logging.dir, e
        );
        return None;
    }

    let test_path = std::path::Path::new(&logging.dir).join(".polyodds_write_test");
    if let Err(e) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&test_path)
    {
        eprintln!(
            "Warning: Could not write to log directory {} ({}), file logging disabled",
            logging.dir, e
        );
        return None;
    }
    let _ = std::fs::remove_file(&test_path);

    let file_appender = tracing_appender::rolling::never(&logging.dir, "polyodds.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No color codes in file
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter(logging))
        .with(file_layer)
        .try_init();

    Some(guard)
}
