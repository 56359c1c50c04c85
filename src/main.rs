use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pgsharp_checker::check::pipeline::VersionCheckPipeline;
use pgsharp_checker::config::{self, CheckerConfig};
use pgsharp_checker::device::adb::AdbVersionProvider;
use pgsharp_checker::device::provider::{FixedVersionProvider, InstalledVersionProvider};
use pgsharp_checker::notify::ConsoleNotifier;
use pgsharp_checker::prefs::Preferences;
use pgsharp_checker::watch;
use pgsharp_checker::web::fetcher::HttpPageFetcher;

#[derive(Parser)]
#[command(name = "pgsharp-checker")]
#[command(version, about = "Checks the installed Pokemon Go version against PGSharp")]
struct Cli {
    /// Use this installed version instead of querying the device
    #[arg(long, global = true)]
    installed: Option<String>,

    /// Write logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single check now (default)
    Check,
    /// Run checks on a fixed interval until interrupted
    Watch {
        /// Hours between checks
        #[arg(long)]
        interval_hours: Option<u64>,
    },
    /// Enable automatic checks for watch mode
    Enable,
    /// Disable automatic checks for watch mode
    Disable,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file)?;

    match cli.command.unwrap_or(Command::Check) {
        Command::Enable => set_auto_check(true),
        Command::Disable => set_auto_check(false),
        Command::Check => runtime()?.block_on(check_once(cli.installed)),
        Command::Watch { interval_hours } => {
            runtime()?.block_on(watch_forever(cli.installed, interval_hours))
        }
    }
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

async fn check_once(installed: Option<String>) -> anyhow::Result<()> {
    let config = CheckerConfig::load(&config::config_path())?;
    let pipeline = VersionCheckPipeline::new(
        Arc::new(HttpPageFetcher::default()),
        &config.site_url,
    );
    let provider = build_provider(installed, &config);

    let outcome = watch::run_check_cycle(&pipeline, provider.as_ref(), &ConsoleNotifier)
        .await
        .map_err(|e| anyhow::anyhow!("check failed: {e}"))?;

    println!("Installed Pokemon Go: {}", outcome.installed_version);
    println!("Latest on PGSharp:    {}", outcome.latest_version);
    if !outcome.update_available {
        println!("Your version matches PGSharp's supported version.");
    }
    Ok(())
}

async fn watch_forever(
    installed: Option<String>,
    interval_hours: Option<u64>,
) -> anyhow::Result<()> {
    let config = CheckerConfig::load(&config::config_path())?;
    let pipeline = VersionCheckPipeline::new(
        Arc::new(HttpPageFetcher::default()),
        &config.site_url,
    );
    let provider = build_provider(installed, &config);

    // Starting the watch turns the preference on, same as `enable`
    let prefs_path = config::prefs_path();
    let mut prefs = Preferences::load(&prefs_path)?;
    if !prefs.auto_check_enabled {
        prefs.auto_check_enabled = true;
        prefs.store(&prefs_path)?;
    }

    let hours = interval_hours.unwrap_or(config.check_interval_hours);
    info!("Watching for version changes every {} hours", hours);

    watch::run_watch(
        &pipeline,
        provider.as_ref(),
        &ConsoleNotifier,
        &prefs_path,
        Duration::from_secs(hours * 60 * 60),
    )
    .await;
    Ok(())
}

fn build_provider(
    installed: Option<String>,
    config: &CheckerConfig,
) -> Box<dyn InstalledVersionProvider> {
    match installed {
        Some(version) => Box::new(FixedVersionProvider::new(&version)),
        None => Box::new(AdbVersionProvider::new(&config.adb_path)),
    }
}

fn set_auto_check(enabled: bool) -> anyhow::Result<()> {
    let path = config::prefs_path();
    let mut prefs = Preferences::load(&path)?;
    prefs.auto_check_enabled = enabled;
    prefs.store(&path)?;
    println!(
        "Automatic checks {}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

fn init_tracing(
    log_file: bool,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if log_file {
        let dir = config::data_dir();
        std::fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::never(&dir, "pgsharp-checker.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        info!("Logging to {}", config::log_path().display());
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    }
}
