//! Главный исполняемый файл rustlex

use clap::Parser;
use rustlex::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let filter = EnvFilter::try_new(&config.logging.level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    // Записи `log` из библиотеки попадают в tracing
    tracing_log::LogTracer::init()?;

    tracing::debug!(dialect = %config.database_type, "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli.execute(&config, &mut out)
}
