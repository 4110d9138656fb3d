use clap::Parser;
use rkn_roulette_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod console;
mod di;

use commands::Command;

#[derive(Parser)]
#[command(name = "rkn-roulette")]
#[command(version)]
#[command(about = "RKN Roulette - spin the wheel, fill the registry")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Directory holding the registry snapshot
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<String>,

    /// Service catalog JSON file (defaults to the built-in catalog)
    #[arg(long, value_name = "FILE", global = true)]
    catalog: Option<String>,

    /// Directory for exported registries
    #[arg(long, value_name = "DIR", global = true)]
    export_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path } = &cli.command {
        return commands::init_config(path);
    }

    let cli_overrides = CliOverrides {
        data_dir: cli.data_dir,
        catalog_path: cli.catalog,
        export_dir: cli.export_dir,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting RKN Roulette v{}", env!("CARGO_PKG_VERSION"));

    let app = di::App::new(&config)?;

    commands::run(cli.command, app)
}
