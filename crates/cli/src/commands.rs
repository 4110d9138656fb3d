use anyhow::{bail, Context};
use clap::Subcommand;
use rkn_roulette_domain::{Config, ServiceId, ServiceRecord, WheelLayout};
use rkn_roulette_infrastructure::export::FileExportWriter;
use std::io::{self, BufRead, Write};
use tracing::info;

use crate::console::{format_blocked, format_service, format_stats};
use crate::di::App;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the registry, newest first
    List,

    /// Show services that are not blocked
    Available,

    /// Show registry statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a service to the registry
    Block { id: ServiceId },

    /// Take a service out of the registry
    Unban { id: ServiceId },

    /// Remove a service from the system for good
    Delete {
        id: ServiceId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Empty the registry
    Clear,

    /// Write the registry to rkn_registry_<date>.json
    Export {
        /// Output directory (defaults to export.dir from config)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,
    },

    /// Spin the wheel over the available services
    Spin {
        /// Block whatever the wheel lands on
        #[arg(long)]
        block: bool,
    },

    /// Show the current wheel segments
    Wheel,

    /// Write a default configuration file
    InitConfig {
        #[arg(value_name = "FILE", default_value = "rkn-roulette.toml")]
        path: String,
    },
}

pub fn run(command: Command, mut app: App) -> anyhow::Result<()> {
    match command {
        Command::List => {
            if app.registry.blocked().is_empty() {
                println!("Registry is empty. Block the first service!");
            }
            for entry in app.registry.blocked() {
                println!("{}", format_blocked(entry));
            }
        }
        Command::Available => {
            for service in app.registry.available() {
                println!("{}", format_service(service));
            }
        }
        Command::Stats { json } => {
            let stats = app.registry.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", format_stats(&stats));
            }
        }
        Command::Block { id } => {
            let service = catalog_record(&app, id)?;
            app.registry.add(&service)?;
        }
        Command::Unban { id } => {
            if !app.registry.remove(id)? {
                println!("Service {} is not in the registry", id);
            }
        }
        Command::Delete { id, yes } => {
            let service = catalog_record(&app, id)?;
            if !yes && !confirm(&format!("Delete {} from the system for good?", service.name))? {
                println!("Cancelled");
                return Ok(());
            }
            app.registry.permanently_delete(&service)?;
        }
        Command::Clear => {
            app.registry.clear()?;
        }
        Command::Export { dir } => {
            if let Some(artifact) = app.registry.export()? {
                let path = match dir {
                    Some(dir) => FileExportWriter::new(dir).write(&artifact)?,
                    None => app.exporter.write(&artifact)?,
                };
                println!("Registry exported to {}", path.display());
            }
        }
        Command::Spin { block } => {
            let Some(outcome) = app.spin.execute(&app.registry) else {
                println!("Every service is blocked, nothing to spin");
                return Ok(());
            };
            println!(
                "The wheel turns {:.0} degrees over {:.1}s and stops on segment {}",
                outcome.plan.target_rotation_deg,
                outcome.plan.duration_ms as f64 / 1000.0,
                outcome.segment.index
            );
            println!("{}", format_service(&outcome.service));
            if block {
                app.registry.add(&outcome.service)?;
            }
        }
        Command::Wheel => {
            let layout = WheelLayout::build(app.registry.available());
            if layout.is_empty() {
                println!("Every service is blocked");
            }
            for segment in layout.segments() {
                println!(
                    "{:>2}  {:>5.1}°  {:>4}  {}",
                    segment.index, segment.angle, segment.service_id, segment.name
                );
            }
        }
        Command::InitConfig { path } => init_config(&path)?,
    }

    Ok(())
}

/// Writes the default configuration to `path`. Needs no registry, so `main`
/// runs it before anything is loaded.
pub fn init_config(path: &str) -> anyhow::Result<()> {
    Config::default().save(path)?;
    info!(path = %path, "Default configuration written");
    println!("Configuration written to {}", path);
    Ok(())
}

fn catalog_record(app: &App, id: ServiceId) -> anyhow::Result<ServiceRecord> {
    match app.registry.catalog().get_by_id(id) {
        Some(service) => Ok(service.clone()),
        None => bail!("Service {} is not in the catalog", id),
    }
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
