//! routedit CLI
//!
//! Thin command-line front for the editing core: validate a config document
//! offline, or pull/push the live document from a backend.
//!
//! ```bash
//! routedit validate groups.json        # schema + per-rule pattern check
//! routedit pull --api http://router/api/v1 -o groups.json
//! routedit push --api http://router/api/v1 groups.json
//! routedit interfaces --api http://router/api/v1
//! routedit locale ru                   # persist the preferred locale
//! ```

use clap::{Parser, Subcommand};
use routedit::api::Client;
use routedit::config::{Preferences, load_preferences, save_preferences};
use routedit::core::model::Config;
use routedit::events::{EventBus, UiEvent};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "routedit")]
#[command(about = "Editing tool for domain-routing rule groups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file: schema shape plus every rule pattern
    Validate {
        /// Path to a config JSON document
        file: PathBuf,
    },
    /// Fetch the config from the backend
    Pull {
        /// Backend base URL (e.g. http://router/api/v1)
        #[arg(long)]
        api: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Push a config file to the backend, replacing the whole document
    Push {
        #[arg(long)]
        api: String,
        file: PathBuf,
    },
    /// List the interface ids known to the backend
    Interfaces {
        #[arg(long)]
        api: String,
    },
    /// Show or set the persisted locale preference
    Locale {
        /// Locale tag to persist (omit to show the current one)
        tag: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let _ = routedit::utils::ensure_dirs();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Bus whose subscriber renders toasts and overlay transitions to the
/// terminal, standing in for a graphical presentation layer.
fn terminal_bus() -> EventBus {
    let mut bus = EventBus::new();
    bus.subscribe(|event| match event {
        UiEvent::Toast { content, kind } => println!("[{kind}] {content}"),
        UiEvent::Overlay {
            content: Some(content),
            shown: true,
        } => eprintln!("... {content}"),
        UiEvent::Overlay { .. } => {}
    });
    bus
}

fn run(command: Commands) -> routedit::Result<ExitCode> {
    match command {
        Commands::Validate { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let config = Config::parse(&raw)?;
            let mut failures = 0usize;
            for group in &config.groups {
                for rule in &group.rules {
                    if !rule.is_valid() {
                        failures += 1;
                        println!(
                            "group {:?} rule {} ({}): {:?} is not a valid {} pattern",
                            group.name, rule.id, rule.name, rule.rule, rule.kind
                        );
                    }
                }
            }
            if failures == 0 {
                println!(
                    "ok: {} groups, all rule patterns valid",
                    config.groups.len()
                );
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{failures} invalid rule pattern(s)");
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Pull { api, output } => {
            let bus = terminal_bus();
            bus.overlay_show("fetching config");
            match Client::new(api).fetch_groups() {
                Ok(config) => {
                    bus.overlay_hide();
                    let json = config.to_json_string()?;
                    if let Some(path) = output {
                        std::fs::write(&path, json)?;
                        bus.toast_success(format!(
                            "saved {} groups to {}",
                            config.groups.len(),
                            path.display()
                        ));
                    } else {
                        println!("{json}");
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    bus.overlay_hide();
                    bus.toast_error(format!("fetch failed: {e}"));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Push { api, file } => {
            let raw = std::fs::read_to_string(&file)?;
            // Normalize (and so validate) before transmitting
            let config = Config::parse(&raw)?;
            let bus = terminal_bus();
            bus.overlay_show("saving config");
            match Client::new(api).save_groups(&config) {
                Ok(()) => {
                    bus.overlay_hide();
                    bus.toast_success(format!("pushed {} groups", config.groups.len()));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    bus.overlay_hide();
                    bus.toast_error(format!("save failed: {e}"));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Interfaces { api } => {
            let interfaces = Client::new(api).fetch_interfaces()?;
            for interface in &interfaces.interfaces {
                println!("{}", interface.id);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Locale { tag } => {
            if let Some(tag) = tag {
                let prefs = Preferences { locale: tag };
                save_preferences(&prefs)?;
                println!("locale set to {}", prefs.locale);
            } else {
                println!("{}", load_preferences().locale);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
