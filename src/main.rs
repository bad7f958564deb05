//! Command-line host for the cohesivegov dashboard.
//!
//! The binary is a thin shell around the library:
//!
//! 1. Parse arguments, load the config and apply `--set` overrides
//! 2. Initialize tracing
//! 3. Build the [`Dashboard`](cohesivegov::Dashboard) via `initialize`
//! 4. Translate the subcommand into [`Event`]s and feed them to `handle_event`
//! 5. Execute the returned [`Action`]s and print the rendered view
//!
//! All decisions (matching, ordering, export formatting, file naming) are made
//! by the library; this file only does I/O.

#![allow(clippy::multiple_crate_versions)]

mod cli;

use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands};
use cohesivegov::infrastructure::paths;
use cohesivegov::ui::{self, DetailViewModel, ListViewModel, Style};
use cohesivegov::{handle_event, Action, Config, DashboardError, Event, Result};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?.apply_overrides(&cli.overrides());
    cohesivegov::observability::init_tracing(&config, cli.verbose);

    let span = tracing::debug_span!("run", command = ?cli.command);
    let _guard = span.entered();

    let mut dashboard = cohesivegov::initialize(&config)?;
    let style = Style::new(cli.color);

    match &cli.command {
        command @ Commands::List { .. } => {
            for event in command.query_events((config.sort_key, config.sort_direction)) {
                handle_event(&mut dashboard, &event)?;
            }
            let vm = ListViewModel::from_dashboard(&dashboard);
            print!("{}", ui::render_list(&vm, style));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { id } => match dashboard.find_by_id(id) {
            Some(record) => {
                print!("{}", ui::render_detail(&DetailViewModel::from_record(record), style));
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("no initiative with id '{id}'");
                Ok(ExitCode::FAILURE)
            }
        },
        Commands::Facets { facet } => {
            let values = dashboard.distinct_values(*facet);
            print!("{}", ui::render_facet_values(facet.label(), values, style));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Export {
            id,
            format,
            out,
            stdout,
        } => {
            let event = Event::Export {
                id: id.clone(),
                format: *format,
                at: Utc::now(),
            };
            let (_, actions) = handle_event(&mut dashboard, &event)?;
            let out_dir = out.as_deref().unwrap_or(&config.export_dir);
            execute_actions(&actions, out_dir, *stdout)
        }
    }
}

fn execute_actions(actions: &[Action], out_dir: &Path, to_stdout: bool) -> Result<ExitCode> {
    let mut code = ExitCode::SUCCESS;

    for action in actions {
        match action {
            Action::WriteExport(payload) if to_stdout => print!("{}", payload.content),
            Action::WriteExport(payload) => {
                let path = paths::export_path(out_dir, &payload.file_name).ok_or_else(|| {
                    DashboardError::Export(format!("invalid export file name '{}'", payload.file_name))
                })?;
                std::fs::create_dir_all(out_dir)?;
                std::fs::write(&path, &payload.content)?;
                tracing::info!(path = %path.display(), bytes = payload.content.len(), "export written");
                println!("{}", path.display());
            }
            Action::RecordNotFound { id } => {
                eprintln!("no initiative with id '{id}'");
                code = ExitCode::FAILURE;
            }
        }
    }

    Ok(code)
}
