//! Command-line interface definitions and parsing.
//!
//! # Commands
//!
//! - **list**: search, filter and sort the catalog, then print the result list
//! - **show**: print the full detail of one initiative
//! - **facets**: print the selectable values of one facet
//! - **export**: write one initiative as text, JSON, CSV or print HTML
//!
//! Global flags select the config file, override single config keys and turn
//! on stderr logging.

use clap::{Parser, Subcommand};
use cohesivegov::query::{Facet, SortDirection, SortKey};
use cohesivegov::{Event, ExportFormat};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cohesivegov", version, about = "Query and export government initiatives")]
pub struct Cli {
    /// Config file (default: <config dir>/cohesivegov/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override a config key, e.g. `--set data_file=./catalog.json`
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use ANSI styling in output
    #[arg(long, global = true)]
    pub color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List initiatives matching a search and filters
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive substring of title, id, focus area, lead agency or tags
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        /// Facet filter, repeatable. Values of one facet are ORed, facets are ANDed
        #[arg(short, long = "filter", value_name = "FACET=VALUE", value_parser = parse_filter)]
        filters: Vec<(Facet, String)>,

        /// Sort key: lastUpdate, progress, title or priority
        #[arg(long, value_name = "KEY")]
        sort: Option<SortKey>,

        /// Sort direction: asc or desc
        #[arg(long, value_name = "DIR")]
        direction: Option<SortDirection>,
    },

    /// Show one initiative in full
    Show {
        id: String,
    },

    /// List the selectable values of a facet
    Facets {
        /// status, focusArea, leadAgency, priority, buyIn or stakeholderName
        facet: Facet,
    },

    /// Export one initiative
    Export {
        id: String,

        /// text, json, csv or print
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        /// Output directory (default: export_dir from config)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Print the payload instead of writing a file
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> BTreeMap<String, String> {
        self.overrides.iter().cloned().collect()
    }
}

impl Commands {
    /// Query events for `list`, in application order: sort, search, filters.
    #[must_use]
    pub fn query_events(&self, default_sort: (SortKey, SortDirection)) -> Vec<Event> {
        let Self::List {
            search,
            filters,
            sort,
            direction,
        } = self
        else {
            return vec![];
        };

        let mut events = Vec::new();
        if sort.is_some() || direction.is_some() {
            events.push(Event::SetSort {
                key: sort.unwrap_or(default_sort.0),
                direction: direction.unwrap_or(default_sort.1),
            });
        }
        if let Some(search) = search {
            events.push(Event::SetSearch(search.clone()));
        }
        events.extend(filters.iter().map(|(facet, value)| Event::ToggleFacet {
            facet: *facet,
            value: value.clone(),
        }));
        events
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}

fn parse_filter(s: &str) -> Result<(Facet, String), String> {
    let (facet, value) = parse_key_value(s)?;
    Ok((facet.parse()?, value))
}
