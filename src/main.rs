//! Main entry point for the zonetab CLI application.
//!
//! Loads a zone table and a links table from local files or HTTP URLs
//! and answers a single country or timezone query.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use zonetab::{Cli, LanguageTag, ZoneTab, io::source_for};

/// Application entry point.
///
/// Exits with status 1 when the queried key is unknown.
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let zone_tab = source_for(&cli.zone_tab, cli.max_retry)?;
    let links = source_for(&cli.links, cli.max_retry)?;
    let tab = ZoneTab::load(zone_tab.as_ref(), links.as_ref()).await?;

    let found = run_query(&tab, &cli);
    if !found {
        eprintln!("Not found");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the answer to the query selected on the command line.
///
/// Returns `false` if the key is unknown.
fn run_query(tab: &ZoneTab, cli: &Cli) -> bool {
    if cli.list_countries {
        print_sorted(tab.countries());
        return true;
    }

    if cli.list_timezones {
        print_sorted(tab.timezones());
        return true;
    }

    if let Some(ref country) = cli.country {
        return print_entries(tab.timezones_for_country(country), cli.primary);
    }

    if let Some(ref locale) = cli.locale {
        return print_entries(tab.timezones_for_locale(locale, &LanguageTag), cli.primary);
    }

    if let Some(ref timezone) = cli.timezone {
        // The primary country can differ from the head of the full list
        // when an identifier is both listed and aliased
        if cli.primary {
            return print_line(tab.primary_country_for_timezone(timezone));
        }
        return print_entries(tab.countries_for_timezone(timezone), false);
    }

    false
}

fn print_entries(entries: Option<&[String]>, primary: bool) -> bool {
    match entries {
        Some(entries) if primary => print_line(entries.first().map(String::as_str)),
        Some(entries) => {
            for entry in entries {
                println!("{}", entry);
            }
            true
        }
        None => false,
    }
}

fn print_line(entry: Option<&str>) -> bool {
    match entry {
        Some(entry) => {
            println!("{}", entry);
            true
        }
        None => false,
    }
}

fn print_sorted<'a>(keys: impl Iterator<Item = &'a str>) {
    let mut keys: Vec<_> = keys.collect();
    keys.sort_unstable();
    for key in keys {
        println!("{}", key);
    }
}
