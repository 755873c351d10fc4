//! # zonetab
//!
//! Bidirectional lookup between country codes and timezone identifiers,
//! built from the tzdata `zone.tab` (or `zone1970.tab`) and `backward`
//! link tables.
//!
//! The index is built once from two text streams and is immutable after
//! that, so it can be shared freely between threads. Tables can be read
//! from any [`BufRead`](std::io::BufRead), or fetched from the local
//! filesystem or an HTTP server through a [`TableSource`].
//!
//! ## Features
//!
//! - Timezones of a country, with the country's representative timezone first
//! - Countries of a timezone, following legacy aliases with a cycle guard
//! - Locale based lookups through a pluggable [`LocaleCountry`] extractor
//! - Local and HTTP(S) table sources
//!
//! ## Example
//!
//! ```no_run
//! use zonetab::{LocalTableSource, ZoneTab};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let zone_tab = LocalTableSource::new("/usr/share/zoneinfo/zone.tab");
//!     let links = LocalTableSource::new("backward");
//!     let tab = ZoneTab::load(&zone_tab, &links).await?;
//!
//!     println!("{:?}", tab.primary_timezone_for_country("US"));
//!     println!("{:?}", tab.countries_for_timezone("US/Eastern"));
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod zonetab;

pub use cli::Cli;
pub use error::{ParseError, Table};
pub use io::{HttpTableSource, LocalTableSource, TableSource};
pub use zonetab::{LanguageTag, LocaleCountry, ZoneTab, ZoneTabBuilder};
