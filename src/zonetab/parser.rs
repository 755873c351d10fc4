//! Line-level parsing of the tzdata tables.
//!
//! Both tables are line oriented. Lines starting with `#` are comments and
//! lines with too few columns are skipped without complaint, so a table
//! can never fail to parse once its bytes have been read.
//!
//! ## Links table
//!
//! Whitespace separated, at least three columns:
//!
//! ```text
//! Link    America/New_York    US/Eastern
//! ```
//!
//! Column 1 is the canonical identifier, column 2 the alias that points
//! at it. Anything in column 0 or past column 2 is ignored.
//!
//! ## Zone table
//!
//! Tab separated, at least three columns:
//!
//! ```text
//! US	+404251-0740023	America/New_York	Eastern (most areas)
//! CH,DE,LI	+4723+00832	Europe/Zurich
//! ```
//!
//! Column 0 lists one or more country codes, column 2 the timezone.
//! The coordinates in column 1 and trailing comments are ignored.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::index::ZoneTab;

/// Comment marker shared by both tables.
const COMMENT: char = '#';

/// Minimum number of columns a record needs in either table.
const MIN_COLUMNS: usize = 3;

/// Mutable accumulator for the two parse passes.
///
/// Feed it links lines and zone table lines in any order, then call
/// [`finish`](Self::finish) to freeze the result into a [`ZoneTab`].
#[derive(Debug, Default)]
pub struct ZoneTabBuilder {
    links: HashMap<String, String>,
    by_country: HashMap<String, Vec<String>>,
    by_timezone: HashMap<String, Vec<String>>,
    /// First timezone seen for a country listed first in its row.
    representative: HashMap<String, String>,
}

impl ZoneTabBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one line of the links table.
    ///
    /// A later record for the same alias replaces the earlier one.
    pub fn add_link_line(&mut self, line: &str) {
        if is_skipped(line) {
            return;
        }

        let mut cols = line.split_whitespace();
        let (Some(_), Some(canonical), Some(alias)) = (cols.next(), cols.next(), cols.next())
        else {
            return;
        };

        // A self link cancels any earlier record for the alias
        if alias == canonical {
            self.links.remove(alias);
            return;
        }

        self.links.insert(alias.to_string(), canonical.to_string());
    }

    /// Record one line of the zone table.
    pub fn add_zone_line(&mut self, line: &str) {
        if line.starts_with(COMMENT) {
            return;
        }

        let cols = zone_columns(line);
        if cols.len() < MIN_COLUMNS {
            return;
        }
        let timezone = cols[2];

        // Positions count empty codes, so `,US` does not lead with US
        let countries = cols[0].split(',').enumerate().filter(|(_, c)| !c.is_empty());
        for (i, country) in countries {
            self.by_timezone
                .entry(timezone.to_string())
                .or_default()
                .push(country.to_string());

            let timezones = self.by_country.entry(country.to_string()).or_default();
            match self.representative.entry(country.to_string()) {
                Entry::Vacant(slot) if i == 0 => {
                    // Held back and prepended in `finish`
                    slot.insert(timezone.to_string());
                }
                _ => timezones.push(timezone.to_string()),
            }
        }
    }

    /// Freeze the accumulated tables.
    ///
    /// Each country's representative timezone is moved to the front of its
    /// list; the rest keep the order they were read in.
    pub fn finish(self) -> ZoneTab {
        let Self {
            links,
            mut by_country,
            by_timezone,
            representative,
        } = self;

        for (country, timezone) in representative {
            by_country.entry(country).or_default().insert(0, timezone);
        }

        ZoneTab::from_parts(
            freeze(by_country),
            freeze(by_timezone),
            links.into_iter().collect(),
        )
    }
}

fn is_skipped(line: &str) -> bool {
    line.starts_with(COMMENT) || line.trim().is_empty()
}

/// Split a zone table line on tabs, dropping trailing empty columns.
fn zone_columns(line: &str) -> Vec<&str> {
    let mut cols: Vec<&str> = line.split('\t').collect();
    while cols.last().is_some_and(|c| c.is_empty()) {
        cols.pop();
    }
    cols
}

fn freeze(map: HashMap<String, Vec<String>>) -> HashMap<String, Box<[String]>> {
    map.into_iter()
        .map(|(key, values)| (key, values.into_boxed_slice()))
        .collect()
}
